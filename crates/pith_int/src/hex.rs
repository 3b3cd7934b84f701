use crate::ExactInt;

impl ExactInt {
    /// Render the magnitude in hexadecimal with a leading `-` for negative
    /// values. No `0x` prefix is added.
    pub fn to_hex_string(&self, use_upper_case: bool) -> String {
        let magnitude = self.0.magnitude();
        let digits = if use_upper_case {
            format!("{magnitude:X}")
        } else {
            format!("{magnitude:x}")
        };
        if self.is_negative() {
            let mut out = String::with_capacity(digits.len() + 1);
            out.push('-');
            out.push_str(&digits);
            out
        } else {
            digits
        }
    }
}
