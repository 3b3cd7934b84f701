//! UTF-16 text, codepoint scanning and zero-copy slices.
//!
//! - `Text` - immutable, reference-counted UTF-16 buffer
//! - `scanner` - surrogate classification and codepoint widths
//! - `Slice` - codepoint-aligned view `(text, start, len)` into a `Text`
//! - `convert` - whole-buffer conversions to and from codepoints
//! - `List` - persistent linked list used for structurally shared sequences

pub mod convert;
pub mod list;
pub mod scanner;
pub mod slice;
pub mod text;

pub use convert::{
    codepoint_list_to_string, codepoints_to_string, string_count, string_to_codepoint_list,
    string_to_codepoints,
};
pub use list::List;
pub use slice::{Codepoints, Slice};
pub use text::Text;
