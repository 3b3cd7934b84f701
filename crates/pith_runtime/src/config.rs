//! Runtime configuration options.

#[derive(Clone, Copy, Debug)]
pub struct RuntimeConfig {
    /// Emit `trace` messages through the logger.
    pub trace: bool,
    /// Fixed seed for the random source; `None` seeds from the clock.
    pub rng_seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            trace: true,
            rng_seed: None,
        }
    }
}
