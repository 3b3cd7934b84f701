use crate::RuntimeConfig;

pub const TRACE_TARGET: &str = "pith::trace";

/// Program trace output, routed through the logger.
#[derive(Clone, Copy, Debug)]
pub struct Tracer {
    enabled: bool,
}

impl Tracer {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            enabled: config.trace,
        }
    }

    pub fn trace(&self, msg: &str) {
        if self.enabled {
            log::info!(target: TRACE_TARGET, "{msg}");
        }
    }
}
