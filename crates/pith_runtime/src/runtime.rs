//! Per-program runtime state.

use std::io::BufRead;
use std::rc::Rc;

use crate::{Console, Random, RuntimeConfig, Scheduler, Tracer};

/// Everything a running program shares: configuration, the scheduler that
/// tracks pending deferred values, the random source and trace output.
/// Independent runtimes do not share any of it.
pub struct Runtime {
    config: RuntimeConfig,
    scheduler: Rc<Scheduler>,
    random: Random,
    tracer: Tracer,
}

impl Runtime {
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            scheduler: Rc::new(Scheduler::new()),
            random: Random::from_config(&config),
            tracer: Tracer::new(&config),
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &Rc<Scheduler> {
        &self.scheduler
    }

    pub fn random(&self) -> &Random {
        &self.random
    }

    pub fn trace(&self, msg: &str) {
        self.tracer.trace(msg);
    }

    pub fn console(&self, input: Box<dyn BufRead>) -> Console {
        Console::new(&self.scheduler, input)
    }

    pub fn stdin_console(&self) -> Console {
        Console::stdin(&self.scheduler)
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(RuntimeConfig::default())
    }
}
