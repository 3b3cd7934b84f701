//! Console event loop.
//!
//! `run_main` runs the program body, then keeps feeding input lines to the
//! outstanding `read_line` request for as long as the scheduler reports
//! active deferred values.

use std::cell::RefCell;
use std::io::{self, BufRead, BufReader};
use std::rc::Rc;

use pith_text::Text;

use crate::{Deferred, RuntimeError, Scheduler};

struct ConsoleInner {
    scheduler: Rc<Scheduler>,
    input: RefCell<Box<dyn BufRead>>,
    pending: RefCell<Option<Deferred<Text>>>,
}

#[derive(Clone)]
pub struct Console {
    inner: Rc<ConsoleInner>,
}

impl Console {
    pub fn new(scheduler: &Rc<Scheduler>, input: Box<dyn BufRead>) -> Self {
        Self {
            inner: Rc::new(ConsoleInner {
                scheduler: scheduler.clone(),
                input: RefCell::new(input),
                pending: RefCell::new(None),
            }),
        }
    }

    pub fn stdin(scheduler: &Rc<Scheduler>) -> Self {
        Self::new(scheduler, Box::new(BufReader::new(io::stdin())))
    }

    pub fn scheduler(&self) -> &Rc<Scheduler> {
        &self.inner.scheduler
    }

    /// The next input line, without its line terminator.
    ///
    /// Only one read is outstanding at a time; calling again before the
    /// loop supplies a line returns the same deferred value.
    pub fn read_line(&self) -> Deferred<Text> {
        let mut pending = self.inner.pending.borrow_mut();
        pending
            .get_or_insert_with(|| Deferred::new(&self.inner.scheduler))
            .clone()
    }

    pub fn run_main<A>(&self, main: impl FnOnce(&Console) -> A) -> A {
        let result = main(self);
        while !self.inner.scheduler.all_done() {
            let Some(request) = self.inner.pending.borrow_mut().take() else {
                log::warn!(
                    "console: {} active deferred value(s) but no pending read_line",
                    self.inner.scheduler.active()
                );
                break;
            };
            match self.next_line() {
                Ok(Some(line)) => request.supply(Text::from(line)),
                Ok(None) => {
                    log::debug!("console: end of input");
                    request.supply_error(RuntimeError::EndOfInput);
                }
                Err(e) => request.supply_error(RuntimeError::Error(format!("read_line failed: {e}"))),
            }
        }
        result
    }

    fn next_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.inner.input.borrow_mut().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
