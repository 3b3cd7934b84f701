//! Deferred values for cooperative asynchronous input.
//!
//! A `Deferred<A>` is completed at most once, with a value or an error.
//! Continuations registered before completion run in registration order when
//! it completes; registering on an already completed value runs the
//! continuation immediately if it matches the outcome.
//!
//! Liveness is tracked by an explicit `Scheduler` rather than global state:
//! a deferred value with pending continuations counts as active until it
//! completes, and an event loop keeps pumping input while anything is active.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::RuntimeError;

#[derive(Debug, Default)]
pub struct Scheduler {
    active: Cell<usize>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of deferred values currently waiting with continuations.
    pub fn active(&self) -> usize {
        self.active.get()
    }

    pub fn all_done(&self) -> bool {
        self.active.get() == 0
    }

    fn acquire(&self) {
        self.active.set(self.active.get() + 1);
    }

    fn release(&self) {
        self.active.set(self.active.get().saturating_sub(1));
    }
}

type Continuation<T> = Box<dyn FnOnce(T)>;

struct State<A> {
    outcome: Option<Result<A, RuntimeError>>,
    on_value: Vec<Continuation<A>>,
    on_error: Vec<Continuation<RuntimeError>>,
}

pub struct Deferred<A> {
    state: Rc<RefCell<State<A>>>,
    scheduler: Rc<Scheduler>,
}

impl<A> Clone for Deferred<A> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            scheduler: self.scheduler.clone(),
        }
    }
}

impl<A: Clone + 'static> Deferred<A> {
    pub fn new(scheduler: &Rc<Scheduler>) -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                outcome: None,
                on_value: Vec::new(),
                on_error: Vec::new(),
            })),
            scheduler: scheduler.clone(),
        }
    }

    pub fn scheduler(&self) -> &Rc<Scheduler> {
        &self.scheduler
    }

    pub fn is_done(&self) -> bool {
        self.state.borrow().outcome.is_some()
    }

    /// The completed outcome, if any.
    pub fn outcome(&self) -> Option<Result<A, RuntimeError>> {
        self.state.borrow().outcome.clone()
    }

    /// Run `f` on the value once it is supplied.
    ///
    /// The returned deferred completes with `f`'s result. If this value
    /// fails instead, `f` never runs and the returned deferred never
    /// completes.
    pub fn on<B: Clone + 'static>(&self, f: impl FnOnce(A) -> B + 'static) -> Deferred<B> {
        let result = Deferred::new(&self.scheduler);
        match self.outcome() {
            Some(Ok(value)) => result.supply(f(value)),
            Some(Err(_)) => {}
            None => {
                let target = result.clone();
                let mut state = self.state.borrow_mut();
                if state.on_value.is_empty() {
                    self.scheduler.acquire();
                }
                state.on_value.push(Box::new(move |value| target.supply(f(value))));
            }
        }
        result
    }

    /// Run `f` on the error if this value fails.
    pub fn on_error<B: Clone + 'static>(
        &self,
        f: impl FnOnce(RuntimeError) -> B + 'static,
    ) -> Deferred<B> {
        let result = Deferred::new(&self.scheduler);
        match self.outcome() {
            Some(Err(err)) => result.supply(f(err)),
            Some(Ok(_)) => {}
            None => {
                let target = result.clone();
                let mut state = self.state.borrow_mut();
                if state.on_error.is_empty() {
                    self.scheduler.acquire();
                }
                state.on_error.push(Box::new(move |err| target.supply(f(err))));
            }
        }
        result
    }

    /// Complete with a value. Ignored if already completed.
    pub fn supply(&self, value: A) {
        let Some((on_value, on_error)) = self.complete(Ok(value.clone())) else {
            return;
        };
        if !on_value.is_empty() {
            for k in on_value {
                k(value.clone());
            }
            self.scheduler.release();
        }
        if !on_error.is_empty() {
            self.scheduler.release();
        }
    }

    /// Complete with an error. Ignored if already completed.
    pub fn supply_error(&self, err: RuntimeError) {
        let Some((on_value, on_error)) = self.complete(Err(err.clone())) else {
            return;
        };
        if !on_error.is_empty() {
            for k in on_error {
                k(err.clone());
            }
            self.scheduler.release();
        }
        if !on_value.is_empty() {
            self.scheduler.release();
        }
    }

    /// Record the outcome and take the pending continuations. The borrow is
    /// released before any continuation runs so they may touch this value.
    #[allow(clippy::type_complexity)]
    fn complete(
        &self,
        outcome: Result<A, RuntimeError>,
    ) -> Option<(Vec<Continuation<A>>, Vec<Continuation<RuntimeError>>)> {
        let mut state = self.state.borrow_mut();
        if state.outcome.is_some() {
            return None;
        }
        state.outcome = Some(outcome);
        Some((
            std::mem::take(&mut state.on_value),
            std::mem::take(&mut state.on_error),
        ))
    }
}

impl<A: fmt::Debug> fmt::Debug for Deferred<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Deferred")
            .field("outcome", &state.outcome)
            .field("on_value", &state.on_value.len())
            .field("on_error", &state.on_error.len())
            .finish()
    }
}
