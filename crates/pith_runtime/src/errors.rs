//! Named runtime failures.
//!
//! Core operations report absence with `Option`; code that wants a failure
//! instead converts through `require` or one of the constructors here.

use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error("{0}")]
    Error(String),
    #[error("{}", pattern_match_message(.location, .definition))]
    PatternMatch { location: String, definition: String },
    #[error("unreachable code reached")]
    Unreachable,
    #[error("external '{0}' is not supported on this platform")]
    UnsupportedExternal(String),
    #[error("end of input")]
    EndOfInput,
}

pub type RtResult<A> = Result<A, RuntimeError>;

fn pattern_match_message(location: &str, definition: &str) -> String {
    if definition.is_empty() {
        format!("{location}: pattern match failure")
    } else {
        format!("{location}: {definition}: pattern match failure")
    }
}

pub fn fail<A>(message: impl Into<String>) -> RtResult<A> {
    Err(RuntimeError::Error(message.into()))
}

pub fn pattern_match_error<A>(location: impl Into<String>, definition: impl Into<String>) -> RtResult<A> {
    Err(RuntimeError::PatternMatch {
        location: location.into(),
        definition: definition.into(),
    })
}

pub fn unreachable_code<A>() -> RtResult<A> {
    Err(RuntimeError::Unreachable)
}

pub fn unsupported_external<A>(name: impl Into<String>) -> RtResult<A> {
    Err(RuntimeError::UnsupportedExternal(name.into()))
}

/// Turn an absent result into a named failure.
pub fn require<A>(value: Option<A>, err: impl FnOnce() -> RuntimeError) -> RtResult<A> {
    value.ok_or_else(err)
}

/// Run `action`; on failure hand the error to `handler` for a fallback value.
pub fn catch<A>(action: impl FnOnce() -> RtResult<A>, handler: impl FnOnce(RuntimeError) -> A) -> A {
    match action() {
        Ok(v) => v,
        Err(e) => handler(e),
    }
}

/// Run `action`, then `cleanup`, whether `action` succeeds, fails or panics.
pub fn finally<A>(action: impl FnOnce() -> RtResult<A>, cleanup: impl FnOnce()) -> RtResult<A> {
    let outcome = catch_unwind(AssertUnwindSafe(action));
    cleanup();
    match outcome {
        Ok(result) => result,
        Err(payload) => resume_unwind(payload),
    }
}
