//! Runtime support around the pith core.
//!
//! The core crates never fail; this crate holds the collaborators that do
//! or that carry state: named errors, deferred values driven by an explicit
//! scheduler, the console event loop, and small helper surfaces.

pub mod arrays;
pub mod config;
pub mod console;
pub mod deferred;
pub mod dict;
pub mod errors;
pub mod random;
pub mod runtime;
pub mod strings;
pub mod trace;

pub use config::RuntimeConfig;
pub use console::Console;
pub use deferred::{Deferred, Scheduler};
pub use dict::Dict;
pub use errors::{RtResult, RuntimeError};
pub use random::{Lcg64, Random, RngAlgorithm};
pub use runtime::Runtime;
pub use trace::Tracer;
