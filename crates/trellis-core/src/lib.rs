//! # Trellis Core
//!
//! Types shared by every Trellis crate. At the moment this is the
//! [`exception`] module, which defines the single error type raised by
//! element builders, sequence helpers and the action resolver.

pub mod exception;

pub use exception::{Error, Result};
