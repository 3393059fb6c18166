//! Shared types for `nmapsum`.
//!
//! * **[`report`]**: the record produced by a single pass over a transcript.
//! * **[`config`]**: knobs passed explicitly into the parser.
//! * **[`error`]**: the error type returned by the library crates.

pub mod config;
pub mod error;
pub mod report;

pub use error::{Error, Result};
