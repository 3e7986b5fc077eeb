//! Core error type.
//!
//! Simulation math never fails: out-of-range inputs are clamped.  The only
//! error is a configuration that had to be repaired.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RkError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `rk-*` crates.
pub type RkResult<T> = Result<T, RkError>;
