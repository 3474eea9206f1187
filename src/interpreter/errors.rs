//! Runtime error types for the maze interpreter
//!
//! This module defines [`RuntimeError`], the failures a value operation can report
//! while a car executes a command.
//!
//! None of these are fatal. A malformed program must keep running, so the engine
//! logs the error and treats the offending command as a no-op (or the offending
//! condition as false).

use thiserror::Error;

/// Errors produced by arithmetic and comparison on car values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// Arithmetic between values whose types do not support the operator
    #[error("cannot apply '{op}' to {lhs} and {rhs}")]
    TypeMismatch {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },

    /// Ordering comparison between values of incompatible types
    #[error("cannot compare {lhs} with {rhs} using '{op}'")]
    Incomparable {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },

    /// Text repetition would exceed the text length limit
    #[error("text of {len} bytes exceeds the limit of {limit}")]
    TextTooLong { len: usize, limit: usize },
}
