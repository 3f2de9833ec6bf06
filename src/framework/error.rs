//! # Record Errors
//!
//! Every failure in this crate is a validation failure raised at the point of violation.
//! Constructors and mutators return [`RecordError`] before touching any state, so a failed
//! call never leaves a half-built record or a bumped statistics counter behind.

use thiserror::Error;

/// Validation failures for record construction and mutation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The name is empty or whitespace-only.
    #[error("Name cannot be empty")]
    InvalidName,

    /// The identifier is not a positive integer.
    #[error("ID must be a positive integer, got {0}")]
    InvalidId(i64),

    /// A guest's room number is not a positive integer.
    #[error("Room number must be a positive integer, got {0}")]
    InvalidRoomNumber(i64),

    /// A guest's stay length is not a positive integer.
    #[error("Nights must be a positive integer, got {0}")]
    InvalidNights(i64),
}
