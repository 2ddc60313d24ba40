//! Error types for the livebits crates.

use crate::bitvec::BitVec;
use thiserror::Error;

/// Errors raised when validating caller-supplied inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiveBitsError {
    /// Two values that must share a bit width do not.
    #[error("width mismatch: expected {expected} bits, got {got}")]
    WidthMismatch {
        /// Width of the first value seen.
        expected: usize,
        /// Width of the offending value.
        got: usize,
    },

    /// A known-bits fact claims some position is both zero and one.
    #[error("conflicting known bits: zero and one overlap at {overlap}")]
    ConflictingKnownBits {
        /// The positions claimed by both halves of the fact.
        overlap: BitVec,
    },
}

/// Result type for livebits operations.
pub type Result<T> = std::result::Result<T, LiveBitsError>;
