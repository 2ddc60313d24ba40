//! Shared types for operand bit-liveness analysis.
//!
//! This crate provides the support types consumed by the propagators in
//! `livebits-propagate`:
//! - Fixed-width bit vectors with wraparound arithmetic and bit reversal
//! - Known-bits facts (per-bit zero/one/unknown knowledge)
//! - The shared error type

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitvec;
pub mod error;
pub mod known;

pub use bitvec::BitVec;
pub use error::{LiveBitsError, Result};
pub use known::KnownBits;
