//! Operand liveness propagation for fixed-width add and sub.
//!
//! Given partial knowledge (known-zero/known-one bits) about both operands
//! of an addition or subtraction and a mask of demanded output bits, the
//! propagators here compute which bits of one operand can influence any
//! demanded bit. Carry and borrow dependency chains are characterized with a
//! constant number of fixed-width bit operations via a reversed-bit-order
//! addition, so a query costs the same as a handful of register ops
//! regardless of how many bits are demanded.
//!
//! Results are sound: a bit reported dead cannot change any demanded output
//! bit under any assignment of the other operand consistent with its fact.
//! Precision degrades gracefully: with all-unknown facts every position at
//! or below the highest demanded bit is reported live.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod carry;
pub mod liveness;

pub use liveness::{
    live_bits_of_add_operand, live_bits_of_sub_operand, AddLiveness, Operand, OperandLiveness,
    SubLiveness,
};
pub use livebits_core::{BitVec, KnownBits, LiveBitsError};

#[cfg(test)]
mod tests;
