//! Operand liveness for fixed-width addition and subtraction.
//!
//! An operand bit is live when some assignment of the other operand's
//! unknown bits lets it change a demanded output bit. Both operations share
//! one combination formula and differ only in how blocked positions are
//! derived from the operands' known bits: addition blocks carries where both
//! operands are known zero, while subtraction (evaluated as `a + (~b + 1)`)
//! blocks borrows where the minuend is known one and the subtrahend known
//! zero.

use crate::carry;
use livebits_core::{BitVec, KnownBits};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Selects which operand of a binary operation a liveness query is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operand {
    /// The left operand (index 0).
    Lhs,
    /// The right operand (index 1).
    Rhs,
}

impl Operand {
    /// The conventional operand index: 0 for `Lhs`, 1 for `Rhs`.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Operand::Lhs => 0,
            Operand::Rhs => 1,
        }
    }

    /// Selector for the conventional operand index.
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Operand::Lhs,
            1 => Operand::Rhs,
            _ => panic!("operand index {index} out of range for a binary operation"),
        }
    }
}

/// A per-opcode operand liveness propagator.
///
/// Propagators are stateless; the enclosing dataflow engine holds one value
/// per supported opcode and dispatches through this trait.
pub trait OperandLiveness {
    /// Opcode name, for dispatch tables and logging.
    fn opcode(&self) -> &'static str;

    /// Live bits of `operand`, given the demanded output bits and both
    /// operands' known-bits facts.
    fn live_bits(
        &self,
        operand: Operand,
        demanded: &BitVec,
        lhs: &KnownBits,
        rhs: &KnownBits,
    ) -> BitVec;
}

/// Liveness propagator for addition.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddLiveness;

impl OperandLiveness for AddLiveness {
    fn opcode(&self) -> &'static str {
        "add"
    }

    fn live_bits(
        &self,
        operand: Operand,
        demanded: &BitVec,
        lhs: &KnownBits,
        rhs: &KnownBits,
    ) -> BitVec {
        live_bits_of_add_operand(operand, demanded, lhs, rhs)
    }
}

/// Liveness propagator for subtraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubLiveness;

impl OperandLiveness for SubLiveness {
    fn opcode(&self) -> &'static str {
        "sub"
    }

    fn live_bits(
        &self,
        operand: Operand,
        demanded: &BitVec,
        lhs: &KnownBits,
        rhs: &KnownBits,
    ) -> BitVec {
        live_bits_of_sub_operand(operand, demanded, lhs, rhs)
    }
}

/// Live bits of one addition operand.
///
/// A position where both operands are known zero cannot generate or pass a
/// carry, so it bounds the carry chains feeding every demanded bit above it.
pub fn live_bits_of_add_operand(
    operand: Operand,
    demanded: &BitVec,
    lhs: &KnownBits,
    rhs: &KnownBits,
) -> BitVec {
    check_widths(demanded, lhs, rhs);
    live_bits_add_sub("add", operand, demanded, &lhs.zero, &rhs.zero)
}

/// Live bits of one subtraction operand.
///
/// The borrow analogue of the addition bound: a position where the minuend
/// is known one and the subtrahend known zero pins the borrow chain there.
pub fn live_bits_of_sub_operand(
    operand: Operand,
    demanded: &BitVec,
    lhs: &KnownBits,
    rhs: &KnownBits,
) -> BitVec {
    check_widths(demanded, lhs, rhs);
    live_bits_add_sub("sub", operand, demanded, &lhs.one, &rhs.zero)
}

fn check_widths(demanded: &BitVec, lhs: &KnownBits, rhs: &KnownBits) {
    assert_eq!(
        demanded.width(),
        lhs.width(),
        "demanded/lhs width mismatch: {} vs {}",
        demanded.width(),
        lhs.width()
    );
    assert_eq!(
        demanded.width(),
        rhs.width(),
        "demanded/rhs width mismatch: {} vs {}",
        demanded.width(),
        rhs.width()
    );
}

fn live_bits_add_sub(
    opcode: &'static str,
    operand: Operand,
    demanded: &BitVec,
    bound_lhs: &BitVec,
    bound_rhs: &BitVec,
) -> BitVec {
    let width = demanded.width();
    // Carry chains are blocked only where both operands block them.
    let span = carry::propagation_span(&(bound_lhs & bound_rhs), demanded);
    // From the queried operand's view, carry sensitivity survives wherever
    // its own bound holds or the other operand's bound does not.
    let unconstrained = match operand {
        Operand::Lhs => bound_lhs | !bound_rhs,
        Operand::Rhs => bound_rhs | !bound_lhs,
    };
    // Positions where the two bounds together force a generated carry,
    // shifting the blocking topology by one.
    let forced_carry = bound_lhs
        .wrapping_add(bound_rhs)
        .wrapping_add(&BitVec::from_u64(width, 1));
    let live = demanded | &(span & (unconstrained | forced_carry));
    trace!(opcode, operand = operand.index(), width, live = %live, "operand liveness");
    live
}
