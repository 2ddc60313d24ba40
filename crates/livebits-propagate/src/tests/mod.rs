//! Test suites for the liveness propagators.


use crate::Operand;
use livebits_core::{BitVec, KnownBits};

/// Signature shared by both public liveness operations.
pub(crate) type PropagateFn = fn(Operand, &BitVec, &KnownBits, &KnownBits) -> BitVec;

pub(crate) fn bv(width: usize, value: u64) -> BitVec {
    BitVec::from_u64(width, value)
}

pub(crate) fn kb(width: usize, zero: u64, one: u64) -> KnownBits {
    KnownBits::new(bv(width, zero), bv(width, one))
}

/// Visit every valid known-bits fact of the given width as a `(zero, one)`
/// pair: all zero masks, and for each, every subset of its complement.
pub(crate) fn for_each_fact(bits: u32, f: &mut impl FnMut(u64, u64)) {
    let max = 1u64 << bits;
    for zero in 0..max {
        let mut one = 0u64;
        while one < max {
            f(zero, one);
            one = ((one | zero) + 1) & !zero;
        }
    }
}

/// Visit every concrete value consistent with the fact: the known ones plus
/// every subset of the unknown positions.
pub(crate) fn for_each_consistent_value(bits: u32, zero: u64, one: u64, f: &mut impl FnMut(u64)) {
    let max = 1u64 << bits;
    let known = zero | one;
    let mut remaining = 0u64;
    while remaining < max {
        f(one | remaining);
        remaining = ((remaining | known) + 1) & !known;
    }
}
