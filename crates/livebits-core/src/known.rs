//! Known-bits facts: per-bit zero/one/unknown knowledge about one value.

use crate::bitvec::BitVec;
use crate::error::{LiveBitsError, Result};
use serde::{Deserialize, Serialize};

/// Partial knowledge about one fixed-width value.
///
/// A bit is known-zero when set in `zero`, known-one when set in `one`, and
/// unknown when set in neither. Invariant: `zero & one == 0`; no position
/// may be claimed by both halves. Facts are produced by an external
/// known-bits analysis; this crate only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownBits {
    /// Positions known to hold a zero bit.
    pub zero: BitVec,
    /// Positions known to hold a one bit.
    pub one: BitVec,
}

impl KnownBits {
    /// Build a fact from its two halves.
    ///
    /// Debug-asserts the disjointness invariant and matching widths; use
    /// [`KnownBits::try_new`] to validate externally produced facts.
    pub fn new(zero: BitVec, one: BitVec) -> Self {
        debug_assert_eq!(
            zero.width(),
            one.width(),
            "known-bits halves must share a width"
        );
        debug_assert!(
            (&zero & &one).is_zero(),
            "known-bits conflict at {}",
            &zero & &one
        );
        Self { zero, one }
    }

    /// Checked constructor: rejects mismatched widths and overlapping halves.
    pub fn try_new(zero: BitVec, one: BitVec) -> Result<Self> {
        if zero.width() != one.width() {
            return Err(LiveBitsError::WidthMismatch {
                expected: zero.width(),
                got: one.width(),
            });
        }
        let overlap = &zero & &one;
        if !overlap.is_zero() {
            return Err(LiveBitsError::ConflictingKnownBits { overlap });
        }
        Ok(Self { zero, one })
    }

    /// A fact that knows nothing about any bit.
    pub fn unknown(width: usize) -> Self {
        Self {
            zero: BitVec::zeros(width),
            one: BitVec::zeros(width),
        }
    }

    /// A fact that knows the value exactly.
    pub fn constant(value: &BitVec) -> Self {
        Self {
            zero: !value,
            one: value.clone(),
        }
    }

    /// The common width of both halves.
    #[inline]
    pub fn width(&self) -> usize {
        self.zero.width()
    }

    /// Positions about which nothing is known.
    pub fn unknown_mask(&self) -> BitVec {
        !(&self.zero | &self.one)
    }

    /// Whether every bit is known.
    pub fn is_constant(&self) -> bool {
        self.unknown_mask().is_zero()
    }

    /// The exact value, when every bit is known.
    pub fn constant_value(&self) -> Option<BitVec> {
        if self.is_constant() {
            Some(self.one.clone())
        } else {
            None
        }
    }

    /// Whether the disjointness invariant is violated.
    pub fn has_conflict(&self) -> bool {
        !(&self.zero & &self.one).is_zero()
    }

    /// Retain knowledge only at positions set in `mask`.
    pub fn masked(&self, mask: &BitVec) -> Self {
        Self::new(&self.zero & mask, &self.one & mask)
    }
}
