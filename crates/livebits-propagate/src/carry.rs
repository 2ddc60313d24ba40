//! Carry-span kernel: bit-parallel nearest-blocked-position search.
//!
//! Given a mask of positions where the carry (or borrow) chain is provably
//! blocked and a mask of demanded output positions, compute every input
//! position that a carry can travel through into some demanded bit: for each
//! demanded position `i`, the positions from the nearest blocked position
//! strictly below `i` (inclusive; position 0 when none) up to `i` exclusive.
//!
//! The search runs for all demanded bits at once by reversing bit order,
//! where "nearest block below" becomes "next block above" and one wraparound
//! addition smears each demanded position upward until a blocked position
//! absorbs the carry. This keeps the kernel at a constant number of
//! fixed-width operations instead of a per-bit scan.

use livebits_core::BitVec;

/// Positions reachable by a carry/borrow chain into some demanded bit.
///
/// `bound` marks blocked positions; `demanded` marks observed output bits.
/// The demanded positions themselves are not included; callers union them
/// back in.
pub(crate) fn propagation_span(bound: &BitVec, demanded: &BitVec) -> BitVec {
    assert_eq!(
        bound.width(),
        demanded.width(),
        "bound/demanded width mismatch: {} vs {}",
        bound.width(),
        demanded.width()
    );
    let rbound = bound.reverse_bits();
    let rdemanded = demanded.reverse_bits();
    let rprop = rdemanded.wrapping_add(&(&rdemanded | !&rbound));
    let rspan = rprop ^ !(&rdemanded | &rbound);
    rspan.reverse_bits()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bv(width: usize, value: u64) -> BitVec {
        BitVec::from_u64(width, value)
    }

    fn span(width: usize, bound: u64, demanded: u64) -> u64 {
        propagation_span(&bv(width, bound), &bv(width, demanded)).low_u64()
    }

    /// Per-bit reference: for each demanded `i`, mark the positions from the
    /// nearest blocked position strictly below `i` (or 0) up to `i` exclusive.
    fn reference_span(width: usize, bound: u64, demanded: u64) -> u64 {
        let mut out = 0u64;
        for i in 0..width {
            if demanded >> i & 1 == 0 {
                continue;
            }
            let below_mask = (1u64 << i) - 1;
            let blocks_below = bound & below_mask;
            let nearest = if blocks_below != 0 {
                63 - blocks_below.leading_zeros() as usize
            } else {
                0
            };
            for j in nearest..i {
                out |= 1 << j;
            }
        }
        out
    }

    #[test]
    fn span_reaches_down_to_nearest_block() {
        assert_eq!(span(8, 0b0000_1000, 0b1000_0000), 0b0111_1000);
    }

    #[test]
    fn span_without_blocks_reaches_bit_zero() {
        assert_eq!(span(8, 0, 0b1000_0000), 0b0111_1111);
    }

    #[test]
    fn block_just_below_demanded_pins_the_chain() {
        assert_eq!(span(8, 0b0100_0000, 0b1000_0000), 0b0100_0000);
    }

    #[test]
    fn block_at_demanded_position_does_not_cut_incoming_carry() {
        // A block at `i` pins the carry out of `i`, not the carry into it.
        assert_eq!(span(8, 0b1000_0000, 0b1000_0000), 0b0111_1111);
    }

    #[test]
    fn empty_demanded_mask_yields_empty_span() {
        assert_eq!(span(8, 0b0010_1010, 0), 0);
        assert_eq!(span(8, 0, 0), 0);
    }

    #[test]
    fn spans_of_multiple_demanded_bits_union() {
        assert_eq!(span(4, 0b0010, 0b0110), 0b0011);
        assert_eq!(span(4, 0b1010, 0b1010), 0b0111);
    }

    #[test]
    fn matches_per_bit_reference_exhaustively() {
        for width in 1..=6usize {
            let max = 1u64 << width;
            for bound in 0..max {
                for demanded in 0..max {
                    assert_eq!(
                        span(width, bound, demanded),
                        reference_span(width, bound, demanded),
                        "width {width}, bound {bound:#b}, demanded {demanded:#b}"
                    );
                }
            }
        }
    }

    #[test]
    fn span_crosses_limb_boundaries() {
        let mut demanded = BitVec::zeros(70);
        demanded.set_bit(69);
        let mut bound = BitVec::zeros(70);
        bound.set_bit(1);
        let got = propagation_span(&bound, &demanded);
        let mut expected = BitVec::zeros(70);
        for i in 1..69 {
            expected.set_bit(i);
        }
        assert_eq!(got, expected);
    }

    #[test]
    #[should_panic(expected = "width mismatch")]
    fn width_mismatch_panics() {
        propagation_span(&BitVec::zeros(8), &BitVec::zeros(16));
    }
}
