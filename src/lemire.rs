// The Eisel-Lemire algorithm: decides the correctly rounded binary64 image
// of `mantissa * 10^exp10` with a single 64x64->128 multiplication against a
// tabulated power of ten, or reports that 128 bits of precision cannot
// decide it.
//
// # References
//
// - Daniel Lemire, Number Parsing at a Gigabyte per Second,
//   Software: Practice and Experience 51 (8), 2021.
//   https://arxiv.org/abs/2101.11408
// - https://nigeltao.github.io/blog/2020/eisel-lemire.html

use crate::{
    common::full_multiplication,
    table::{LARGEST_POWER_OF_TEN, POWER_OF_TEN, SMALLEST_POWER_OF_TEN},
};

// floor(2^16 * log2(10)) + 1; valid for the table's whole exponent range.
const LOG2_10_SCALED: i64 = 217_706;

const EXPONENT_BIAS: i64 = 1024 + 63;
const INFINITE_POWER: i64 = 0x7FF;

/// Computes `(-1)^negative * mantissa * 10^exp10`, correctly rounded, as a
/// finite normal binary64. Returns `None` when the result cannot be proven
/// correctly rounded from 128 bits of the power of ten (the caller falls
/// back to an exact parser), when it would be subnormal, or when `exp10` is
/// outside the tabulated range.
///
/// `mantissa` must be non-zero; it need not be normalized.
pub(crate) fn eisel_lemire(mantissa: u64, exp10: i64, negative: bool) -> Option<f64> {
    debug_assert!(mantissa != 0);

    if !(SMALLEST_POWER_OF_TEN..=LARGEST_POWER_OF_TEN).contains(&exp10) {
        return None;
    }

    // Normalize so the multiplication below uses all 64 bits.
    let lz = mantissa.leading_zeros();
    let m = mantissa << lz;

    // Estimate of the biased binary exponent: floor(exp10 * log2(10)) plus
    // the binary64 bias and the position of the leading 1 after
    // normalization.
    let mut e2 = ((LOG2_10_SCALED * exp10) >> 16) + EXPONENT_BIAS - i64::from(lz);

    let (t_lo, t_hi) = POWER_OF_TEN[(exp10 - SMALLEST_POWER_OF_TEN) as usize];
    let (mut lo, mut hi) = full_multiplication(m, t_hi);

    // The truncated power is within one unit of the real one, so the
    // product is within `m` of the real product. When the bits that decide
    // rounding sit within that slack, refine with the next 64 bits of the
    // power.
    if (hi & 0x1FF) == 0x1FF && lo.checked_add(m).is_none() {
        let (w_lo, w_hi) = full_multiplication(m, t_lo);
        let (merged, carry) = lo.overflowing_add(w_hi);
        if carry {
            hi += 1;
        }
        // Still all ones below the rounding point and still within `m` of
        // wrapping: 128 bits of the power cannot decide this one.
        if (hi & 0x1FF) == 0x1FF && merged.wrapping_add(1) == 0 && w_lo.checked_add(m).is_none() {
            return None;
        }
        lo = merged;
    }

    // The product is in [2^126, 2^128); take 54 bits from the top, one more
    // than the final significand so the last bit can drive the rounding.
    let msb = hi >> 63;
    let mut f = hi >> (msb + 9);
    e2 -= (msb ^ 1) as i64;

    // A bit pattern of exactly 1000...0 below the significand is a
    // round-to-even tie the truncated power cannot disambiguate.
    if lo == 0 && (hi & 0x1FF) == 0 && (f & 0b11) == 1 {
        return None;
    }

    // Round half-to-even down to 53 bits.
    f = (f + (f & 1)) >> 1;
    if f >> 53 != 0 {
        f >>= 1;
        e2 += 1;
    }

    if e2 < 0 || e2 >= INFINITE_POWER {
        // Subnormal or out of the finite range.
        return None;
    }

    let mut bits = (f & 0x000F_FFFF_FFFF_FFFF) | ((e2 as u64) << 52);
    if negative {
        bits |= 1 << 63;
    }
    Some(f64::from_bits(bits))
}

#[cfg(test)]
#[path = "tests/lemire.rs"]
mod tests;
