// The canonical base-10 form of a scanned literal and the exact-arithmetic
// shortcut that resolves small values without the 128-bit path.
//
// The shortcut relies on every IEEE 754 multiply/divide being correctly
// rounded: when both operands are exact, one operation yields the correctly
// rounded result directly.

/// Powers of ten that are exactly representable as `f64` (10^0..=10^22).
const POWER_OF_TEN_EXACT: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// Maximum number of significand digits folded into the mantissa; the
/// largest 19-digit value still fits in a u64.
pub(crate) const MAX_DIGITS: u32 = 19;

/// Largest mantissa the scanner can produce (19 nines).
pub(crate) const MAX_MANTISSA: u64 = 10_u64.pow(MAX_DIGITS) - 1;

const MIN_EXPONENT_FAST_PATH: i64 = -22;
const MAX_EXPONENT_FAST_PATH: i64 = 22;
const MAX_EXPONENT_DISGUISED_FAST_PATH: i64 = 37;

/// A scanned literal in `(-1)^negative * mantissa * 10^exponent` form.
///
/// When `truncated` is set the significand had more digits than the mantissa
/// retained, and the exact value is only bracketed:
/// `mantissa * 10^exponent <= |value| < (mantissa + 1) * 10^exponent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Number {
    pub(crate) exponent: i64,
    pub(crate) mantissa: u64,
    pub(crate) negative: bool,
    pub(crate) truncated: bool,
}

impl Number {
    /// Resolves the value with at most two exact `f64` operations, or
    /// returns `None` when exactness cannot be established.
    #[inline]
    pub(crate) fn try_fast_path(&self) -> Option<f64> {
        if self.truncated || self.mantissa >> 53 != 0 {
            return None;
        }
        // `mantissa` is below 2^53, so the conversion is exact.
        let mut value = self.mantissa as f64;
        match self.exponent {
            MIN_EXPONENT_FAST_PATH..=-1 => {
                value /= POWER_OF_TEN_EXACT[-self.exponent as usize];
            }
            0..=MAX_EXPONENT_FAST_PATH => {
                value *= POWER_OF_TEN_EXACT[self.exponent as usize];
            }
            23..=MAX_EXPONENT_DISGUISED_FAST_PATH => {
                // The product so far must stay an exact integer for the
                // final multiply to be the single rounding step.
                value *= POWER_OF_TEN_EXACT[(self.exponent - MAX_EXPONENT_FAST_PATH) as usize];
                if value > 1e15 {
                    return None;
                }
                value *= POWER_OF_TEN_EXACT[MAX_EXPONENT_FAST_PATH as usize];
            }
            _ => return None,
        }
        Some(if self.negative { -value } else { value })
    }
}

#[cfg(test)]
#[path = "tests/number.rs"]
mod tests;
