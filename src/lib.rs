#![doc = include_str!("../README.md")]
#![doc(test(
    no_crate_inject,
    attr(
        deny(warnings, rust_2018_idioms, single_use_lifetimes),
        allow(dead_code, unused_variables)
    )
))]
#![forbid(unsafe_code)]
#![warn(
    // Lints that may help when writing public library.
    missing_debug_implementations,
    missing_docs,
    clippy::impl_trait_in_params,
)]
#![allow(
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
)]

mod common;
mod error;
mod lemire;
mod number;
mod parse;
mod table;

pub use error::MalformedNumber;

use crate::{
    lemire::eisel_lemire,
    number::{Number, MAX_MANTISSA},
};

// Any finite exponent below this yields a zero even with a 19-digit
// mantissa; anything above 308 overflows even with mantissa 1.
const MIN_DECIMAL_EXPONENT: i64 = -342;
const MAX_DECIMAL_EXPONENT: i64 = 308;

/// Parses a JSON number literal into the correctly-rounded `f64`.
///
/// The entire input must match the [RFC 7159] number grammar; anything else
/// (including `NaN`, `Infinity`, a leading `+`, leading zeros, or
/// surrounding whitespace) returns [`MalformedNumber`]. Extreme magnitudes
/// are not errors: they round to a signed zero or infinity.
///
/// Literals the fast path cannot prove correctly rounded are re-parsed with
/// the standard library's exact parser.
///
/// [RFC 7159]: https://datatracker.ietf.org/doc/html/rfc7159#section-6
///
/// # Examples
///
/// ```
/// use fast_double::parse_double;
///
/// assert_eq!(parse_double("-12.34e5"), Ok(-1234000.0));
/// assert!(parse_double("012").is_err());
/// ```
#[inline]
pub fn parse_double(s: &str) -> Result<f64, MalformedNumber> {
    // The scanner has already validated the grammar, and the standard
    // library accepts a superset of it.
    parse_double_with(s, |s| s.parse().unwrap_or_default())
}

/// [`parse_double`] with a caller-supplied exact fallback parser.
///
/// `slow_parse` must return the correctly-rounded value of its input; it is
/// only invoked on grammar-valid literals, and only when the fast path
/// cannot prove its own result correct: ambiguous half-way roundings,
/// subnormal results, truncated significands whose brackets disagree, and
/// exponents beyond the tabulated powers of ten.
pub fn parse_double_with<F>(s: &str, slow_parse: F) -> Result<f64, MalformedNumber>
where
    F: FnOnce(&str) -> f64,
{
    let num = match parse::parse_number(s.as_bytes()) {
        Some(num) => num,
        None => return Err(MalformedNumber),
    };

    if num.mantissa == 0 || num.exponent < MIN_DECIMAL_EXPONENT {
        return Ok(if num.negative { -0.0 } else { 0.0 });
    }
    if num.exponent > MAX_DECIMAL_EXPONENT {
        return Ok(if num.negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    if let Some(value) = num.try_fast_path() {
        return Ok(value);
    }

    match compute_float(num) {
        Some(value) => Ok(value),
        None => Ok(slow_parse(s)),
    }
}

/// Runs the Eisel-Lemire core, confirming a truncated mantissa against its
/// upper bracket: when both ends of `[mantissa, mantissa + 1] * 10^exponent`
/// round to the same double, that double is correct for every value in
/// between.
fn compute_float(num: Number) -> Option<f64> {
    let value = eisel_lemire(num.mantissa, num.exponent, num.negative)?;
    if num.truncated {
        // `mantissa + 1` would have 20 digits when the scanner saturated at
        // all nines; renormalize the bracket instead.
        let upper = if num.mantissa == MAX_MANTISSA {
            eisel_lemire((MAX_MANTISSA + 1) / 10, num.exponent + 1, num.negative)?
        } else {
            eisel_lemire(num.mantissa + 1, num.exponent, num.negative)?
        };
        if value.to_bits() != upper.to_bits() {
            return None;
        }
    }
    Some(value)
}
