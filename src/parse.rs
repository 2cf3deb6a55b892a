// Scanner for RFC 7159 number literals.
//
// Accepted grammar (the entire input must match):
//
// ```text
// number   = [ '-' ] int [ frac ] [ exp ]
// int      = '0' / digit1-9 *DIGIT
// frac     = '.' 1*DIGIT
// exp      = ("e" / "E") [ "-" / "+" ] 1*DIGIT
// ```
//
// This is deliberately stricter than `str::parse::<f64>`: no leading `+`,
// no leading zeros before a nonzero digit, no leading `.`, no whitespace,
// no `inf`/`NaN`.

use crate::{
    common::ByteSlice,
    number::{Number, MAX_DIGITS},
};

// Explicit exponents saturate here; the driver's extreme-magnitude gates
// sit at -342/308, so wider values are indistinguishable from each other.
const EXPONENT_SAT: i64 = 0x10000;

/// Scans a complete number literal into its canonical form. Returns `None`
/// when the input violates the grammar.
pub(crate) fn parse_number(s: &[u8]) -> Option<Number> {
    let mut s = s;
    let negative = matches!(s.first(), Some(b'-'));
    if negative {
        s = &s[1..];
    }

    let mut mantissa = 0_u64;
    let mut n_digits = 0_u32;
    let mut truncated = false;
    // Pre-point digits discarded after the 19-digit cap still scale the
    // value by ten each.
    let mut n_dropped = 0_i64;

    // int
    match s.split_first()? {
        (&b'0', rest) => {
            s = rest;
            if matches!(s.first(), Some(b'0'..=b'9')) {
                return None;
            }
        }
        (&c, rest) if c.is_ascii_digit() => {
            mantissa = u64::from(c - b'0');
            n_digits = 1;
            s = rest.parse_digits(|d| {
                if n_digits < MAX_DIGITS {
                    mantissa = mantissa * 10 + u64::from(d);
                    n_digits += 1;
                } else {
                    truncated = true;
                    n_dropped += 1;
                }
            });
        }
        _ => return None,
    }

    // frac
    // Post-point digits folded into the mantissa move the decimal point one
    // place each; discarded ones do not.
    let mut n_after_dot = 0_i64;
    if let Some((&b'.', rest)) = s.split_first() {
        let len_before = rest.len();
        s = rest.parse_digits(|d| {
            if mantissa == 0 && d == 0 {
                // Leading zero: adjusts the point without consuming the
                // significant-digit budget.
                n_after_dot += 1;
            } else if n_digits < MAX_DIGITS {
                mantissa = mantissa * 10 + u64::from(d);
                n_digits += 1;
                n_after_dot += 1;
            } else {
                truncated = true;
            }
        });
        if s.len() == len_before {
            return None;
        }
    }

    // exp
    let mut exp_number = 0_i64;
    if let Some((&(b'e' | b'E'), rest)) = s.split_first() {
        s = rest;
        let mut neg_exp = false;
        if let Some((&c, rest)) = s.split_first() {
            if c == b'+' || c == b'-' {
                neg_exp = c == b'-';
                s = rest;
            }
        }
        let len_before = s.len();
        s = s.parse_digits(|d| {
            if exp_number < EXPONENT_SAT {
                exp_number = exp_number * 10 + i64::from(d);
            }
        });
        if s.len() == len_before {
            return None;
        }
        if neg_exp {
            exp_number = -exp_number;
        }
    }

    if !s.is_empty() {
        return None;
    }

    Some(Number {
        exponent: exp_number - n_after_dot + n_dropped,
        mantissa,
        negative,
        truncated,
    })
}

#[cfg(test)]
#[path = "tests/parse.rs"]
mod tests;
