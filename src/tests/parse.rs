use super::*;
use crate::number::MAX_MANTISSA;

#[track_caller]
fn num(s: &str) -> Number {
    match parse_number(s.as_bytes()) {
        Some(num) => num,
        None => panic!("rejected: {s:?}"),
    }
}

#[track_caller]
fn assert_rejected(s: &str) {
    assert!(parse_number(s.as_bytes()).is_none(), "accepted: {s:?}");
}

#[test]
fn integers() {
    assert_eq!(
        num("0"),
        Number {
            exponent: 0,
            mantissa: 0,
            negative: false,
            truncated: false
        }
    );
    assert_eq!(num("7").mantissa, 7);
    assert_eq!(num("123456").mantissa, 123_456);
    assert_eq!(num("123456").exponent, 0);
    assert!(num("-9").negative);
    assert!(!num("9").negative);
}

#[test]
fn point_and_exponent_bookkeeping() {
    // The decimal point moves the exponent one per fraction digit kept.
    let n = num("1.23e45");
    assert_eq!((n.mantissa, n.exponent), (123, 43));
    let n = num("67800.0");
    assert_eq!((n.mantissa, n.exponent), (678_000, -1));
    let n = num("3.14159");
    assert_eq!((n.mantissa, n.exponent), (314_159, -5));
    let n = num("-4.5");
    assert_eq!((n.mantissa, n.exponent, n.negative), (45, -1, true));
    let n = num("12e-3");
    assert_eq!((n.mantissa, n.exponent), (12, -3));
    assert_eq!(num("1e+5").exponent, 5);
    assert_eq!(num("1E5").exponent, 5);
}

#[test]
fn fraction_leading_zeros_are_free() {
    let n = num("0.0000001");
    assert_eq!((n.mantissa, n.exponent), (1, -7));
    // 20 zeros then 3 digits: the zeros must not consume the 19-digit
    // budget.
    let n = num("0.00000000000000000000123");
    assert_eq!((n.mantissa, n.exponent, n.truncated), (123, -23, false));
    // All-zero significand.
    let n = num("0.000000000000000000000000");
    assert_eq!((n.mantissa, n.truncated), (0, false));
}

#[test]
fn nineteen_digit_cap() {
    let n = num("9999999999999999999");
    assert_eq!((n.mantissa, n.exponent, n.truncated), (MAX_MANTISSA, 0, false));

    // The 20th digit is dropped, but keeps scaling the value.
    let n = num("12345678901234567890");
    assert_eq!(
        (n.mantissa, n.exponent, n.truncated),
        (1_234_567_890_123_456_789, 1, true)
    );

    // Dropped fraction digits do not scale anything.
    let n = num("0.12345678901234567890123");
    assert_eq!(
        (n.mantissa, n.exponent, n.truncated),
        (1_234_567_890_123_456_789, -19, true)
    );

    // Dropped digits count even when they are zeros: the bracket
    // [mantissa, mantissa + 1] still holds, it is just wider than needed.
    let n = num("1.0000000000000000000");
    assert_eq!(
        (n.mantissa, n.exponent, n.truncated),
        (1_000_000_000_000_000_000, -18, true)
    );
}

#[test]
fn exponent_saturation() {
    assert!(num("1e99999999999999999999").exponent > 308);
    assert!(num("1e-99999999999999999999").exponent < -342);
    assert!(num("0.1e99999999999999999999").exponent > 308);
}

#[test]
fn rejects_non_grammar() {
    for s in [
        "", " ", "-", "+", "+1", "-+1", "--1", " 1", "1 ", "01", "00", "0123", "-01",
        "NaN", "nan", "Infinity", "inf", "-Infinity", "0x1", "1f", "1d",
        ".", ".5", "-.5", "1.", "1.e5", "0.", "1..2", "1.2.3",
        "e5", "1e", "1e+", "1e-", "1e5.5", "1e5e5", "1e +5", "1_000",
    ] {
        assert_rejected(s);
    }
}

#[test]
fn rejects_interior_junk() {
    assert_rejected("1a");
    assert_rejected("1.2a");
    assert_rejected("1.2e5a");
    assert_rejected("\u{66f}");
    assert_rejected("1\u{66f}");
}
