use super::*;

fn number(mantissa: u64, exponent: i64) -> Number {
    Number {
        exponent,
        mantissa,
        negative: false,
        truncated: false,
    }
}

#[test]
fn exact_range() {
    assert_eq!(number(1, 0).try_fast_path(), Some(1.0));
    assert_eq!(number(5, -1).try_fast_path(), Some(0.5));
    assert_eq!(number(3, -22).try_fast_path(), Some(3e-22));
    assert_eq!(number(1, 22).try_fast_path(), Some(1e22));
    assert_eq!(
        number((1 << 53) - 1, 22).try_fast_path(),
        Some(9007199254740991e22)
    );
    let negative = Number {
        negative: true,
        ..number(25, -1)
    };
    assert_eq!(negative.try_fast_path(), Some(-2.5));
}

#[test]
fn disguised_range() {
    // 10^23 itself is not exactly representable; the two-step product must
    // still be the correctly rounded image.
    assert_eq!(number(1, 23).try_fast_path(), Some(1e23));
    assert_eq!(number(1, 37).try_fast_path(), Some(1e37));
    assert_eq!(number(816, 30).try_fast_path(), Some(816e30));
    // The intermediate leaves the exact-integer range.
    assert_eq!(number(9_000_000_000_000_000, 23).try_fast_path(), None);
}

#[test]
fn declines_out_of_range() {
    assert_eq!(number(1, 38).try_fast_path(), None);
    assert_eq!(number(1, -23).try_fast_path(), None);
    assert_eq!(number(1 << 53, 0).try_fast_path(), None);
    let truncated = Number {
        truncated: true,
        ..number(1, 0)
    };
    assert_eq!(truncated.try_fast_path(), None);
}

quickcheck::quickcheck! {
    fn matches_std(mantissa: u64, exponent: i8) -> bool {
        let mantissa = mantissa & ((1 << 53) - 1);
        let exponent = i64::from(exponent % 23);
        if let Some(value) = number(mantissa, exponent).try_fast_path() {
            let s = format!("{mantissa}e{exponent}");
            assert_eq!(value.to_bits(), s.parse::<f64>().unwrap().to_bits(), "{s}");
        }
        true
    }
}
