use super::*;

#[track_caller]
fn assert_bits(value: Option<f64>, expected: u64) {
    assert_eq!(value.map(f64::to_bits), Some(expected));
}

#[test]
fn decides_plain_values() {
    assert_bits(eisel_lemire(1, 0, false), 0x3FF0_0000_0000_0000);
    assert_bits(eisel_lemire(1, 0, true), 0xBFF0_0000_0000_0000);
    assert_bits(eisel_lemire(3, -1, false), 0x3FD3_3333_3333_3333);
    assert_bits(eisel_lemire(123_456_789_123_456_789, 10, false), 0x458F_E9AF_5BE7_2782);
    assert_bits(eisel_lemire(u64::MAX / 2, 0, false), 0x43E0_0000_0000_0000);
    assert_bits(eisel_lemire(9_999_999_999_999_999_999, 0, false), 0x43E1_58E4_6091_3D00);
}

#[test]
fn decides_table_extremes() {
    assert_bits(eisel_lemire(1, -307, false), 0x0031_FA18_2C40_C60D);
    assert_bits(eisel_lemire(1, 288, false), 0x7BBA_44DF_832B_8D46);
}

#[test]
fn rejects_out_of_table_range() {
    assert_eq!(eisel_lemire(1, 289, false), None);
    assert_eq!(eisel_lemire(1, -308, false), None);
    // Largest finite double: its decimal form has exponent 292 once the
    // point is removed, so it is the slow path's job.
    assert_eq!(eisel_lemire(17_976_931_348_623_157, 292, false), None);
}

#[test]
fn reports_halfway_ties_unknown() {
    // 2^53 + 1: exactly between two adjacent doubles.
    assert_eq!(eisel_lemire(9_007_199_254_740_993, 0, false), None);
    // 0.5 is a power of two; the product's low bits cannot prove which way
    // a neighboring decimal would round. (The driver's shortcut resolves
    // these before they get here.)
    assert_eq!(eisel_lemire(5, -1, false), None);
    assert_eq!(eisel_lemire(1, 23, false), None);
}

quickcheck::quickcheck! {
    fn matches_std_when_decided(mantissa: u64, exponent: i16) -> bool {
        let exponent = i64::from(exponent % 300);
        if mantissa == 0 {
            return true;
        }
        if let Some(value) = eisel_lemire(mantissa, exponent, false) {
            let s = format!("{mantissa}e{exponent}");
            assert_eq!(value.to_bits(), s.parse::<f64>().unwrap().to_bits(), "{s}");
        }
        true
    }
}
