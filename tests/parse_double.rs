use fast_double::{parse_double, parse_double_with, MalformedNumber};

#[track_caller]
fn assert_bits(s: &str, expected: u64) {
    let value = parse_double(s).unwrap();
    assert_eq!(
        value.to_bits(),
        expected,
        "{s:?} -> {:#018X}, expected {expected:#018X}",
        value.to_bits()
    );
}

/// Asserts bitwise agreement with the standard library parser, which is the
/// default slow path and therefore the correctness oracle.
#[track_caller]
fn assert_matches_std(s: &str) {
    let expected = s.parse::<f64>().unwrap();
    let value = parse_double(s).unwrap();
    assert_eq!(
        value.to_bits(),
        expected.to_bits(),
        "{s:?} -> {value:e}, expected {expected:e}"
    );
}

#[test]
fn boundary_values() {
    assert_bits("0", 0x0000_0000_0000_0000);
    assert_bits("-0.0", 0x8000_0000_0000_0000);
    assert_bits("0e99999", 0x0000_0000_0000_0000);
    assert_bits("-0.0e-99999", 0x8000_0000_0000_0000);
    assert_bits("1e307", 0x7FAC_7B1F_3CAC_7433);
    assert_bits("1e308", 0x7FE1_CCF3_85EB_C8A0);
    assert_bits("1e309", 0x7FF0_0000_0000_0000);
    assert_bits("-1e309", 0xFFF0_0000_0000_0000);
    assert_bits("1e-324", 0x0000_0000_0000_0000);
    assert_bits("-1e-324", 0x8000_0000_0000_0000);
    assert_bits("0.1", 0x3FB9_9999_9999_999A);
    // Largest finite double.
    assert_bits("1.7976931348623157e308", 0x7FEF_FFFF_FFFF_FFFF);
    // Rounds up to infinity.
    assert_bits("1.7976931348623159e308", 0x7FF0_0000_0000_0000);
    // Smallest normal, and the neighbor just below it that rounds to the
    // largest subnormal; both straddle the boundary that famously hung
    // older JDK parsers and both need the exact fallback.
    assert_bits("2.2250738585072012e-308", 0x0010_0000_0000_0000);
    assert_bits("2.2250738585072011e-308", 0x000F_FFFF_FFFF_FFFF);
    // Smallest subnormal and the threshold below which everything is zero.
    assert_bits("5e-324", 0x0000_0000_0000_0001);
    assert_bits("2.48e-324", 0x0000_0000_0000_0001);
    assert_bits("2.47e-324", 0x0000_0000_0000_0000);
    // 2^53 + 1 is a round-to-even tie.
    assert_bits("9007199254740993", 0x4340_0000_0000_0000);

    assert_matches_std("123456789.123456789");
    assert_matches_std("12345678901234567890");
    assert_matches_std("2.225073858507201136057409796709131975934819546351645648023426109724822222021076945516529523908135087914149158913039621106870086438694594645527657207407820621743379988141063267329253552286881372149012981122451451889849057222307285255133155755015914397476397983411801999323962548289017107081850690630666655994938275772572015763062690663332647565300009245888316433037779791869612049497390377829704905051080609940730262937128958950003583799967207254304360284078895771796150945516748243471030702609144621572289880258182545180325707018860872113128079512233426288368622321503775666622503982534335974568884423900265498198385487948292206894721689831099698365846814022854243330660339850886445804001034933970427567186443383770486037861622771738545623065874679014086723327636718751234567890123456789012345678901e-308");
    // Bracketing values cannot disambiguate the truncated mantissa; only
    // the slow path can decide this one.
    assert_matches_std("3.5844466002796428e+298");
}

#[test]
fn sign_symmetry() {
    for s in ["1", "0.25", "1e100", "1e-100", "123456789012345678901234", "6.02e23"] {
        let pos = parse_double(s).unwrap();
        let neg = parse_double(&format!("-{s}")).unwrap();
        assert_eq!(neg.to_bits(), (-pos).to_bits(), "{s}");
    }
}

#[test]
fn grammar_rejection() {
    for s in [
        "NaN", "Infinity", "-Infinity", "inf", "+1", "01", "1.", ".5", " 1", "1 ", "0x1", "",
        "-", "+", "1e", "1e+", "1.e5", "1,5", "½", "1__0",
    ] {
        assert_eq!(parse_double(s), Err(MalformedNumber), "{s:?}");
    }
}

#[test]
fn custom_slow_path_is_only_called_when_needed() {
    let mut calls = 0;
    // Decided by the shortcut; the fallback must stay untouched.
    let value = parse_double_with("1.5", |_| {
        calls += 1;
        f64::NAN
    })
    .unwrap();
    assert_eq!(value, 1.5);
    assert_eq!(calls, 0);

    // A round-to-even tie must reach the fallback with the original text.
    let value = parse_double_with("9007199254740993", |s| {
        calls += 1;
        assert_eq!(s, "9007199254740993");
        s.parse().unwrap()
    })
    .unwrap();
    assert_eq!(value, 9007199254740992.0);
    assert_eq!(calls, 1);
}

quickcheck::quickcheck! {
    /// Round-trip: parsing any formatting of a finite double yields the
    /// identical bit pattern.
    fn roundtrip(bits: u64) -> bool {
        let x = f64::from_bits(bits);
        if !x.is_finite() {
            return true;
        }
        for s in [x.to_string(), format!("{x:e}"), format!("{x:.17e}"), format!("{x:.20e}")] {
            let value = parse_double(&s).unwrap();
            assert_eq!(value.to_bits(), s.parse::<f64>().unwrap().to_bits(), "{s}");
            if s == x.to_string() || s == format!("{x:e}") {
                // Shortest formattings read back exactly.
                assert_eq!(value.to_bits(), bits, "{s}");
            }
        }
        true
    }
}

fn push_digits(s: &mut String, n: usize) {
    for _ in 0..n {
        s.push((b'0' + fastrand::u8(0..10)) as char);
    }
}

/// Random grammar-valid literal: 1-30 significand digits, explicit exponent
/// in [-350, 350] most of the time.
fn random_literal() -> String {
    let mut s = String::new();
    if fastrand::bool() {
        s.push('-');
    }
    let n_digits = fastrand::usize(1..=30);
    let int_len = if fastrand::bool() { fastrand::usize(1..=n_digits) } else { 1 };
    if int_len == 1 && fastrand::u8(0..4) == 0 {
        s.push('0');
    } else {
        s.push((b'1' + fastrand::u8(0..9)) as char);
        push_digits(&mut s, int_len - 1);
    }
    if n_digits > int_len {
        s.push('.');
        push_digits(&mut s, n_digits - int_len);
    }
    if fastrand::u8(0..4) != 0 {
        s.push(if fastrand::bool() { 'e' } else { 'E' });
        let exp = fastrand::i32(-350..=350);
        if exp >= 0 && fastrand::bool() {
            s.push('+');
        }
        s.push_str(&exp.to_string());
    }
    s
}

#[test]
fn random_literals_match_std() {
    for _ in 0..100_000 {
        let s = random_literal();
        assert_matches_std(&s);
    }
}

#[test]
fn long_fractions_match_std() {
    // Exercises the truncated-mantissa bracketing, including mantissas of
    // all nines and fractions opening with runs of zeros.
    for _ in 0..20_000 {
        let mut s = String::new();
        s.push_str(if fastrand::bool() { "0." } else { "9." });
        for _ in 0..fastrand::usize(0..25) {
            s.push('0');
        }
        push_digits(&mut s, fastrand::usize(1..=40));
        if fastrand::bool() {
            s.push('e');
            s.push_str(&fastrand::i32(-330..=330).to_string());
        }
        assert_matches_std(&s);
    }
    for _ in 0..2_000 {
        let mut s = "9999999999999999999".to_string();
        push_digits(&mut s, fastrand::usize(1..=6));
        if fastrand::bool() {
            s.push('e');
            s.push_str(&fastrand::i32(-40..=40).to_string());
        }
        assert_matches_std(&s);
    }
}
