/*
Run with libFuzzer:

```sh
cargo fuzz run --release --features libfuzzer parse
```

Run with AFL++:

```sh
cd fuzz
cargo afl build --release --features afl
cargo afl fuzz -i seeds/parse -o out target/release/parse
```
*/

#![cfg_attr(feature = "libfuzzer", no_main)]

use fast_double::parse_double;

#[cfg(any(
    not(any(feature = "libfuzzer", feature = "afl")),
    all(feature = "libfuzzer", feature = "afl"),
))]
compile_error!("exactly one of 'libfuzzer' or 'afl' feature must be enabled");

#[cfg(feature = "libfuzzer")]
libfuzzer_sys::fuzz_target!(|bytes: &[u8]| {
    run(bytes);
});

#[cfg(feature = "afl")]
fn main() {
    afl::fuzz!(|bytes: &[u8]| {
        run(bytes);
    });
}

fn run(bytes: &[u8]) {
    if let Ok(s) = std::str::from_utf8(bytes) {
        if let Ok(value) = parse_double(s) {
            // Anything the grammar accepts, the standard library accepts
            // too, and the two must agree bitwise.
            let expected: f64 = s.parse().unwrap();
            assert_eq!(value.to_bits(), expected.to_bits(), "{s:?}");
        }
    }
}
