//! Fuzz target for decimal literal parsing.
//!
//! Accepted literals must round trip through their canonical form and agree
//! with the digit-count rule for every limit.

#![no_main]

use libfuzzer_sys::fuzz_target;
use xvalidator_decimal::{DecimalLimit, DecimalValue, validate_precision_scale};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(value) = DecimalValue::parse(input) else {
        return;
    };

    let canonical = value.canonical_string();
    let reparsed = DecimalValue::parse(&canonical).expect("canonical form must parse");
    assert_eq!(reparsed, value);
    assert_eq!(reparsed.digit_counts(), value.digit_counts());

    let counts = value.digit_counts();
    for precision in [-1i32, 0, 1, 10, 38] {
        for scale in [-1i32, 0, 2, 18] {
            let expected = counts.fractional as i64 <= i64::from(scale)
                && counts.integer as i64 <= i64::from(precision) - i64::from(scale);
            assert_eq!(
                validate_precision_scale(&value, DecimalLimit::new(precision, scale)),
                expected
            );
        }
    }
});
