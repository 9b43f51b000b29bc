//! Fuzz target for rule parameter parsing.
//!
//! Tests the decimal, comparison and conditional rules with arbitrary
//! values, parameters and sibling records.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::collections::HashMap;
use xvalidator_decimal::{
    CompareOp, check_comparison, check_decimal, check_decimal_if, parse_conditional_param,
    parse_decimal_params,
};

#[derive(Debug, Arbitrary)]
struct FuzzRule {
    value: String,
    param: String,
    siblings: Vec<(String, String)>,
}

fuzz_target!(|data: FuzzRule| {
    let limit = parse_decimal_params(&data.param);
    let _ = limit.max_integer_digits();

    let _ = check_decimal(&data.value, &data.param);

    for op in CompareOp::ALL {
        let _ = check_comparison(op, &data.value, &data.param);
    }

    let record: HashMap<String, String> = data.siblings.into_iter().collect();
    let outcome = check_decimal_if(&data.value, &data.param, &record);

    // a well-formed condition never reports a malformed parameter
    if parse_conditional_param(&data.param).is_ok() {
        if let Err(err) = outcome {
            assert_ne!(err.kind(), xvalidator_decimal::FailureKind::MalformedParameter);
        }
    }
});
