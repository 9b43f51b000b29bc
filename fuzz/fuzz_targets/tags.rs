//! Fuzz target for validation tags.
//!
//! Arbitrary tags are parsed and run against a single value and a one-field
//! record; unknown rules and malformed parameters must fail without
//! panicking.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use xvalidator_rules::{Schema, Validator, parse_tag};

#[derive(Debug, Arbitrary)]
struct FuzzTag {
    tag: String,
    value: String,
}

fuzz_target!(|data: FuzzTag| {
    for rule in parse_tag(&data.tag) {
        assert!(!rule.name.contains(','));
        assert_eq!(rule.name, rule.name.trim());
    }

    let validator = Validator::new();
    let _ = validator.var(&data.value, &data.tag);

    let schema = Schema::new().field("value", &data.tag);
    let _ = validator.check_schema(&schema);

    let record = serde_json::json!({ "value": data.value });
    let _ = validator.validate(&record, &schema);
});
