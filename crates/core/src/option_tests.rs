// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn options_default_is_empty_unordered() {
    let options = JobOptions::default();
    assert!(!options.preserve_order);
    assert!(options.options.is_empty());
}

#[test]
fn option_serde_roundtrip() {
    let option = JobOption {
        name: Some("region".into()),
        default_value: Some("us-east-1".into()),
        value_choices: vec!["us-east-1".into(), "eu-west-1".into()],
        require_predefined_choice: true,
        required: true,
        ..Default::default()
    };
    let json = serde_json::to_string(&option).unwrap();
    let parsed: JobOption = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, option);
}
