// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::reader::Token;

#[test]
fn join_empty_list_omits_attribute() {
    assert_eq!(join_value_choices(&[]), None);
}

#[test]
fn join_uses_literal_commas() {
    let choices = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    assert_eq!(join_value_choices(&choices), Some("a,b,c".to_string()));
}

#[test]
fn join_single_empty_choice_is_not_omitted() {
    assert_eq!(join_value_choices(&[String::new()]), Some(String::new()));
}

#[test]
fn split_empty_value_yields_one_empty_choice() {
    // Split does not special-case emptiness; this is the documented quirk.
    assert_eq!(split_value_choices(""), vec![String::new()]);
}

#[test]
fn split_on_commas() {
    assert_eq!(split_value_choices("a,b,c"), vec!["a", "b", "c"]);
}

#[test]
fn split_preserves_surrounding_whitespace() {
    assert_eq!(split_value_choices("a, b"), vec!["a", " b"]);
}

#[test]
fn embedded_commas_do_not_survive_a_round_trip() {
    // Known limitation: a comma inside one choice splits into two.
    let choices = vec!["a,b".to_string()];
    let joined = join_value_choices(&choices).expect("non-empty list");
    assert_eq!(split_value_choices(&joined), vec!["a", "b"]);
}

#[test]
fn arg_line_wrapper_always_emitted() {
    let mut w = MarkupWriter::new();
    write_arg_line(&mut w, "");
    assert_eq!(w.finish(), r#"<arg line=""></arg>"#);
}

#[test]
fn arg_line_value_in_single_attribute() {
    let mut w = MarkupWriter::new();
    write_arg_line(&mut w, "-x value");
    assert_eq!(w.finish(), r#"<arg line="-x value"></arg>"#);
}

fn open_arg(input: &str) -> (MarkupReader<'_>, Vec<(String, String)>) {
    let mut r = MarkupReader::new(input);
    match r.next_token().expect("tokenize failed") {
        Some(Token::Start { name, attrs }) => {
            assert_eq!(name, "arg");
            (r, attrs)
        }
        other => panic!("expected arg start, got {other:?}"),
    }
}

#[test]
fn arg_line_decodes_literal_value() {
    let (mut r, attrs) = open_arg(r#"<arg line="-x value"></arg>"#);
    assert_eq!(read_arg_line(&mut r, &attrs).expect("decode failed"), "-x value");
}

#[test]
fn arg_line_missing_attribute_decodes_empty() {
    let (mut r, attrs) = open_arg("<arg></arg>");
    assert_eq!(read_arg_line(&mut r, &attrs).expect("decode failed"), "");
}

#[test]
fn arg_line_ignores_extra_attributes_and_children() {
    let (mut r, attrs) = open_arg(r#"<arg extra="x" line="-v"><ignored/></arg>"#);
    assert_eq!(read_arg_line(&mut r, &attrs).expect("decode failed"), "-v");
    // The wrapper is fully consumed.
    assert_eq!(r.next_token().expect("next"), None);
}

#[test]
fn arg_line_round_trips_through_the_wrapper() {
    let mut w = MarkupWriter::new();
    write_arg_line(&mut w, "-x value");
    let doc = w.finish();
    let (mut r, attrs) = open_arg(&doc);
    assert_eq!(read_arg_line(&mut r, &attrs).expect("decode failed"), "-x value");
}
