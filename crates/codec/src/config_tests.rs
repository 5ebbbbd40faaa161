// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::error::DecodeError;

fn encode(config: &HashMap<String, String>) -> String {
    let mut w = MarkupWriter::new();
    write_plugin_config(&mut w, config);
    w.finish()
}

fn decode(doc: &str) -> Result<HashMap<String, String>, DecodeError> {
    let mut r = MarkupReader::new(doc);
    match r.next_token().expect("tokenize failed") {
        Some(Token::Start { name, .. }) => assert_eq!(name, "configuration"),
        other => panic!("expected configuration start, got {other:?}"),
    }
    read_plugin_config(&mut r)
}

fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn empty_map_emits_nothing_at_all() {
    assert_eq!(encode(&HashMap::new()), "");
}

#[test]
fn entries_sorted_lexicographically_by_key() {
    // Inserted timeout first; encoded output must put retries first.
    let mut config = HashMap::new();
    config.insert("timeout".to_string(), "30".to_string());
    config.insert("retries".to_string(), "3".to_string());
    assert_eq!(
        encode(&config),
        "<configuration>\
         <entry key=\"retries\" value=\"3\"></entry>\
         <entry key=\"timeout\" value=\"30\"></entry>\
         </configuration>"
    );
}

#[test]
fn equal_maps_encode_byte_identically() {
    let forward = map(&[("a", "1"), ("b", "2"), ("c", "3")]);
    let mut reversed = HashMap::new();
    for (key, value) in [("c", "3"), ("b", "2"), ("a", "1")] {
        reversed.insert(key.to_string(), value.to_string());
    }
    assert_eq!(encode(&forward), encode(&reversed));
}

#[test]
fn decode_accumulates_entries() {
    let config = decode(
        "<configuration>\
         <entry key=\"retries\" value=\"3\"></entry>\
         <entry key=\"timeout\" value=\"30\"></entry>\
         </configuration>",
    )
    .expect("decode failed");
    assert_eq!(config, map(&[("retries", "3"), ("timeout", "30")]));
}

#[test]
fn decode_tolerates_stray_text_between_entries() {
    let config = decode(
        "<configuration>\n  <entry key=\"a\" value=\"1\"/>\n  <entry key=\"b\" value=\"2\"/>\n</configuration>",
    )
    .expect("decode failed");
    assert_eq!(config, map(&[("a", "1"), ("b", "2")]));
}

#[test]
fn decode_missing_value_defaults_to_empty() {
    let config = decode("<configuration><entry key=\"flag\"/></configuration>")
        .expect("decode failed");
    assert_eq!(config, map(&[("flag", "")]));
}

#[test]
fn decode_ignores_unknown_entry_attributes() {
    let config =
        decode("<configuration><entry key=\"a\" value=\"1\" note=\"x\"/></configuration>")
            .expect("decode failed");
    assert_eq!(config, map(&[("a", "1")]));
}

#[test]
fn duplicate_keys_last_write_wins() {
    let config = decode(
        "<configuration>\
         <entry key=\"a\" value=\"first\"/>\
         <entry key=\"a\" value=\"second\"/>\
         </configuration>",
    )
    .expect("decode failed");
    assert_eq!(config, map(&[("a", "second")]));
}

#[test]
fn missing_key_attribute_fails() {
    let err = decode("<configuration><entry value=\"3\"/></configuration>")
        .expect_err("missing key should fail");
    assert_eq!(err, DecodeError::MissingEntryKey);
}

#[test]
fn empty_key_attribute_fails() {
    let err = decode("<configuration><entry key=\"\" value=\"3\"/></configuration>")
        .expect_err("empty key should fail");
    assert_eq!(err, DecodeError::MissingEntryKey);
}

#[test]
fn missing_key_fails_even_with_a_later_valid_entry() {
    // No partial map: the violation aborts the whole decode.
    let err = decode(
        "<configuration>\
         <entry value=\"3\"/>\
         <entry key=\"timeout\" value=\"30\"/>\
         </configuration>",
    )
    .expect_err("missing key should fail");
    assert_eq!(err, DecodeError::MissingEntryKey);
}

#[test]
fn unexpected_element_names_the_tag() {
    let err = decode("<configuration><setting key=\"a\"/></configuration>")
        .expect_err("unexpected element should fail");
    assert!(
        matches!(err, DecodeError::UnexpectedElement { ref found, .. } if found == "setting"),
        "got {err:?}"
    );
}

#[test]
fn nested_children_inside_an_entry_fail() {
    let err = decode(
        "<configuration><entry key=\"a\" value=\"1\"><extra/></entry></configuration>",
    )
    .expect_err("nested child should fail");
    assert!(matches!(err, DecodeError::UnexpectedElement { ref found, .. } if found == "extra"));
}

#[test]
fn truncated_stream_fails_with_eof() {
    let err = decode("<configuration><entry key=\"a\" value=\"1\"/>")
        .expect_err("truncated stream should fail");
    assert_eq!(err, DecodeError::UnexpectedEof { context: "plugin configuration" });
}

#[test]
fn round_trip_preserves_the_map() {
    let config = map(&[("timeout", "30"), ("retries", "3"), ("queue", "high")]);
    let decoded = decode(&encode(&config)).expect("decode failed");
    assert_eq!(decoded, config);
}

#[test]
fn keys_and_values_escape_through_the_markup_layer() {
    let config = map(&[("cmd", "echo \"a & b\" <here>")]);
    let doc = encode(&config);
    assert_eq!(
        doc,
        "<configuration><entry key=\"cmd\" value=\"echo &quot;a &amp; b&quot; &lt;here&gt;\"></entry></configuration>"
    );
    assert_eq!(decode(&doc).expect("decode failed"), config);
}
