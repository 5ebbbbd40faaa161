// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plugin configuration map codec.
//!
//! The document form is a `configuration` wrapper holding one `entry`
//! element per pair, each with `key` and `value` attributes; the
//! in-memory form is an unordered map. The generic element-per-field
//! mapping cannot express "zero or more homogeneous pairs", so both
//! directions are hand-written: encoding sorts keys explicitly so equal
//! maps always produce identical bytes, and decoding walks the token
//! stream one token at a time with strict validation.

use crate::error::DecodeError;
use crate::reader::{MarkupReader, Token};
use crate::tags;
use crate::writer::MarkupWriter;
use std::collections::HashMap;

/// Write a plugin configuration map.
///
/// The empty map writes nothing at all; absence of the wrapper is the
/// only way the format distinguishes "no configuration". Entries are
/// written in lexicographic key order regardless of the map's iteration
/// order.
pub fn write_plugin_config(w: &mut MarkupWriter, config: &HashMap<String, String>) {
    if config.is_empty() {
        return;
    }
    let mut entries: Vec<(&String, &String)> = config.iter().collect();
    entries.sort_by_key(|(key, _)| *key);
    w.open(tags::CONFIGURATION);
    for (key, value) in entries {
        w.open(tags::ENTRY);
        w.attr(tags::KEY, key);
        w.attr(tags::VALUE, value);
        w.end(tags::ENTRY);
    }
    w.end(tags::CONFIGURATION);
}

/// Decode the configuration wrapper the reader just opened.
///
/// Forward-only walk with two states: expecting an entry or the
/// wrapper's end, then terminal. `entry` elements accumulate into the
/// map (`value` defaults to empty, unknown attributes are ignored,
/// duplicate keys last-write-wins); stray text carries no information
/// and is skipped. Anything else is a schema violation that aborts the
/// decode even if valid entries follow — no partial map is returned.
pub fn read_plugin_config(r: &mut MarkupReader) -> Result<HashMap<String, String>, DecodeError> {
    let mut config = HashMap::new();
    loop {
        match r.next_token()? {
            None => {
                return Err(DecodeError::UnexpectedEof { context: "plugin configuration" });
            }
            Some(Token::Start { name, attrs }) => {
                if name != tags::ENTRY {
                    return Err(DecodeError::UnexpectedElement {
                        found: name,
                        context: "plugin configuration",
                    });
                }
                let mut key = String::new();
                let mut value = String::new();
                for (attr, attr_value) in attrs {
                    match attr.as_str() {
                        tags::KEY => key = attr_value,
                        tags::VALUE => value = attr_value,
                        _ => {}
                    }
                }
                if key.is_empty() {
                    return Err(DecodeError::MissingEntryKey);
                }
                config.insert(key, value);
            }
            Some(Token::End { name }) if name == tags::CONFIGURATION => return Ok(config),
            // Entry end tags and stray text.
            Some(_) => {}
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
