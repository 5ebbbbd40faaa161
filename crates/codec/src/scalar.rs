// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scalar codecs: the comma-joined value-choice list and the
//! attribute-wrapped argument line.

use crate::error::DecodeError;
use crate::reader::MarkupReader;
use crate::tags;
use crate::writer::MarkupWriter;

/// Join option value choices into the comma-separated attribute form.
///
/// An empty list yields `None`: the attribute is omitted entirely rather
/// than emitted empty. Choices are joined verbatim, no escaping and no
/// trimming; an embedded comma in a choice will not survive a round
/// trip.
pub fn join_value_choices(choices: &[String]) -> Option<String> {
    if choices.is_empty() {
        None
    } else {
        Some(choices.join(","))
    }
}

/// Split the attribute form back into value choices.
///
/// Splitting does not special-case emptiness: the empty attribute value
/// decodes to one empty choice, not to an empty list.
pub fn split_value_choices(value: &str) -> Vec<String> {
    value.split(',').map(str::to_string).collect()
}

/// Write the job-reference argument line as its wrapper element.
///
/// The wrapper is always emitted, even for the empty line, with the
/// value in a single `line` attribute, no text content, no children.
pub fn write_arg_line(w: &mut MarkupWriter, line: &str) {
    w.open(tags::ARG);
    w.attr(tags::LINE, line);
    w.end(tags::ARG);
}

/// Decode the argument-line wrapper the reader just opened.
///
/// `attrs` are the wrapper's own attributes. A missing `line` attribute
/// decodes to the empty string, not an error; other attributes and any
/// children are ignored.
pub fn read_arg_line(
    r: &mut MarkupReader,
    attrs: &[(String, String)],
) -> Result<String, DecodeError> {
    let line = attrs
        .iter()
        .find(|(name, _)| name == tags::LINE)
        .map(|(_, value)| value.clone())
        .unwrap_or_default();
    r.skip_element(tags::ARG)?;
    Ok(line)
}

#[cfg(test)]
#[path = "scalar_tests.rs"]
mod tests;
