// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deterministic writer for the job document format.
//!
//! Mirror of the tokenizer: start/attr/text/end primitives with
//! automatic escaping, no indentation, no self-closing output. Equal
//! input always yields byte-identical output.

/// Single-pass document writer.
///
/// A start tag stays open for attributes until the next content call
/// seals it, so callers emit attributes without building up slices:
///
/// ```
/// use jw_codec::MarkupWriter;
///
/// let mut w = MarkupWriter::new();
/// w.open("entry");
/// w.attr("key", "retries");
/// w.end("entry");
/// assert_eq!(w.finish(), r#"<entry key="retries"></entry>"#);
/// ```
#[derive(Default)]
pub struct MarkupWriter {
    out: String,
    tag_open: bool,
}

impl MarkupWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a start tag. Stays open for `attr` calls until the next
    /// `open`, `text`, or `end` seals it.
    pub fn open(&mut self, name: &str) {
        self.seal();
        self.out.push('<');
        self.out.push_str(name);
        self.tag_open = true;
    }

    /// Add an attribute to the currently open start tag.
    pub fn attr(&mut self, name: &str, value: &str) {
        debug_assert!(self.tag_open, "attribute written outside a start tag");
        self.out.push(' ');
        self.out.push_str(name);
        self.out.push_str("=\"");
        escape_into(&mut self.out, value, true);
        self.out.push('"');
    }

    /// Write escaped character data.
    pub fn text(&mut self, text: &str) {
        self.seal();
        escape_into(&mut self.out, text, false);
    }

    /// Write the end tag for `name`.
    pub fn end(&mut self, name: &str) {
        self.seal();
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
    }

    /// Convenience for `<name>value</name>`.
    pub fn text_element(&mut self, name: &str, value: &str) {
        self.open(name);
        self.text(value);
        self.end(name);
    }

    pub fn finish(mut self) -> String {
        self.seal();
        self.out
    }

    fn seal(&mut self) {
        if self.tag_open {
            self.out.push('>');
            self.tag_open = false;
        }
    }
}

fn escape_into(out: &mut String, value: &str, in_attribute: bool) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
