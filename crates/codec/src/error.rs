// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the document codec.

use thiserror::Error;

/// Errors from the markup tokenizer: the document is not well-formed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// The raw document bytes are not valid UTF-8.
    #[error("document is not valid UTF-8")]
    InvalidUtf8,

    /// Unexpected character encountered inside a tag.
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar {
        /// The unexpected character.
        ch: char,
        /// Byte offset in the document.
        pos: usize,
    },

    /// Input ended in the middle of a tag, comment, or attribute.
    #[error("unexpected end of input at position {pos}, expected {expected}")]
    UnexpectedEof {
        /// What the tokenizer was looking for.
        expected: &'static str,
        /// Byte offset in the document.
        pos: usize,
    },

    /// A closing tag that does not match the innermost open element.
    #[error("mismatched closing tag </{found}> at position {pos}")]
    MismatchedClose {
        /// The tag name that was closed.
        found: String,
        /// Byte offset in the document.
        pos: usize,
    },

    /// An entity reference the tokenizer does not recognize.
    #[error("unknown entity '&{entity};' at position {pos}")]
    UnknownEntity {
        /// The entity name between `&` and `;`.
        entity: String,
        /// Byte offset in the document.
        pos: usize,
    },
}

/// Errors from decoding a document against the job schema.
///
/// `Malformed` wraps tokenizer failures; every other variant is a schema
/// violation in an otherwise well-formed document. Any violation aborts
/// the whole decode; no partial entity is ever returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed document: {0}")]
    Malformed(#[from] MarkupError),

    #[error("document has no root element")]
    EmptyDocument,

    #[error("expected document root <{expected}>, found <{found}>")]
    UnexpectedRoot { expected: &'static str, found: String },

    #[error("unexpected element <{found}> in {context}")]
    UnexpectedElement { found: String, context: &'static str },

    #[error("unexpected end of input while decoding {context}")]
    UnexpectedEof { context: &'static str },

    /// A configuration `entry` element with an absent or empty key.
    #[error("configuration entry missing key")]
    MissingEntryKey,

    /// A field value that failed type coercion.
    #[error("invalid value '{value}' for {path}: expected {expected}")]
    InvalidValue { path: &'static str, value: String, expected: &'static str },

    /// A `command` element that defines no step alternative.
    #[error("command defines no step")]
    EmptyCommand,

    /// A `command` element that defines more than one step alternative.
    #[error("command defines both <{first}> and <{second}> steps")]
    AmbiguousCommand { first: &'static str, second: &'static str },
}
