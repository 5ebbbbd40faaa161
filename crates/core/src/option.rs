// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-supplied job parameters.

use serde::{Deserialize, Serialize};

/// The set of user-supplied parameters for a job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOptions {
    /// Option order is significant only when this is set.
    pub preserve_order: bool,
    pub options: Vec<JobOption>,
}

/// One parameter definition.
///
/// `value_choices` round-trips through comma-joining in the document
/// format; embedded commas in individual choices are not escapable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOption {
    pub name: Option<String>,
    pub default_value: Option<String>,
    pub value_choices: Vec<String>,
    /// Remote source the scheduler loads choices from instead of
    /// `value_choices`.
    pub value_choices_url: Option<String>,
    pub require_predefined_choice: bool,
    pub validation_regex: Option<String>,
    pub description: Option<String>,
    pub required: bool,
    pub multi_valued: bool,
    pub multi_value_delimiter: Option<String>,
    /// Obscure the value in the scheduler UI (secrets).
    pub obscure_input: bool,
    /// Expose the value to scripts even when obscured.
    pub value_exposed: bool,
}

#[cfg(test)]
#[path = "option_tests.rs"]
mod tests;
