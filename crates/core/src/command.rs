// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution steps: the command sequence and its step variants.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordered list of execution steps. Step order is always significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCommandSequence {
    pub continue_on_error: bool,
    pub ordering_strategy: Option<String>,
    pub commands: Vec<JobCommand>,
}

/// One execution step.
///
/// Exactly one alternative per step; the document codec refuses steps
/// that define zero or more than one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobCommand {
    /// A shell command line run on each target node.
    ShellCommand(String),
    /// An inline script body.
    InlineScript(String),
    /// A server-side script file, with an optional argument string.
    ScriptFile { path: String, args: Option<String> },
    /// Another job invoked as a step.
    JobReference(JobRef),
    /// A workflow step plugin.
    StepPlugin(JobPlugin),
    /// A per-node step plugin.
    NodeStepPlugin(JobPlugin),
}

impl JobCommand {
    /// Document tag this step serializes under.
    pub fn kind(&self) -> &'static str {
        match self {
            JobCommand::ShellCommand(_) => "exec",
            JobCommand::InlineScript(_) => "script",
            JobCommand::ScriptFile { .. } => "scriptfile",
            JobCommand::JobReference(_) => "jobref",
            JobCommand::StepPlugin(_) => "step-plugin",
            JobCommand::NodeStepPlugin(_) => "node-step-plugin",
        }
    }
}

/// Reference to another job used as a step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRef {
    pub name: String,
    pub group: Option<String>,
    /// Run the referenced job once per target node rather than once total.
    pub run_for_each_node: bool,
    /// Argument line passed to the referenced job. A single opaque
    /// string; tokenization happens scheduler-side.
    pub arg_line: String,
}

/// A named plugin invocation (step or node-step).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPlugin {
    pub plugin_type: String,
    /// Arbitrary key/value configuration; may be empty. Keys are unique
    /// by construction; the document form is sorted by key on encode.
    pub config: HashMap<String, String>,
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
