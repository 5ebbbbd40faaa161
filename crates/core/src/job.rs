// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job summary and full job definition types.

use crate::command::JobCommandSequence;
use crate::option::JobOptions;
use serde::{Deserialize, Serialize};

/// One job as listed under a project.
///
/// Summaries come back from the project job listing and carry just enough
/// to identify and display a job; fetch the full [`JobDetail`] by id for
/// everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: String,
    pub name: String,
    pub group: String,
    pub project: String,
    pub description: Option<String>,
}

/// Full definition of one scheduled job.
///
/// Every field is presence-optional on decode: a field absent from the
/// document takes its zero value here. Ownership is strictly top-down;
/// callers receive the whole tree and may mutate it freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDetail {
    pub id: Option<String>,
    pub name: String,
    pub group: Option<String>,
    pub project: Option<String>,
    pub description: Option<String>,
    pub log_level: Option<String>,
    /// Whether the scheduler may run this job while a previous run is
    /// still in flight.
    pub allow_concurrent: bool,
    pub options: JobOptions,
    pub dispatch: JobDispatch,
    pub sequence: JobCommandSequence,
    pub node_filter: Option<JobNodeFilter>,
}

/// How a job's steps run across target nodes.
///
/// `Default` is the all-zero policy: single-threaded, stop on error, no
/// node ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDispatch {
    pub max_thread_count: u32,
    pub continue_on_error: bool,
    pub rank_attribute: Option<String>,
    pub rank_order: Option<String>,
}

/// Node-targeting rule for a job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobNodeFilter {
    pub exclude_precedence: bool,
    pub query: Option<String>,
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
