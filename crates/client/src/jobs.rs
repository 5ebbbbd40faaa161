// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Retrieval operations for job definitions.

use crate::fetch::{Fetch, TransportError};
use jw_codec::{decode_job_list, decode_job_summaries, DecodeError};
use jw_core::{JobDetail, JobSummary};
use thiserror::Error;

/// Errors from retrieval operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The fetch collaborator failed; passed through unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("failed to decode scheduler response: {0}")]
    Decode(#[from] DecodeError),

    /// Fetching a job by identifier returned an empty collection.
    #[error("job '{id}' not found")]
    JobNotFound { id: String },
}

/// Typed read client for scheduler job definitions.
///
/// Wraps a [`Fetch`] collaborator; each call performs one blocking fetch
/// and decodes the raw document into a freshly allocated entity tree.
/// The client holds no state across calls and is safe to share between
/// threads when the collaborator is.
pub struct JobClient<F> {
    fetch: F,
}

impl<F: Fetch> JobClient<F> {
    pub fn new(fetch: F) -> Self {
        Self { fetch }
    }

    /// List the job summaries defined under a project.
    ///
    /// A project with no jobs is a valid empty listing, not an error.
    /// Decode and transport failures surface as [`ClientError`] with no
    /// partial results.
    pub fn list_job_summaries(&self, project: &str) -> Result<Vec<JobSummary>, ClientError> {
        let raw = self.fetch.fetch(&["project", project, "jobs"], None)?;
        let jobs = decode_job_summaries(&raw)?;
        tracing::debug!(project, count = jobs.len(), "listed job summaries");
        Ok(jobs)
    }

    /// Fetch the full definition of one job by identifier.
    ///
    /// The service wraps the definition in a single-job collection; an
    /// empty collection maps to [`ClientError::JobNotFound`].
    pub fn get_job_detail(&self, id: &str) -> Result<JobDetail, ClientError> {
        let raw = self.fetch.fetch(&["job", id], None)?;
        let mut jobs = decode_job_list(&raw)?;
        if jobs.is_empty() {
            tracing::warn!(id, "job fetch returned an empty collection");
            return Err(ClientError::JobNotFound { id: id.to_string() });
        }
        tracing::debug!(id, "fetched job detail");
        Ok(jobs.remove(0))
    }
}

#[cfg(test)]
#[path = "jobs_tests.rs"]
mod tests;
