// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transport boundary: the fetch collaborator.

use std::collections::HashMap;
use std::error::Error;
use thiserror::Error;

/// Transport-level failure from the fetch collaborator.
///
/// Opaque by design: network, auth, and status classification belong to
/// the transport, and retrieval operations pass its failures through
/// unchanged.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), source: None }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self { message: message.into(), source: Some(Box::new(source)) }
    }
}

/// Read access to the scheduling service.
///
/// `path` is the ordered sequence of endpoint path segments; `query` is
/// an optional set of query parameters. Implementations block the
/// calling thread for the duration of the request, do not retry, and do
/// not time out on this layer's behalf. Cancellation, if needed, belongs
/// to the implementation.
pub trait Fetch {
    fn fetch(
        &self,
        path: &[&str],
        query: Option<&HashMap<String, String>>,
    ) -> Result<Vec<u8>, TransportError>;
}
