// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! jw-client: Read operations against the scheduling service.
//!
//! The transport is injected as a [`Fetch`] collaborator; this crate
//! builds the two endpoint paths, hands the raw document to `jw-codec`,
//! and returns the typed entity tree.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod fetch;
mod jobs;

pub use fetch::{Fetch, TransportError};
pub use jobs::{ClientError, JobClient};
