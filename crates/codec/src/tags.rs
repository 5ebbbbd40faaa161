// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Document schema constants: every element and attribute name in the
//! job document format, shared by encode and decode so the two sides
//! cannot drift.

/// Root of a project job listing.
pub const JOBS: &str = "jobs";
/// Root of a full job definition listing.
pub const JOBLIST: &str = "joblist";
pub const JOB: &str = "job";

pub const ID: &str = "id";
pub const NAME: &str = "name";
pub const GROUP: &str = "group";
pub const PROJECT: &str = "project";
pub const DESCRIPTION: &str = "description";
pub const LOG_LEVEL: &str = "loglevel";
pub const MULTIPLE_EXECUTIONS: &str = "multipleExecutions";

/// Flattening wrapper around `project` and `options`.
pub const CONTEXT: &str = "context";
pub const OPTIONS: &str = "options";
pub const PRESERVE_ORDER: &str = "preserveOrder";
pub const OPTION: &str = "option";
pub const VALUE: &str = "value";
pub const VALUES: &str = "values";
pub const VALUES_URL: &str = "valuesUrl";
pub const ENFORCED_VALUES: &str = "enforcedvalues";
pub const REGEX: &str = "regex";
pub const REQUIRED: &str = "required";
pub const MULTIVALUED: &str = "multivalued";
/// The service spells this without the second "i"; kept verbatim for
/// wire compatibility.
pub const DELIMITER: &str = "delimeter";
pub const SECURE: &str = "secure";
pub const VALUE_EXPOSED: &str = "valueExposed";

pub const DISPATCH: &str = "dispatch";
pub const THREADCOUNT: &str = "threadcount";
pub const KEEPGOING: &str = "keepgoing";
pub const RANK_ATTRIBUTE: &str = "rankAttribute";
pub const RANK_ORDER: &str = "rankOrder";

pub const SEQUENCE: &str = "sequence";
pub const STRATEGY: &str = "strategy";
pub const COMMAND: &str = "command";
pub const EXEC: &str = "exec";
pub const SCRIPT: &str = "script";
pub const SCRIPTFILE: &str = "scriptfile";
pub const SCRIPTARGS: &str = "scriptargs";
pub const JOBREF: &str = "jobref";
pub const NODE_STEP: &str = "nodeStep";
pub const ARG: &str = "arg";
pub const LINE: &str = "line";
pub const STEP_PLUGIN: &str = "step-plugin";
pub const NODE_STEP_PLUGIN: &str = "node-step-plugin";
pub const TYPE: &str = "type";
pub const CONFIGURATION: &str = "configuration";
pub const ENTRY: &str = "entry";
pub const KEY: &str = "key";

pub const NODEFILTERS: &str = "nodefilters";
pub const EXCLUDE_PRECEDENCE: &str = "excludeprecedence";
pub const FILTER: &str = "filter";
