// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Document schema: materializes job entities from documents and
//! serializes them back.
//!
//! Decoding is a recursive walk over the token stream, one function per
//! element. Every field is presence-optional (absent decodes to the zero
//! value), unknown elements and attributes are skipped, and coercion
//! failures surface as a [`DecodeError`] naming the field path. Encoding
//! is the mirror pass: booleans are always written explicitly, optional
//! fields only when present, and container wrappers only when they have
//! content — except `sequence`, which every job definition carries.

use crate::config::{read_plugin_config, write_plugin_config};
use crate::error::{DecodeError, MarkupError};
use crate::reader::{MarkupReader, Token};
use crate::scalar::{join_value_choices, read_arg_line, split_value_choices, write_arg_line};
use crate::tags;
use crate::writer::MarkupWriter;
use jw_core::{
    JobCommand, JobCommandSequence, JobDetail, JobDispatch, JobNodeFilter, JobOption, JobOptions,
    JobPlugin, JobRef, JobSummary,
};
use std::collections::HashMap;

/// Decode a project job listing (`jobs` document).
///
/// A present-but-empty collection is a valid empty listing.
pub fn decode_job_summaries(doc: &[u8]) -> Result<Vec<JobSummary>, DecodeError> {
    let text = document_text(doc)?;
    let mut r = open_document(text, tags::JOBS)?;
    let mut jobs = Vec::new();
    loop {
        match r.next_token()? {
            None => return Err(DecodeError::UnexpectedEof { context: "job collection" }),
            Some(Token::Start { name, attrs }) => {
                if name == tags::JOB {
                    jobs.push(read_job_summary(&mut r, &attrs)?);
                } else {
                    r.skip_element(&name)?;
                }
            }
            Some(Token::End { name }) if name == tags::JOBS => return Ok(jobs),
            Some(_) => {}
        }
    }
}

/// Decode a full job definition listing (`joblist` document).
pub fn decode_job_list(doc: &[u8]) -> Result<Vec<JobDetail>, DecodeError> {
    let text = document_text(doc)?;
    let mut r = open_document(text, tags::JOBLIST)?;
    let mut jobs = Vec::new();
    loop {
        match r.next_token()? {
            None => return Err(DecodeError::UnexpectedEof { context: "job list" }),
            Some(Token::Start { name, .. }) => {
                if name == tags::JOB {
                    jobs.push(read_job_detail(&mut r)?);
                } else {
                    r.skip_element(&name)?;
                }
            }
            Some(Token::End { name }) if name == tags::JOBLIST => return Ok(jobs),
            Some(_) => {}
        }
    }
}

/// Serialize job summaries as a complete `jobs` document.
pub fn encode_job_summaries(jobs: &[JobSummary]) -> String {
    let mut w = MarkupWriter::new();
    w.open(tags::JOBS);
    for job in jobs {
        write_job_summary(&mut w, job);
    }
    w.end(tags::JOBS);
    w.finish()
}

/// Serialize job definitions as a complete `joblist` document.
pub fn encode_job_list(jobs: &[JobDetail]) -> String {
    let mut w = MarkupWriter::new();
    w.open(tags::JOBLIST);
    for job in jobs {
        write_job_detail(&mut w, job);
    }
    w.end(tags::JOBLIST);
    w.finish()
}

/// Serialize one job definition as a single-entry `joblist` document.
pub fn encode_job_detail(job: &JobDetail) -> String {
    encode_job_list(std::slice::from_ref(job))
}

fn document_text(doc: &[u8]) -> Result<&str, DecodeError> {
    std::str::from_utf8(doc).map_err(|_| DecodeError::from(MarkupError::InvalidUtf8))
}

/// Position a fresh reader just inside the expected root element.
fn open_document<'a>(text: &'a str, root: &'static str) -> Result<MarkupReader<'a>, DecodeError> {
    let mut r = MarkupReader::new(text);
    loop {
        match r.next_token()? {
            None => return Err(DecodeError::EmptyDocument),
            Some(Token::Start { name, .. }) => {
                if name == root {
                    return Ok(r);
                }
                return Err(DecodeError::UnexpectedRoot { expected: root, found: name });
            }
            Some(_) => {}
        }
    }
}

fn read_job_summary(
    r: &mut MarkupReader,
    attrs: &[(String, String)],
) -> Result<JobSummary, DecodeError> {
    let mut job = JobSummary {
        id: attr_value(attrs, tags::ID).unwrap_or_default().to_string(),
        ..Default::default()
    };
    loop {
        match r.next_token()? {
            None => return Err(DecodeError::UnexpectedEof { context: "job summary" }),
            Some(Token::Start { name, .. }) => match name.as_str() {
                tags::NAME => job.name = read_text(r, tags::NAME)?,
                tags::GROUP => job.group = read_text(r, tags::GROUP)?,
                tags::PROJECT => job.project = read_text(r, tags::PROJECT)?,
                tags::DESCRIPTION => job.description = Some(read_text(r, tags::DESCRIPTION)?),
                _ => r.skip_element(&name)?,
            },
            Some(Token::End { name }) if name == tags::JOB => return Ok(job),
            Some(_) => {}
        }
    }
}

fn read_job_detail(r: &mut MarkupReader) -> Result<JobDetail, DecodeError> {
    let mut job = JobDetail::default();
    loop {
        match r.next_token()? {
            None => return Err(DecodeError::UnexpectedEof { context: "job definition" }),
            Some(Token::Start { name, attrs }) => match name.as_str() {
                tags::ID => job.id = Some(read_text(r, tags::ID)?),
                tags::NAME => job.name = read_text(r, tags::NAME)?,
                tags::GROUP => job.group = Some(read_text(r, tags::GROUP)?),
                tags::DESCRIPTION => job.description = Some(read_text(r, tags::DESCRIPTION)?),
                tags::LOG_LEVEL => job.log_level = Some(read_text(r, tags::LOG_LEVEL)?),
                tags::MULTIPLE_EXECUTIONS => {
                    job.allow_concurrent =
                        read_bool_element(r, tags::MULTIPLE_EXECUTIONS, "job/multipleExecutions")?;
                }
                tags::CONTEXT => read_context(r, &mut job)?,
                tags::DISPATCH => job.dispatch = read_dispatch(r)?,
                tags::SEQUENCE => job.sequence = read_sequence(r, &attrs)?,
                tags::NODEFILTERS => job.node_filter = Some(read_node_filter(r)?),
                _ => r.skip_element(&name)?,
            },
            Some(Token::End { name }) if name == tags::JOB => return Ok(job),
            Some(_) => {}
        }
    }
}

/// `context` flattens `project` and `options` into the job.
fn read_context(r: &mut MarkupReader, job: &mut JobDetail) -> Result<(), DecodeError> {
    loop {
        match r.next_token()? {
            None => return Err(DecodeError::UnexpectedEof { context: "job context" }),
            Some(Token::Start { name, .. }) => match name.as_str() {
                tags::PROJECT => job.project = Some(read_text(r, tags::PROJECT)?),
                tags::OPTIONS => job.options = read_options(r)?,
                _ => r.skip_element(&name)?,
            },
            Some(Token::End { name }) if name == tags::CONTEXT => return Ok(()),
            Some(_) => {}
        }
    }
}

fn read_dispatch(r: &mut MarkupReader) -> Result<JobDispatch, DecodeError> {
    let mut dispatch = JobDispatch::default();
    loop {
        match r.next_token()? {
            None => return Err(DecodeError::UnexpectedEof { context: "dispatch policy" }),
            Some(Token::Start { name, .. }) => match name.as_str() {
                tags::THREADCOUNT => {
                    let text = read_text(r, tags::THREADCOUNT)?;
                    dispatch.max_thread_count = match text.trim().parse() {
                        Ok(count) => count,
                        Err(_) => {
                            return Err(DecodeError::InvalidValue {
                                path: "dispatch/threadcount",
                                value: text,
                                expected: "an unsigned integer",
                            })
                        }
                    };
                }
                tags::KEEPGOING => {
                    dispatch.continue_on_error =
                        read_bool_element(r, tags::KEEPGOING, "dispatch/keepgoing")?;
                }
                tags::RANK_ATTRIBUTE => {
                    dispatch.rank_attribute = Some(read_text(r, tags::RANK_ATTRIBUTE)?);
                }
                tags::RANK_ORDER => dispatch.rank_order = Some(read_text(r, tags::RANK_ORDER)?),
                _ => r.skip_element(&name)?,
            },
            Some(Token::End { name }) if name == tags::DISPATCH => return Ok(dispatch),
            Some(_) => {}
        }
    }
}

fn read_options(r: &mut MarkupReader) -> Result<JobOptions, DecodeError> {
    let mut options = JobOptions::default();
    loop {
        match r.next_token()? {
            None => return Err(DecodeError::UnexpectedEof { context: "job options" }),
            Some(Token::Start { name, attrs }) => match name.as_str() {
                tags::PRESERVE_ORDER => {
                    options.preserve_order =
                        read_bool_element(r, tags::PRESERVE_ORDER, "options/preserveOrder")?;
                }
                tags::OPTION => options.options.push(read_option(r, &attrs)?),
                _ => r.skip_element(&name)?,
            },
            Some(Token::End { name }) if name == tags::OPTIONS => return Ok(options),
            Some(_) => {}
        }
    }
}

fn read_option(r: &mut MarkupReader, attrs: &[(String, String)]) -> Result<JobOption, DecodeError> {
    let mut option = JobOption {
        name: attr_value(attrs, tags::NAME).map(str::to_string),
        default_value: attr_value(attrs, tags::VALUE).map(str::to_string),
        value_choices: attr_value(attrs, tags::VALUES).map(split_value_choices).unwrap_or_default(),
        value_choices_url: attr_value(attrs, tags::VALUES_URL).map(str::to_string),
        require_predefined_choice: attr_bool(attrs, tags::ENFORCED_VALUES, "option/@enforcedvalues")?,
        validation_regex: attr_value(attrs, tags::REGEX).map(str::to_string),
        description: None,
        required: attr_bool(attrs, tags::REQUIRED, "option/@required")?,
        multi_valued: attr_bool(attrs, tags::MULTIVALUED, "option/@multivalued")?,
        multi_value_delimiter: attr_value(attrs, tags::DELIMITER).map(str::to_string),
        obscure_input: attr_bool(attrs, tags::SECURE, "option/@secure")?,
        value_exposed: attr_bool(attrs, tags::VALUE_EXPOSED, "option/@valueExposed")?,
    };
    loop {
        match r.next_token()? {
            None => return Err(DecodeError::UnexpectedEof { context: "job option" }),
            Some(Token::Start { name, .. }) => match name.as_str() {
                tags::DESCRIPTION => option.description = Some(read_text(r, tags::DESCRIPTION)?),
                _ => r.skip_element(&name)?,
            },
            Some(Token::End { name }) if name == tags::OPTION => return Ok(option),
            Some(_) => {}
        }
    }
}

fn read_sequence(
    r: &mut MarkupReader,
    attrs: &[(String, String)],
) -> Result<JobCommandSequence, DecodeError> {
    let mut sequence = JobCommandSequence {
        continue_on_error: attr_bool(attrs, tags::KEEPGOING, "sequence/@keepgoing")?,
        ordering_strategy: attr_value(attrs, tags::STRATEGY).map(str::to_string),
        commands: Vec::new(),
    };
    loop {
        match r.next_token()? {
            None => return Err(DecodeError::UnexpectedEof { context: "command sequence" }),
            Some(Token::Start { name, .. }) => {
                if name == tags::COMMAND {
                    sequence.commands.push(read_command(r)?);
                } else {
                    r.skip_element(&name)?;
                }
            }
            Some(Token::End { name }) if name == tags::SEQUENCE => return Ok(sequence),
            Some(_) => {}
        }
    }
}

/// Decode one step, discriminating the variant by which child element is
/// present. Zero alternatives or more than one is a schema violation.
fn read_command(r: &mut MarkupReader) -> Result<JobCommand, DecodeError> {
    let mut step: Option<JobCommand> = None;
    let mut script_file: Option<String> = None;
    let mut script_args: Option<String> = None;

    fn place(step: &mut Option<JobCommand>, next: JobCommand) -> Result<(), DecodeError> {
        match step {
            Some(first) => {
                Err(DecodeError::AmbiguousCommand { first: first.kind(), second: next.kind() })
            }
            None => {
                *step = Some(next);
                Ok(())
            }
        }
    }

    loop {
        match r.next_token()? {
            None => return Err(DecodeError::UnexpectedEof { context: "command" }),
            Some(Token::Start { name, attrs }) => match name.as_str() {
                tags::EXEC => {
                    place(&mut step, JobCommand::ShellCommand(read_text(r, tags::EXEC)?))?;
                }
                tags::SCRIPT => {
                    place(&mut step, JobCommand::InlineScript(read_text(r, tags::SCRIPT)?))?;
                }
                tags::SCRIPTFILE => {
                    let path = read_text(r, tags::SCRIPTFILE)?;
                    if script_file.replace(path).is_some() {
                        return Err(DecodeError::AmbiguousCommand {
                            first: tags::SCRIPTFILE,
                            second: tags::SCRIPTFILE,
                        });
                    }
                }
                tags::SCRIPTARGS => script_args = Some(read_text(r, tags::SCRIPTARGS)?),
                tags::JOBREF => {
                    place(&mut step, JobCommand::JobReference(read_jobref(r, &attrs)?))?;
                }
                tags::STEP_PLUGIN => {
                    let plugin = read_plugin(r, &attrs, tags::STEP_PLUGIN)?;
                    place(&mut step, JobCommand::StepPlugin(plugin))?;
                }
                tags::NODE_STEP_PLUGIN => {
                    let plugin = read_plugin(r, &attrs, tags::NODE_STEP_PLUGIN)?;
                    place(&mut step, JobCommand::NodeStepPlugin(plugin))?;
                }
                _ => r.skip_element(&name)?,
            },
            Some(Token::End { name }) if name == tags::COMMAND => {
                if let Some(path) = script_file {
                    place(&mut step, JobCommand::ScriptFile { path, args: script_args })?;
                } else if script_args.is_some() {
                    // An argument string with no script file to apply it to.
                    return Err(DecodeError::UnexpectedElement {
                        found: tags::SCRIPTARGS.to_string(),
                        context: "command without a scriptfile",
                    });
                }
                return step.ok_or(DecodeError::EmptyCommand);
            }
            Some(_) => {}
        }
    }
}

fn read_jobref(r: &mut MarkupReader, attrs: &[(String, String)]) -> Result<JobRef, DecodeError> {
    let mut job_ref = JobRef {
        name: attr_value(attrs, tags::NAME).unwrap_or_default().to_string(),
        group: attr_value(attrs, tags::GROUP).map(str::to_string),
        run_for_each_node: attr_bool(attrs, tags::NODE_STEP, "jobref/@nodeStep")?,
        arg_line: String::new(),
    };
    loop {
        match r.next_token()? {
            None => return Err(DecodeError::UnexpectedEof { context: "job reference" }),
            Some(Token::Start { name, attrs }) => match name.as_str() {
                tags::ARG => job_ref.arg_line = read_arg_line(r, &attrs)?,
                _ => r.skip_element(&name)?,
            },
            Some(Token::End { name }) if name == tags::JOBREF => return Ok(job_ref),
            Some(_) => {}
        }
    }
}

fn read_plugin(
    r: &mut MarkupReader,
    attrs: &[(String, String)],
    close: &'static str,
) -> Result<JobPlugin, DecodeError> {
    let mut plugin = JobPlugin {
        plugin_type: attr_value(attrs, tags::TYPE).unwrap_or_default().to_string(),
        config: HashMap::new(),
    };
    loop {
        match r.next_token()? {
            None => return Err(DecodeError::UnexpectedEof { context: "plugin step" }),
            Some(Token::Start { name, .. }) => match name.as_str() {
                tags::CONFIGURATION => plugin.config = read_plugin_config(r)?,
                _ => r.skip_element(&name)?,
            },
            Some(Token::End { name }) if name == close => return Ok(plugin),
            Some(_) => {}
        }
    }
}

fn read_node_filter(r: &mut MarkupReader) -> Result<JobNodeFilter, DecodeError> {
    let mut filter = JobNodeFilter::default();
    loop {
        match r.next_token()? {
            None => return Err(DecodeError::UnexpectedEof { context: "node filter" }),
            Some(Token::Start { name, .. }) => match name.as_str() {
                tags::EXCLUDE_PRECEDENCE => {
                    filter.exclude_precedence = read_bool_element(
                        r,
                        tags::EXCLUDE_PRECEDENCE,
                        "nodefilters/excludeprecedence",
                    )?;
                }
                tags::FILTER => filter.query = Some(read_text(r, tags::FILTER)?),
                _ => r.skip_element(&name)?,
            },
            Some(Token::End { name }) if name == tags::NODEFILTERS => return Ok(filter),
            Some(_) => {}
        }
    }
}

/// Accumulate the text content of the element `name` the reader just
/// opened. A child element inside a text field is a shape violation.
fn read_text(r: &mut MarkupReader, name: &'static str) -> Result<String, DecodeError> {
    let mut text = String::new();
    loop {
        match r.next_token()? {
            None => return Err(DecodeError::UnexpectedEof { context: name }),
            Some(Token::Text(chunk)) => text.push_str(&chunk),
            Some(Token::Start { name: child, .. }) => {
                return Err(DecodeError::UnexpectedElement { found: child, context: name });
            }
            Some(Token::End { .. }) => return Ok(text),
        }
    }
}

fn read_bool_element(
    r: &mut MarkupReader,
    name: &'static str,
    path: &'static str,
) -> Result<bool, DecodeError> {
    let text = read_text(r, name)?;
    match parse_bool(text.trim()) {
        Some(value) => Ok(value),
        None => Err(DecodeError::InvalidValue { path, value: text, expected: "a boolean" }),
    }
}

fn attr_value<'a>(attrs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attrs.iter().find(|(attr, _)| attr == name).map(|(_, value)| value.as_str())
}

/// An absent boolean attribute decodes to false; a present one must be a
/// recognized literal.
fn attr_bool(
    attrs: &[(String, String)],
    name: &str,
    path: &'static str,
) -> Result<bool, DecodeError> {
    match attr_value(attrs, name) {
        None => Ok(false),
        Some(raw) => match parse_bool(raw.trim()) {
            Some(value) => Ok(value),
            None => Err(DecodeError::InvalidValue {
                path,
                value: raw.to_string(),
                expected: "a boolean",
            }),
        },
    }
}

/// Boolean literals the scheduler's document format accepts.
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn write_job_summary(w: &mut MarkupWriter, job: &JobSummary) {
    w.open(tags::JOB);
    w.attr(tags::ID, &job.id);
    w.text_element(tags::NAME, &job.name);
    w.text_element(tags::GROUP, &job.group);
    w.text_element(tags::PROJECT, &job.project);
    if let Some(description) = &job.description {
        w.text_element(tags::DESCRIPTION, description);
    }
    w.end(tags::JOB);
}

fn write_job_detail(w: &mut MarkupWriter, job: &JobDetail) {
    w.open(tags::JOB);
    if let Some(id) = &job.id {
        w.text_element(tags::ID, id);
    }
    w.text_element(tags::NAME, &job.name);
    if let Some(group) = &job.group {
        w.text_element(tags::GROUP, group);
    }
    if let Some(description) = &job.description {
        w.text_element(tags::DESCRIPTION, description);
    }
    if let Some(log_level) = &job.log_level {
        w.text_element(tags::LOG_LEVEL, log_level);
    }
    w.text_element(tags::MULTIPLE_EXECUTIONS, bool_text(job.allow_concurrent));
    if job.project.is_some() || job.options != JobOptions::default() {
        w.open(tags::CONTEXT);
        if let Some(project) = &job.project {
            w.text_element(tags::PROJECT, project);
        }
        if job.options != JobOptions::default() {
            write_options(w, &job.options);
        }
        w.end(tags::CONTEXT);
    }
    if job.dispatch != JobDispatch::default() {
        write_dispatch(w, &job.dispatch);
    }
    write_sequence(w, &job.sequence);
    if let Some(filter) = &job.node_filter {
        write_node_filter(w, filter);
    }
    w.end(tags::JOB);
}

fn write_dispatch(w: &mut MarkupWriter, dispatch: &JobDispatch) {
    w.open(tags::DISPATCH);
    w.text_element(tags::THREADCOUNT, &dispatch.max_thread_count.to_string());
    w.text_element(tags::KEEPGOING, bool_text(dispatch.continue_on_error));
    if let Some(rank_attribute) = &dispatch.rank_attribute {
        w.text_element(tags::RANK_ATTRIBUTE, rank_attribute);
    }
    if let Some(rank_order) = &dispatch.rank_order {
        w.text_element(tags::RANK_ORDER, rank_order);
    }
    w.end(tags::DISPATCH);
}

fn write_options(w: &mut MarkupWriter, options: &JobOptions) {
    w.open(tags::OPTIONS);
    w.text_element(tags::PRESERVE_ORDER, bool_text(options.preserve_order));
    for option in &options.options {
        write_option(w, option);
    }
    w.end(tags::OPTIONS);
}

fn write_option(w: &mut MarkupWriter, option: &JobOption) {
    w.open(tags::OPTION);
    if let Some(name) = &option.name {
        w.attr(tags::NAME, name);
    }
    if let Some(value) = &option.default_value {
        w.attr(tags::VALUE, value);
    }
    if let Some(values) = join_value_choices(&option.value_choices) {
        w.attr(tags::VALUES, &values);
    }
    if let Some(url) = &option.value_choices_url {
        w.attr(tags::VALUES_URL, url);
    }
    w.attr(tags::ENFORCED_VALUES, bool_text(option.require_predefined_choice));
    if let Some(regex) = &option.validation_regex {
        w.attr(tags::REGEX, regex);
    }
    w.attr(tags::REQUIRED, bool_text(option.required));
    w.attr(tags::MULTIVALUED, bool_text(option.multi_valued));
    if let Some(delimiter) = &option.multi_value_delimiter {
        w.attr(tags::DELIMITER, delimiter);
    }
    w.attr(tags::SECURE, bool_text(option.obscure_input));
    w.attr(tags::VALUE_EXPOSED, bool_text(option.value_exposed));
    if let Some(description) = &option.description {
        w.text_element(tags::DESCRIPTION, description);
    }
    w.end(tags::OPTION);
}

fn write_sequence(w: &mut MarkupWriter, sequence: &JobCommandSequence) {
    w.open(tags::SEQUENCE);
    w.attr(tags::KEEPGOING, bool_text(sequence.continue_on_error));
    if let Some(strategy) = &sequence.ordering_strategy {
        w.attr(tags::STRATEGY, strategy);
    }
    for command in &sequence.commands {
        write_command(w, command);
    }
    w.end(tags::SEQUENCE);
}

fn write_command(w: &mut MarkupWriter, command: &JobCommand) {
    w.open(tags::COMMAND);
    match command {
        JobCommand::ShellCommand(line) => w.text_element(tags::EXEC, line),
        JobCommand::InlineScript(body) => w.text_element(tags::SCRIPT, body),
        JobCommand::ScriptFile { path, args } => {
            w.text_element(tags::SCRIPTFILE, path);
            if let Some(args) = args {
                w.text_element(tags::SCRIPTARGS, args);
            }
        }
        JobCommand::JobReference(job_ref) => write_jobref(w, job_ref),
        JobCommand::StepPlugin(plugin) => write_plugin(w, tags::STEP_PLUGIN, plugin),
        JobCommand::NodeStepPlugin(plugin) => write_plugin(w, tags::NODE_STEP_PLUGIN, plugin),
    }
    w.end(tags::COMMAND);
}

fn write_jobref(w: &mut MarkupWriter, job_ref: &JobRef) {
    w.open(tags::JOBREF);
    w.attr(tags::NAME, &job_ref.name);
    if let Some(group) = &job_ref.group {
        w.attr(tags::GROUP, group);
    }
    w.attr(tags::NODE_STEP, bool_text(job_ref.run_for_each_node));
    write_arg_line(w, &job_ref.arg_line);
    w.end(tags::JOBREF);
}

fn write_plugin(w: &mut MarkupWriter, tag: &'static str, plugin: &JobPlugin) {
    w.open(tag);
    w.attr(tags::TYPE, &plugin.plugin_type);
    write_plugin_config(w, &plugin.config);
    w.end(tag);
}

fn write_node_filter(w: &mut MarkupWriter, filter: &JobNodeFilter) {
    w.open(tags::NODEFILTERS);
    w.text_element(tags::EXCLUDE_PRECEDENCE, bool_text(filter.exclude_precedence));
    if let Some(query) = &filter.query {
        w.text_element(tags::FILTER, query);
    }
    w.end(tags::NODEFILTERS);
}

fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
