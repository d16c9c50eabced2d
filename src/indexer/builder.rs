//! Index builder: resolve, validate, and project agent records.
//!
//! # Error Handling Strategy
//!
//! This module follows an **all-or-nothing** approach suitable for a build
//! step whose artifact is consumed by another tool:
//!
//! - **Header-level errors**: malformed YAML front matter is logged as a
//!   warning and category resolution falls through to the next rule
//! - **Category validation**: a single record resolving to an unapproved
//!   category fails the entire build; a partially valid index would silently
//!   hide broken records from the downstream consumer
//! - **User feedback**: warnings go to stderr, the success summary to stdout
//!
//! Nothing is written until every record has passed validation, so a failed
//! build never leaves a partial artifact behind.

use std::collections::BTreeSet;

use anyhow::Result;

use crate::models::{AgentEntry, AgentIndex, AgentRecord, INDEX_VERSION, IndexError};
use crate::parsers::front_matter_category;

/// Descriptions are truncated to keep the index small for its consumer.
const MAX_DESCRIPTION_CHARS: usize = 100;

/// Category assigned to agents whose path has no directory component.
const ROOT_CATEGORY: &str = "root";

const MARKDOWN_EXT: &str = ".md";

/// Build the output index from agent records and the approved category set.
///
/// Applies resolve -> validate -> project to each record, preserving input
/// order in the output. The approved set is injected rather than read from
/// disk here so the build logic is testable without a filesystem; see
/// [`load_approved_categories`](crate::indexer::categories::load_approved_categories).
///
/// # Errors
///
/// Returns [`IndexError::InvalidCategory`] (boxed) as soon as any record
/// resolves to a category outside `approved`. The whole build fails; there
/// is no per-record skip.
pub fn build_index(records: &[AgentRecord], approved: &BTreeSet<String>) -> Result<AgentIndex> {
    let mut agents = Vec::with_capacity(records.len());

    for record in records {
        let category = resolve_category(record);
        validate_category(&category, &record.path, approved)?;
        agents.push(project(record, category));
    }

    let total = agents.len();
    Ok(AgentIndex { agents, version: INDEX_VERSION.to_string(), total })
}

/// Resolve a record's category. Precedence, first non-empty match wins:
///
/// 1. `category` from YAML front matter embedded in `content`
/// 2. the record's explicit `category` field
/// 3. the first path segment, or `"root"` for paths without a directory
pub fn resolve_category(record: &AgentRecord) -> String {
    if let Some(content) = record.content.as_deref() {
        if let Some(category) = front_matter_category(&record.path, content) {
            if !category.is_empty() {
                return category;
            }
        }
    }

    if let Some(category) = record.category.as_deref() {
        if !category.is_empty() {
            return category.to_string();
        }
    }

    match record.path.split_once('/') {
        Some((first, _)) => first.to_string(),
        None => ROOT_CATEGORY.to_string(),
    }
}

/// Check a resolved category against the approved set.
///
/// # Errors
///
/// Returns [`IndexError::InvalidCategory`] carrying the offending category,
/// the record's path, and the full approved set (sorted).
pub fn validate_category(
    category: &str,
    path: &str,
    approved: &BTreeSet<String>,
) -> Result<(), IndexError> {
    if approved.contains(category) {
        return Ok(());
    }

    Err(IndexError::InvalidCategory {
        category: category.to_string(),
        path: path.to_string(),
        approved: approved.iter().cloned().collect(),
    })
}

/// Project a record to its output shape.
///
/// - `name`: final path segment with a trailing `.md` stripped
/// - `path`: source path with the first `.md` occurrence removed anywhere in
///   the string (legacy-compatible, deliberately not suffix-only)
/// - `description`: truncated to 100 characters, no ellipsis added
fn project(record: &AgentRecord, category: String) -> AgentEntry {
    let file_name = record.path.rsplit('/').next().unwrap_or(record.path.as_str());
    let name = file_name.strip_suffix(MARKDOWN_EXT).unwrap_or(file_name).to_string();

    let path = record.path.replacen(MARKDOWN_EXT, "", 1);

    let description = record
        .description
        .as_deref()
        .unwrap_or_default()
        .chars()
        .take(MAX_DESCRIPTION_CHARS)
        .collect();

    AgentEntry { name, path, category, description }
}
