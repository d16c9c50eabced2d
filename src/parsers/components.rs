use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{AgentRecord, ComponentsFile};

/// Load components.json and return its agent records.
///
/// A missing `agents` key yields an empty list. A record with a missing or
/// non-string `path` fails deserialization here, before any projection runs.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON matching
/// the expected shape; the file path is attached as context.
pub fn load_components_file(path: &Path) -> Result<Vec<AgentRecord>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read components file: {}", path.display()))?;

    let components: ComponentsFile = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse components file: {}", path.display()))?;

    Ok(components.agents)
}
