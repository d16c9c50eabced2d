//! Index persistence: pretty-printed JSON with atomic writes

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::AgentIndex;

/// Write the index as pretty-printed JSON (2-space indent) at `path`.
///
/// Parent directories are created if absent. The file is written to a
/// sibling `.tmp` file and renamed into place, so a failed write never
/// leaves a truncated index behind.
pub fn write_index(path: &Path, index: &AgentIndex) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    let json = serde_json::to_string_pretty(index).context("Failed to serialize index")?;

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, json)
        .with_context(|| format!("Failed to write index temp file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename index temp file: {}", temp_path.display()))?;

    Ok(())
}
