use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Build the approved category set from the agents directory structure.
///
/// Each immediate subdirectory of `agents_dir` contributes its name as an
/// approved category. Plain files in the directory are ignored.
///
/// # Returns
///
/// Returns an empty set if the directory doesn't exist (not an error); with
/// no approved categories every record then fails validation, which forces
/// the directory to be present for any non-trivial run.
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be read, or if a
/// directory entry cannot be accessed.
pub fn load_approved_categories(agents_dir: &Path) -> Result<BTreeSet<String>> {
    let mut categories = BTreeSet::new();

    if !agents_dir.is_dir() {
        return Ok(categories);
    }

    let entries = fs::read_dir(agents_dir)
        .with_context(|| format!("Failed to read agents directory: {}", agents_dir.display()))?;

    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if !path.is_dir() {
            continue;
        }

        if let Some(name) = path.file_name() {
            categories.insert(name.to_string_lossy().to_string());
        }
    }

    Ok(categories)
}
