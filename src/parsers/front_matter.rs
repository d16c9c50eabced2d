use serde_yaml::Value;

/// Front matter delimiter marker.
const MARKER: &str = "---";

/// Extract the `category` key from a YAML front matter block, if present.
///
/// Content carries front matter when it starts with `---` and contains a
/// closing `---`; the segment between the two markers is parsed as YAML.
///
/// Returns `None` when:
/// - the content does not start with the marker,
/// - the block is never closed,
/// - the YAML fails to parse (logged to stderr as a warning, non-fatal),
/// - the block has no `category` key or its value is not a string.
///
/// `path` identifies the record in warning messages only.
pub fn front_matter_category(path: &str, content: &str) -> Option<String> {
    if !content.starts_with(MARKER) {
        return None;
    }

    let parts: Vec<&str> = content.splitn(3, MARKER).collect();
    if parts.len() < 3 {
        return None;
    }

    match serde_yaml::from_str::<Value>(parts[1]) {
        Ok(value) => value.get("category").and_then(Value::as_str).map(str::to_string),
        Err(e) => {
            eprintln!("Warning: Invalid YAML in {}: {}", path, e);
            None
        }
    }
}
