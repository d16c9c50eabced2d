use thiserror::Error;

/// Typed failures produced while building the index.
///
/// An invalid category aborts the whole run rather than skipping the record;
/// the error carries the full approved set so the message alone is enough to
/// fix the source document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("Invalid category '{category}' for agent {path}. Approved categories: {approved:?}")]
    InvalidCategory { category: String, path: String, approved: Vec<String> },
}
