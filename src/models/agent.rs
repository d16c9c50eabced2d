use serde::{Deserialize, Serialize};

/// Version stamped into every generated index.
pub const INDEX_VERSION: &str = "1.0.0";

/// One raw agent entry as it appears in components.json.
///
/// Only `path` is required; everything else defaults so partially populated
/// records still load. Unknown fields in the source document are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRecord {
    pub path: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Top-level shape of components.json. A missing `agents` key means an
/// empty collection, not a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentsFile {
    #[serde(default)]
    pub agents: Vec<AgentRecord>,
}

/// One projected entry in the generated index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentEntry {
    pub name: String,
    pub path: String,
    pub category: String,
    pub description: String,
}

/// The complete output artifact written to agents.json.
///
/// `total` always equals `agents.len()`; the field is materialized so
/// downstream consumers can read the count without deserializing the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentIndex {
    pub agents: Vec<AgentEntry>,
    pub version: String,
    pub total: usize,
}
