//! Agent Index Builder - Generate a validated agents API index from components.json
//!
//! This library transforms a raw agent-document collection into the condensed
//! `agents.json` index consumed by the companion CLI tool. It supports:
//!
//! - Loading agent records from a `components.json` document
//! - Extracting the agent category from embedded YAML front matter
//! - Validating categories against the agents directory structure
//! - Writing a size-bounded, pretty-printed JSON index
//!
//! # Example
//!
//! ```no_run
//! use std::collections::BTreeSet;
//! use agent_index::build_index;
//! use agent_index::models::AgentRecord;
//!
//! let records = vec![AgentRecord {
//!     path: "coding/reviewer.md".to_string(),
//!     content: None,
//!     category: None,
//!     description: Some("Reviews code".to_string()),
//! }];
//! let approved: BTreeSet<String> = ["coding".to_string()].into();
//! let index = build_index(&records, &approved)?;
//! println!("Indexed {} agents", index.total);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod storage;

// Re-export commonly used types
pub use indexer::builder::build_index;
pub use indexer::categories::load_approved_categories;
pub use models::{AgentEntry, AgentIndex, AgentRecord};
pub use parsers::components::load_components_file;
pub use storage::write_index;
