//! Data models for the agent index pipeline.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`AgentRecord`] - Raw agent entries from components.json
//! - [`AgentEntry`] - Projected entries written to the output index
//! - [`AgentIndex`] - The complete output artifact with version and count
//! - [`IndexError`] - Typed domain failures (invalid category)
//!
//! These models use serde for JSON (de)serialization; optional source fields
//! default rather than fail, while a missing or non-string `path` is rejected
//! at load time.

pub mod agent;
pub mod error;

pub use agent::{AgentEntry, AgentIndex, AgentRecord, ComponentsFile, INDEX_VERSION};
pub use error::IndexError;
