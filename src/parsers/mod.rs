//! Parsers for the two input formats: components.json and YAML front matter.
//!
//! # Error Handling Strategy
//!
//! - **Source document failures**: a components.json that cannot be read or
//!   deserialized is a hard error with the file path attached as context;
//!   there is nothing sensible to build from a broken source.
//!
//! - **Front matter failures**: a malformed YAML header is logged to stderr
//!   and treated as "no category here", letting resolution fall through to
//!   the record's explicit `category` field or its path. A single bad header
//!   never fails the run on its own.
//!
//! - **Error propagation**: uses `anyhow::Result` with context. Since this is
//!   a binary/CLI tool (not a library), errors are boxed and consumers don't
//!   match on error types.

pub mod components;
pub mod front_matter;

pub use components::load_components_file;
pub use front_matter::front_matter_category;
