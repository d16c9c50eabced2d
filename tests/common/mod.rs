//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for creating test workspace directory structures: a
/// components.json source file plus an agents directory whose
/// subdirectories define the approved categories.
pub struct WorkspaceBuilder {
    temp_dir: TempDir,
    categories: Vec<String>,
    agents: Vec<AgentRecordBuilder>,
}

impl WorkspaceBuilder {
    /// Create a new builder with an empty workspace
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, categories: Vec::new(), agents: Vec::new() }
    }

    /// Get the workspace root path
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add an approved category (a subdirectory of the agents directory)
    pub fn with_category(mut self, name: &str) -> Self {
        self.categories.push(name.to_string());
        self
    }

    /// Add an agent record to components.json
    pub fn with_agent(mut self, agent: AgentRecordBuilder) -> Self {
        self.agents.push(agent);
        self
    }

    /// Write raw components.json content verbatim
    pub fn with_raw_components(self, json: &str) -> Workspace {
        let workspace = self.materialize_categories();
        fs::write(&workspace.components_path, json).expect("Failed to write components.json");
        workspace
    }

    /// Materialize the workspace on disk and return its paths (consumes self)
    pub fn build(self) -> Workspace {
        let agents_json =
            self.agents.iter().map(|a| a.to_json()).collect::<Vec<_>>().join(",");
        let components = format!(r#"{{"agents":[{}]}}"#, agents_json);

        let workspace = self.materialize_categories();
        fs::write(&workspace.components_path, components)
            .expect("Failed to write components.json");
        workspace
    }

    fn materialize_categories(self) -> Workspace {
        let root = self.temp_dir.path().to_path_buf();

        let agents_dir = root.join("agents");
        fs::create_dir_all(&agents_dir).expect("Failed to create agents dir");
        for category in &self.categories {
            fs::create_dir(agents_dir.join(category)).expect("Failed to create category dir");
        }

        Workspace {
            components_path: root.join("components.json"),
            agents_dir,
            output_path: root.join("api").join("agents.json"),
            _temp_dir: self.temp_dir,
        }
    }
}

impl Default for WorkspaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A materialized test workspace; dropping it removes the temp directory
pub struct Workspace {
    pub components_path: PathBuf,
    pub agents_dir: PathBuf,
    pub output_path: PathBuf,
    _temp_dir: TempDir,
}

impl Workspace {
    /// Read the generated index back as a string
    pub fn output_json(&self) -> String {
        fs::read_to_string(&self.output_path).expect("Failed to read output file")
    }
}

/// Builder for agent entries in components.json
pub struct AgentRecordBuilder {
    path: String,
    content: Option<String>,
    category: Option<String>,
    description: Option<String>,
}

impl AgentRecordBuilder {
    /// Create a new agent record with the given path
    pub fn new(path: &str) -> Self {
        Self { path: path.to_string(), content: None, category: None, description: None }
    }

    /// Set raw document content
    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    /// Set document content wrapping the given category in YAML front matter
    pub fn front_matter_category(self, category: &str) -> Self {
        let content = format!("---\ncategory: {}\n---\n# Agent\n", category);
        self.content(&content)
    }

    /// Set the explicit category field
    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Set the description
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Convert to a JSON object string
    pub fn to_json(&self) -> String {
        let mut fields = vec![format!(r#""path":{}"#, json_string(&self.path))];
        if let Some(content) = &self.content {
            fields.push(format!(r#""content":{}"#, json_string(content)));
        }
        if let Some(category) = &self.category {
            fields.push(format!(r#""category":{}"#, json_string(category)));
        }
        if let Some(description) = &self.description {
            fields.push(format!(r#""description":{}"#, json_string(description)));
        }
        format!("{{{}}}", fields.join(","))
    }
}

fn json_string(value: &str) -> String {
    serde_json::to_string(value).expect("Failed to encode JSON string")
}
