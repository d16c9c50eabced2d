use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::indexer::{build_index, load_approved_categories};
use crate::parsers::load_components_file;
use crate::storage::write_index;

#[derive(Parser)]
#[command(name = "agent-index")]
#[command(version = "0.1.0")]
#[command(about = "Generate the agents API index from components.json", long_about = None)]
pub struct Cli {
    /// Source components document
    #[arg(long, default_value = "docs/components.json")]
    pub components: PathBuf,

    /// Directory whose subdirectories define the approved categories
    #[arg(long, default_value = "cli-tool/components/agents")]
    pub agents_dir: PathBuf,

    /// Destination for the generated index
    #[arg(long, default_value = "docs/api/agents.json")]
    pub output: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    generate(&cli.components, &cli.agents_dir, &cli.output)
}

/// Run the full pipeline: load categories and records, build, write.
///
/// A missing components file is reported on stderr and treated as a
/// completed (failed) run rather than an error. All other failures
/// propagate for the caller to log; by then nothing has been written.
pub fn generate(components: &Path, agents_dir: &Path, output: &Path) -> Result<()> {
    if !components.exists() {
        eprintln!("Error: {} not found", components.display());
        return Ok(());
    }

    let approved = load_approved_categories(agents_dir)?;
    let records = load_components_file(components)?;
    let index = build_index(&records, &approved)?;
    write_index(output, &index)?;

    println!("✅ Generated agent index with {} agents", index.total);
    println!("📄 Output: {}", output.display());

    Ok(())
}
