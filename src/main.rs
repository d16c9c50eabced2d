use agent_index::cli;

fn main() {
    // All failures are reported on stderr; the process completes either way.
    if let Err(e) = cli::run() {
        eprintln!("Error generating agent index: {e:#}");
    }
}
