use clap::Parser;
use color_eyre::Result;
use tree_tool::{logging, write_tree::write_tree};

use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file (CSV tree definition)
    #[arg(short = 'i', long = "input", value_name = "INPUT_FILE")]
    input: PathBuf,

    /// Output file
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_FILE")]
    output: PathBuf,

    /// Log filter, e.g. `debug` or `binary_tree=trace`. Overrides RUST_LOG
    #[arg(long = "log-level", env = "TREE_TOOL_LOG", value_name = "FILTER")]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    logging::init(args.log_level.as_deref())?;

    let tree = write_tree(args.input, &args.output)?;
    println!(
        "Wrote {} nodes ({} leaves, height {}) to {}",
        tree.size(),
        tree.leaf_count(),
        tree.height(),
        args.output.display()
    );

    Ok(())
}
