use std::path::{Path, PathBuf};

use binary_tree::{BinaryTree, record::Record};
use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use tree_tool::logging;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file (binary tree file)
    #[arg(short = 'i', long = "input", value_name = "INPUT_FILE")]
    input: PathBuf,

    /// Report whether the tree contains this value. Can be repeated
    #[arg(
        short = 'f',
        long = "find",
        value_name = "VALUE",
        allow_negative_numbers = true
    )]
    find: Vec<i32>,

    /// Log filter, e.g. `debug` or `binary_tree=trace`. Overrides RUST_LOG
    #[arg(long = "log-level", env = "TREE_TOOL_LOG", value_name = "FILTER")]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    logging::init(args.log_level.as_deref())?;

    analyze(&args.input, &args.find)
}

fn analyze(input: impl AsRef<Path>, find: &[i32]) -> Result<()> {
    let input = input.as_ref();
    let mut tree = BinaryTree::load(input);
    if tree.has_error() {
        return Err(eyre!(
            "Could not load {}: {}",
            input.display(),
            tree.error_text()
        ));
    }

    println!("{tree}");
    println!("{}", summary(&tree));

    for value in find {
        let found = if tree.contains(*value) { "found" } else { "not found" };
        println!("{value}: {found}");
    }

    Ok(())
}

fn summary(tree: &BinaryTree) -> String {
    let file_size = tree.size() * Record::SIZE;
    format!(
        "--- Analysis results ---\nNodes: {} | Leaves: {}, inner: {} | Height: {} | Size: {} bytes\n--------------------------\n",
        tree.size(),
        tree.leaf_count(),
        tree.size() - tree.leaf_count(),
        tree.height(),
        file_size,
    )
}
