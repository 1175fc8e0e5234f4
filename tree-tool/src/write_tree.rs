use color_eyre::{Result, eyre::Context};

use std::path::Path;

use binary_tree::BinaryTree;
use tracing::info;

use crate::serialized_tree::SerializedTree;

/// Build the tree described by the CSV file at `input` and save it to
/// `output` in the binary tree format.
pub fn write_tree(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<BinaryTree> {
    let output = output.as_ref();

    // Read the input file
    let serialized =
        SerializedTree::read(input).context("Could not read tree definition file (CSV).")?;
    let mut tree = serialized.to_tree()?;

    // Write the tree to the output file
    tree.save(output)
        .with_context(|| format!("Could not save tree to {}", output.display()))?;

    info!(
        path = %output.display(),
        nodes = tree.size(),
        height = tree.height(),
        "wrote tree"
    );

    Ok(tree)
}
