use std::collections::{HashMap, HashSet};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::{fs, io};

use binary_tree::{BinaryTree, tree::Builder};
use color_eyre::Result;
use color_eyre::eyre::{Context, ContextCompat, eyre};
use serde::{Deserialize, Deserializer, de};
use tracing::debug;

#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
pub enum TreeKind {
    #[serde(rename = "binary_tree", alias = "binary-tree")]
    BinaryTree,
}

/// A single row of a [`SerializedTree`]
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SerializedNode {
    /// Node index. 1-indexed, node 1 is the root.
    #[serde(rename = "node")]
    pub node_idx: usize,
    /// The value held by the node
    pub value: i32,
    /// Index of the first child, if any
    #[serde(rename = "first child", deserialize_with = "index_or_na")]
    pub first: Option<usize>,
    /// Index of the second child, if any
    #[serde(rename = "second child", deserialize_with = "index_or_na")]
    pub second: Option<usize>,
}

impl SerializedNode {
    fn children(&self) -> impl Iterator<Item = usize> {
        self.first.into_iter().chain(self.second)
    }
}

/// A tree described as a CSV table, one row per node.
///
/// The first line of the file must be a `#` followed by a JSON object
/// declaring `"kind": "binary_tree"`. The remaining lines are a CSV table
/// with the columns `node`, `value`, `first child` and `second child`.
#[derive(Debug)]
pub struct SerializedTree {
    nodes: Vec<SerializedNode>,
}

pub const ROOT_IDX: usize = 1;

impl SerializedTree {
    pub fn nodes(&self) -> &[SerializedNode] {
        &self.nodes
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        Self::validate_header(&path)?;

        let rdr = fs::File::open(path.as_ref())?;
        Self::from_reader(rdr)
    }

    /// Read the CSV table, skipping `#` comment lines. The header line is not
    /// checked here.
    pub fn from_reader(rdr: impl io::Read) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(rdr);

        let mut nodes = Vec::new();
        for result in rdr.deserialize() {
            let record: SerializedNode = result?;
            nodes.push(record);
        }

        debug!(rows = nodes.len(), "read tree definition");
        Ok(SerializedTree { nodes })
    }

    /// Build the [`BinaryTree`] described by this table.
    ///
    /// Every node other than the root must be the child of exactly one other
    /// node, and every node must be reachable from the root.
    pub fn to_tree(&self) -> Result<BinaryTree> {
        let mut index = HashMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if index.insert(node.node_idx, node).is_some() {
                return Err(eyre!("Node {} is defined more than once", node.node_idx));
            }
        }

        let root = index
            .get(&ROOT_IDX)
            .context("Malformed tree definition file. There is no root node (node 1).")?;

        let mut referenced = HashSet::new();
        for node in &self.nodes {
            for child in node.children() {
                if child == ROOT_IDX {
                    return Err(eyre!("Node {} uses the root as a child", node.node_idx));
                }
                if !index.contains_key(&child) {
                    return Err(eyre!("Node {} points to missing node {child}", node.node_idx));
                }
                if !referenced.insert(child) {
                    return Err(eyre!("Node {child} is the child of more than one node"));
                }
            }
        }

        let (tree, attached) = assemble(&index, root)?;
        if attached != self.nodes.len() {
            return Err(eyre!(
                "{} nodes are not reachable from the root",
                self.nodes.len() - attached
            ));
        }

        Ok(tree)
    }

    fn validate_header(path: impl AsRef<Path>) -> Result<()> {
        let rdr = BufReader::new(fs::File::open(path.as_ref())?);

        let header = rdr
            .lines()
            .take(1)
            .collect::<Result<Vec<_>, _>>()?
            .join(" ");

        let header = header
            .strip_prefix("#")
            .context("Malformed tree definition file. First line doesn't start with '#'.")?;

        let kind = &serde_json::from_str::<serde_json::Value>(header)
            .context("Malformed tree definition file. First line doesn't contain valid json")?
            ["kind"];

        let kind: TreeKind = serde_json::from_value(kind.clone())
            .context("Malformed tree definition file. The header doesn't declare a binary tree")?;
        debug!(?kind, "validated tree definition header");

        Ok(())
    }
}

/// Build the tree below `root` by walking the table in pre-order. Returns the
/// tree and the number of nodes it holds.
fn assemble(
    index: &HashMap<usize, &SerializedNode>,
    root: &SerializedNode,
) -> Result<(BinaryTree, usize)> {
    let mut builder = Builder::new();
    let mut stack = vec![root];
    let mut count = 0;

    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.second.map(|idx| index[&idx]));
        stack.extend(node.first.map(|idx| index[&idx]));

        let pending = BinaryTree::new(node.value);
        if let Some(tree) = builder.push(pending, node.first.is_some(), node.second.is_some()) {
            return Ok((tree, count));
        }
    }

    Err(eyre!(
        "Tree definition ended with {} nodes still missing children",
        builder.pending()
    ))
}

/// Deserialize a child index, returning `None` if the field is empty, `0` or
/// the literal "NA".
fn index_or_na<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = String::deserialize(deserializer)?;

    if s == "NA" || s.is_empty() {
        return Ok(None);
    }

    match s.parse::<usize>().map_err(<D::Error as de::Error>::custom)? {
        0 => Ok(None),
        idx => Ok(Some(idx)),
    }
}
