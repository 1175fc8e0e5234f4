use binary_tree::BinaryTree;
use color_eyre::Result;
use tree_tool::write_tree::write_tree;

use crate::helpers::{get_tree, scratch_file, shape, values};

/// A chain of `len` nodes hanging off first children when `first` is set,
/// second children otherwise.
fn chain(len: i32, first: bool) -> Result<BinaryTree> {
    let mut root = BinaryTree::new(0);
    let mut node = &mut root;
    for value in 1..len {
        node = if first {
            node.add_first_child(value)?;
            node.first_child().unwrap()
        } else {
            node.add_second_child(value)?;
            node.second_child().unwrap()
        };
    }
    Ok(root)
}

/// A complete tree of the given height, values numbered in pre-order.
fn complete(height: usize) -> Result<BinaryTree> {
    fn grow(node: &mut BinaryTree, height: usize, next: &mut i32) -> Result<()> {
        if height <= 1 {
            return Ok(());
        }
        *next += 1;
        node.add_first_child(*next)?;
        grow(node.first_child().unwrap(), height - 1, next)?;
        *next += 1;
        node.add_second_child(*next)?;
        grow(node.second_child().unwrap(), height - 1, next)?;
        Ok(())
    }

    let mut root = BinaryTree::new(0);
    grow(&mut root, height, &mut 0)?;
    Ok(root)
}

fn assert_round_trips(mut tree: BinaryTree) -> Result<()> {
    let (_dir, path) = scratch_file("tree.bin")?;
    tree.save(&path)?;

    let loaded = BinaryTree::load(&path);
    assert!(!loaded.has_error());
    assert_eq!(loaded.size(), tree.size());
    assert_eq!(loaded.leaf_count(), tree.leaf_count());
    assert_eq!(loaded.height(), tree.height());
    assert_eq!(values(&loaded), values(&tree));
    assert_eq!(shape(&loaded), shape(&tree));

    let from_bytes = BinaryTree::from_bytes(&tree.to_bytes())?;
    assert_eq!(values(&from_bytes), values(&tree));

    Ok(())
}

#[test]
fn single_node_round_trips() -> Result<()> {
    assert_round_trips(BinaryTree::new(-1))
}

#[test]
fn chains_round_trip() -> Result<()> {
    let left = chain(50, true)?;
    assert_eq!(left.height(), 50);
    assert_eq!(left.leaf_count(), 1);
    assert_round_trips(left)?;

    let right = chain(50, false)?;
    assert_eq!(right.size(), 50);
    assert_round_trips(right)
}

#[test]
fn complete_trees_round_trip() -> Result<()> {
    for height in 1..=6 {
        let tree = complete(height)?;
        assert_eq!(tree.size(), (1 << height) - 1);
        assert_eq!(tree.leaf_count(), 1 << (height - 1));
        assert_eq!(tree.height(), height);
        assert_round_trips(tree)?;
    }
    Ok(())
}

#[test]
fn written_definition_loads_back() -> Result<()> {
    let (_dir, path) = scratch_file("lopsided.bin")?;

    let written = write_tree("./tests/test-trees/lopsided.csv", &path)?;
    let expected = get_tree("./tests/test-trees/lopsided.csv")?;
    let loaded = BinaryTree::try_load(&path)?;

    assert_eq!(values(&written), values(&expected));
    assert_eq!(values(&loaded), values(&expected));
    assert_eq!(shape(&loaded), shape(&expected));
    assert_eq!(
        std::fs::metadata(&path)?.len(),
        (expected.size() * binary_tree::record::Record::SIZE) as u64
    );

    Ok(())
}

#[test]
fn writing_to_missing_directory_fails() -> Result<()> {
    let (_dir, path) = scratch_file("missing/tree.bin")?;
    assert!(write_tree("./tests/test-trees/sample.csv", &path).is_err());
    Ok(())
}
