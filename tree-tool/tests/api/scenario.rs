use binary_tree::{BinaryTree, Error};
use color_eyre::Result;

use crate::helpers::scratch_file;

/// Walks through every operation on a small tree, saving and reloading it
/// along the way.
#[test]
fn build_save_load_and_mutate() -> Result<()> {
    let (_dir, path) = scratch_file("test.bin")?;

    let mut tree = BinaryTree::new(10);
    tree.add_first_child(9)?;
    tree.add_second_child(8)?;
    tree.first_child().unwrap().add_second_child(7)?;

    assert_eq!(tree.size(), 4);
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.leaf_count(), 2);
    assert_eq!(tree.first_child().map(|n| n.value()), Some(9));

    tree.save(&path)?;
    let mut loaded = BinaryTree::load(&path);
    assert!(!loaded.has_error());
    assert_eq!(loaded.first_child().map(|n| n.value()), Some(9));
    assert_eq!(loaded.size(), 4);
    assert_eq!(loaded.height(), 3);
    assert_eq!(loaded.leaf_count(), 2);

    loaded.remove_second_child()?;
    assert!(!loaded.contains(8));
    assert!(!loaded.has_error());

    loaded.add_second_child(6)?;
    assert!(!loaded.contains(8));
    assert!(loaded.contains(6));
    assert!(!loaded.has_error());

    // Node 7 has no first child
    let first = loaded.first_child().unwrap();
    let grandchild = first.second_child().unwrap();
    assert_eq!(grandchild.value(), 7);
    assert_eq!(grandchild.remove_first_child(), Err(Error::NoFirstChildToRemove));
    assert!(loaded.has_error());
    assert_eq!(loaded.error_text(), "no first child to remove");

    // Clearing the first subtree is enough, the fault sits on node 7
    loaded.first_mut().unwrap().clear_errors();
    assert!(!loaded.has_error());
    assert_eq!(loaded.error_text(), "");

    Ok(())
}

#[test]
fn faults_stick_until_cleared() -> Result<()> {
    let mut tree = BinaryTree::new(1);
    tree.add_first_child(2)?;

    assert_eq!(tree.add_first_child(3), Err(Error::FirstChildExists));
    assert_eq!(tree.first().map(BinaryTree::value), Some(2));

    // Later successes leave the fault in place
    tree.add_second_child(4)?;
    tree.set_value(5);
    assert!(tree.has_error());
    assert_eq!(tree.error_text(), "first child already exists");

    tree.clear_errors();
    assert!(!tree.has_error());
    assert!(tree.iter().all(|n| !n.has_error()));

    Ok(())
}

#[test]
fn reading_garbage_reports_fault() -> Result<()> {
    let (_dir, path) = scratch_file("garbage.bin")?;
    std::fs::write(&path, b"definitely not a tree")?;

    let mut tree = BinaryTree::load(&path);
    assert!(tree.has_error());
    assert_eq!(tree.value(), 0);
    assert!(tree.is_leaf());
    assert!(!tree.error_text().is_empty());

    Ok(())
}
