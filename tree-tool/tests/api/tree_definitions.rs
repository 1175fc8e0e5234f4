use color_eyre::Result;

use crate::helpers::{get_tree, values};

#[test]
fn sample_definition_builds_expected_tree() -> Result<()> {
    let tree = get_tree("./tests/test-trees/sample.csv")?;

    assert_eq!(tree.size(), 4);
    assert_eq!(tree.leaf_count(), 2);
    assert_eq!(tree.height(), 3);
    assert_eq!(values(&tree), [10, 9, 7, 8]);
    assert!(!tree.has_error());

    Ok(())
}

#[test]
fn lopsided_definition_builds_expected_tree() -> Result<()> {
    let tree = get_tree("./tests/test-trees/lopsided.csv")?;

    assert_eq!(tree.size(), 7);
    assert_eq!(tree.leaf_count(), 3);
    assert_eq!(tree.height(), 4);
    assert_eq!(values(&tree), [1, 2, 4, 5, -7, 3, 6]);
    assert!(tree.contains(-7));

    Ok(())
}

#[test]
fn definition_rejects_wrong_kind() {
    assert!(get_tree("./tests/test-trees/wrong_kind.csv").is_err());
}

#[test]
fn definition_rejects_missing_json_header() {
    assert!(get_tree("./tests/test-trees/no_header.csv").is_err());
}

#[test]
fn definition_rejects_missing_file() {
    assert!(get_tree("./tests/test-trees/does_not_exist.csv").is_err());
}

#[test]
fn definition_rejects_dangling_child() {
    let err = get_tree("./tests/test-trees/dangling.csv").unwrap_err();
    assert!(err.to_string().contains("missing node 2"));
}

#[test]
fn definition_rejects_shared_child() {
    let err = get_tree("./tests/test-trees/shared_child.csv").unwrap_err();
    assert!(err.to_string().contains("more than one node"));
}

#[test]
fn definition_rejects_unreachable_nodes() {
    let err = get_tree("./tests/test-trees/orphan.csv").unwrap_err();
    assert!(err.to_string().contains("1 nodes are not reachable"));
}

#[test]
fn definition_rejects_missing_root() {
    assert!(get_tree("./tests/test-trees/no_root.csv").is_err());
}
