pub mod logging;
pub mod serialized_tree;
pub mod write_tree;
