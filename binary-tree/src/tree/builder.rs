use alloc::{boxed::Box, vec::Vec};

use super::BinaryTree;

/// Assembles a [`BinaryTree`] from its nodes given in pre-order.
///
/// Every node comes with the two flags saying whether a first and a second
/// child follow it. Nodes whose slots are not all filled yet wait on a stack,
/// so the depth of the tree never turns into call depth.
#[derive(Default)]
pub struct Builder {
    stack: Vec<Pending>,
}

struct Pending {
    node: BinaryTree,
    first: bool,
    second: bool,
}

impl Pending {
    fn is_complete(&self) -> bool {
        !self.first && !self.second
    }

    /// Put `child` in the first slot still waiting for a subtree.
    fn adopt(mut self, child: BinaryTree) -> Self {
        let child = Some(Box::new(child));
        if self.first {
            self.first = false;
            self.node.first = child;
        } else {
            self.second = false;
            self.node.second = child;
        }
        self
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the next node in pre-order.
    ///
    /// Returns the whole tree once the node completing the root is pushed.
    /// Any children `node` already has are kept; its flagged slots must be
    /// empty.
    pub fn push(&mut self, node: BinaryTree, first: bool, second: bool) -> Option<BinaryTree> {
        let mut current = Pending {
            node,
            first,
            second,
        };

        // Pending nodes on the stack always have an open slot
        while current.is_complete() {
            let Some(parent) = self.stack.pop() else {
                return Some(current.node);
            };
            current = parent.adopt(current.node);
        }

        self.stack.push(current);
        None
    }

    /// Number of nodes still waiting for a child.
    pub fn pending(&self) -> usize {
        self.stack.len()
    }
}
