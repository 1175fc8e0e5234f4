use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use tracing::{debug, trace};

use crate::{Error, fault::Fault};

mod builder;
pub mod deserialize;

#[cfg(feature = "std")]
pub mod serialize;

pub use builder::Builder;

/// A node of a binary tree, and by extension the tree rooted at it.
///
/// Every node holds an `i32`, up to two exclusively owned children and a
/// sticky [`Fault`]. The two child slots are ordered but carry no meaning
/// beyond that: this is not a search tree.
///
/// Operations that can fail record the failure on the node they were called
/// on and also return it. The recorded faults can be polled afterwards with
/// [`has_error`](Self::has_error) and [`error_text`](Self::error_text), which
/// look at the whole subtree.
///
/// Every walk over the tree uses an explicit stack, dropping included, so
/// arbitrarily deep trees are fine.
pub struct BinaryTree {
    value: i32,
    first: Option<Box<BinaryTree>>,
    second: Option<Box<BinaryTree>>,
    fault: Fault,
}

impl BinaryTree {
    /// Create a single node with no children and no fault.
    pub fn new(value: i32) -> Self {
        Self {
            value,
            first: None,
            second: None,
            fault: Fault::default(),
        }
    }

    /// Release this node and its whole subtree, first subtree before second.
    pub fn destroy(mut self) {
        drop(self.first.take());
        drop(self.second.take());
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    #[inline]
    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }

    /// Borrow the first child without touching any fault state.
    #[inline]
    pub fn first(&self) -> Option<&BinaryTree> {
        self.first.as_deref()
    }

    /// Borrow the second child without touching any fault state.
    #[inline]
    pub fn second(&self) -> Option<&BinaryTree> {
        self.second.as_deref()
    }

    /// Mutably borrow the first child without touching any fault state.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut BinaryTree> {
        self.first.as_deref_mut()
    }

    /// Mutably borrow the second child without touching any fault state.
    #[inline]
    pub fn second_mut(&mut self) -> Option<&mut BinaryTree> {
        self.second.as_deref_mut()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Number of nodes without any child. A node with a single child is not
    /// a leaf.
    pub fn leaf_count(&self) -> usize {
        self.iter().filter(|n| n.is_leaf()).count()
    }

    /// Number of nodes on the longest path from this node down to a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = alloc::vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.first().map(|n| (n, depth + 1)));
            stack.extend(node.second().map(|n| (n, depth + 1)));
        }
        height
    }

    pub fn contains(&self, value: i32) -> bool {
        self.iter().any(|n| n.value == value)
    }

    /// Iterate over every node in pre-order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: alloc::vec![self],
        }
    }

    /// Get the first child.
    ///
    /// Clears every fault in this subtree first. If there is no first child,
    /// records [`Error::NoFirstChild`] on this node.
    pub fn first_child(&mut self) -> Option<&mut BinaryTree> {
        self.clear_errors();
        if self.first.is_none() {
            self.record(Error::NoFirstChild);
        }
        self.first.as_deref_mut()
    }

    /// Get the second child.
    ///
    /// Clears every fault in this subtree first. If there is no second child,
    /// records [`Error::NoSecondChild`] on this node.
    pub fn second_child(&mut self) -> Option<&mut BinaryTree> {
        self.clear_errors();
        if self.second.is_none() {
            self.record(Error::NoSecondChild);
        }
        self.second.as_deref_mut()
    }

    pub fn add_first_child(&mut self, value: i32) -> Result<(), Error> {
        if self.first.is_some() {
            return Err(self.record(Error::FirstChildExists));
        }
        trace!(parent = self.value, value, "adding first child");
        self.first = Some(Box::new(BinaryTree::new(value)));
        Ok(())
    }

    pub fn add_second_child(&mut self, value: i32) -> Result<(), Error> {
        if self.second.is_some() {
            return Err(self.record(Error::SecondChildExists));
        }
        trace!(parent = self.value, value, "adding second child");
        self.second = Some(Box::new(BinaryTree::new(value)));
        Ok(())
    }

    /// Drop the first child together with its subtree.
    pub fn remove_first_child(&mut self) -> Result<(), Error> {
        match self.first.take() {
            Some(child) => {
                trace!(parent = self.value, removed = child.size(), "removing first child");
                child.destroy();
                Ok(())
            }
            None => Err(self.record(Error::NoFirstChildToRemove)),
        }
    }

    /// Drop the second child together with its subtree.
    pub fn remove_second_child(&mut self) -> Result<(), Error> {
        match self.second.take() {
            Some(child) => {
                trace!(parent = self.value, removed = child.size(), "removing second child");
                child.destroy();
                Ok(())
            }
            None => Err(self.record(Error::NoSecondChildToRemove)),
        }
    }

    /// Whether this node or any node below it has a fault recorded.
    ///
    /// Checks this node, then the first subtree, then the second one, and
    /// stops at the first fault found.
    pub fn has_error(&self) -> bool {
        self.iter().any(|n| n.fault.is_raised())
    }

    /// The message of the fault reported by [`has_error`](Self::has_error).
    ///
    /// A fault on this node masks any fault below it. Otherwise the first
    /// subtree is searched before the second one, which makes the reported
    /// fault the first raised one in pre-order. If there is no fault at all
    /// this node's stored message is cleared and the empty string returned.
    pub fn error_text(&mut self) -> &str {
        if !self.has_error() {
            self.fault.clear_message();
            return self.fault.message();
        }

        self.iter()
            .find(|n| n.fault.is_raised())
            .map_or("", |n| n.fault.message())
    }

    /// Record a fault with an arbitrary message on this node only.
    pub fn record_error(&mut self, message: &str) {
        debug!(value = self.value, reason = message, "fault recorded");
        self.fault.raise(message);
    }

    /// Lower the fault flag on every node of this subtree.
    pub fn clear_errors(&mut self) {
        let mut stack = alloc::vec![self];
        while let Some(node) = stack.pop() {
            node.fault.lower();
            stack.extend(node.first.as_deref_mut());
            stack.extend(node.second.as_deref_mut());
        }
    }

    /// Record `error` on this node and hand it back for returning.
    pub(crate) fn record(&mut self, error: Error) -> Error {
        debug!(value = self.value, %error, "fault recorded");
        self.fault.raise_with(error);
        error
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = alloc::vec![(self, 0, "root:   ")];
        while let Some((node, depth, slot)) = stack.pop() {
            write!(f, "{:width$}{slot}{}", "", node.value, width = depth * 4)?;
            if node.fault.is_raised() {
                write!(f, " (error: {})", node.fault.message())?;
            }
            writeln!(f)?;

            stack.extend(node.second().map(|n| (n, depth + 1, "second: ")));
            stack.extend(node.first().map(|n| (n, depth + 1, "first:  ")));
        }
        Ok(())
    }
}

impl Drop for BinaryTree {
    fn drop(&mut self) {
        if self.is_leaf() {
            return;
        }

        // Detach every subtree before its box is freed, so no drop recurses
        let mut stack = Vec::new();
        stack.extend(self.second.take());
        stack.extend(self.first.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.second.take());
            stack.extend(node.first.take());
        }
    }
}

impl fmt::Debug for BinaryTree {
    /// Lists the nodes in pre-order, each with its child flags.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(NodeDebug)).finish()
    }
}

struct NodeDebug<'a>(&'a BinaryTree);

impl fmt::Debug for NodeDebug<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.0.value)
            .field("first", &self.0.first.is_some())
            .field("second", &self.0.second.is_some())
            .field("fault", &self.0.fault)
            .finish()
    }
}

impl fmt::Display for BinaryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Binary tree: size {}, {} leaves, height {}\n------------",
            self.size(),
            self.leaf_count(),
            self.height()
        )?;
        self.fmt_indented(f)?;
        writeln!(f, "------------")?;
        Ok(())
    }
}

/// Pre-order iterator over the nodes of a [`BinaryTree`].
pub struct Iter<'a> {
    stack: Vec<&'a BinaryTree>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a BinaryTree;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Second pushed first so the first subtree comes out first
        if let Some(second) = node.second() {
            self.stack.push(second);
        }
        if let Some(first) = node.first() {
            self.stack.push(first);
        }
        Some(node)
    }
}

impl<'a> IntoIterator for &'a BinaryTree {
    type Item = &'a BinaryTree;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
