//! Lazy, restartable in-order traversal of a binary tree.
//!
//! The Python original walks the tree with a recursive generator:
//!
//! ```python
//! def in_order_traversal(self, node):
//!     if node:
//!         yield from self.in_order_traversal(node.left)
//!         yield node.val
//!         yield from self.in_order_traversal(node.right)
//! ```
//!
//! Rust has no resumable generators in stable std, so the same ordering is
//! produced by an explicit work stack: push the left spine, pop a node,
//! yield its value, then descend into its right child. The output is
//! identical — left subtree, node, right subtree — and the traversal stays
//! lazy: nothing beyond the current spine is materialized.
//!
//! The traversal borrows the immutable tree, so it is restartable for
//! free: every [`BinaryTree::iter`] call (or `&tree` in a `for` loop)
//! derives a fresh cursor from the structure, not from saved cursor state.

use crate::producer::{AcquireError, Producer};

/// A node with a value and optional left/right children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub value: T,
    pub left: Option<Box<TreeNode<T>>>,
    pub right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    /// Creates a childless node holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
        }
    }
}

/// A binary tree traversed in-order, lazily.
///
/// # Example
///
/// ```
/// use lazyseq::{BinaryTree, TreeNode};
///
/// let mut root = TreeNode::new(1);
/// root.left = Some(Box::new(TreeNode::new(2)));
/// root.right = Some(Box::new(TreeNode::new(3)));
/// let tree = BinaryTree::new(root);
///
/// let values: Vec<i32> = tree.iter().copied().collect();
/// assert_eq!(values, vec![2, 1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BinaryTree<T> {
    root: Option<Box<TreeNode<T>>>,
}

impl<T> BinaryTree<T> {
    /// Creates a tree rooted at `root`.
    #[must_use]
    pub fn new(root: TreeNode<T>) -> Self {
        BinaryTree {
            root: Some(Box::new(root)),
        }
    }

    /// Creates a tree with no nodes; its traversal exhausts immediately.
    #[must_use]
    pub fn empty() -> Self {
        BinaryTree { root: None }
    }

    /// Starts a fresh in-order traversal over borrowed values.
    #[must_use]
    pub fn iter(&self) -> InOrder<'_, T> {
        InOrder {
            stack: Vec::new(),
            current: self.root.as_deref(),
        }
    }
}

impl<'a, T> IntoIterator for &'a BinaryTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> Producer for &'a BinaryTree<T> {
    type Item = &'a T;
    type Cursor = InOrder<'a, T>;

    fn start(self) -> Result<Self::Cursor, AcquireError> {
        Ok(self.iter())
    }
}

/// Stack-based in-order cursor.
///
/// The stack holds the unvisited left spine; `current` is the subtree
/// still to be descended into. Memory use is bounded by tree depth.
#[derive(Debug)]
pub struct InOrder<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
    current: Option<&'a TreeNode<T>>,
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.current = node.right.as_deref();
        Some(&node.value)
    }
}
