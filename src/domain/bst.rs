//! Binary search tree with an O(height) in-order cursor.
//!
//! Children are exclusively owned (`Box`). The cursor never owns nodes: its
//! stack holds shared references into the tree, so the tree is frozen while
//! any cursor over it is alive.

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, instrument, warn};

use crate::domain::cursor::Cursor;
use crate::domain::error::{DomainError, DomainResult};

type Link<T> = Option<Box<TreeNode<T>>>;

/// Node of a binary search tree.
///
/// Invariant: every value in `left` is smaller than `val`, every value in
/// `right` is greater. Duplicates are rejected on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    val: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> TreeNode<T> {
    pub fn new(val: T) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    pub fn val(&self) -> &T {
        &self.val
    }

    pub fn left(&self) -> Option<&TreeNode<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode<T>> {
        self.right.as_deref()
    }

    /// In-order cursor starting at this node.
    pub fn iterator(&self) -> BstIterator<'_, T> {
        BstIterator::new(Some(self))
    }

    /// Number of nodes on the longest root-to-leaf path.
    ///
    /// Uses an explicit stack, so skewed trees do not recurse `n` deep.
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 1)]; // (node, depth)

        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for child in [node.left(), node.right()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }

        max_depth
    }

    /// Number of nodes in this subtree.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        count
    }
}

impl<T: Ord + fmt::Debug> TreeNode<T> {
    /// Insert `val` below this node, keeping the search-tree ordering.
    ///
    /// # Errors
    /// [`DomainError::DuplicateValue`] if `val` is already present; the tree
    /// is left unchanged.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, val: T) -> DomainResult<()> {
        let mut link = match val.cmp(&self.val) {
            Ordering::Less => &mut self.left,
            Ordering::Greater => &mut self.right,
            Ordering::Equal => return Err(duplicate(&val)),
        };

        while let Some(node) = link {
            link = match val.cmp(&node.val) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Err(duplicate(&val)),
            };
        }

        debug!("insert: attaching leaf {:?}", val);
        *link = Some(Box::new(TreeNode::new(val)));
        Ok(())
    }
}

fn duplicate<T: fmt::Debug>(val: &T) -> DomainError {
    warn!("insert: rejecting duplicate value {:?}", val);
    DomainError::DuplicateValue {
        value: format!("{:?}", val),
    }
}

// Unlink iteratively: the derived drop glue would recurse once per level.
impl<T> Drop for TreeNode<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode<T>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Owning handle for a possibly empty tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinarySearchTree<T> {
    root: Link<T>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.root().map_or(0, TreeNode::len)
    }

    /// Height in nodes; 0 for the empty tree.
    pub fn height(&self) -> usize {
        self.root().map_or(0, TreeNode::height)
    }

    /// In-order cursor over the whole tree.
    pub fn iterator(&self) -> BstIterator<'_, T> {
        BstIterator::new(self.root())
    }
}

impl<T: Ord + fmt::Debug> BinarySearchTree<T> {
    pub fn insert(&mut self, val: T) -> DomainResult<()> {
        match self.root.as_mut() {
            Some(root) => root.insert(val),
            None => {
                debug!("insert: planting root {:?}", val);
                self.root = Some(Box::new(TreeNode::new(val)));
                Ok(())
            }
        }
    }

    /// Build a tree by inserting `values` in order.
    ///
    /// # Errors
    /// Fails on the first duplicate value.
    pub fn from_values<I>(values: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        for val in values {
            tree.insert(val)?;
        }
        Ok(tree)
    }
}

/// In-order cursor using a stack of at most `height` node references.
///
/// The top of the stack is always the smallest value not yet produced.
#[derive(Debug, Clone)]
pub struct BstIterator<'a, T> {
    path_stack: Vec<&'a TreeNode<T>>,
    peak_depth: usize,
}

impl<'a, T> BstIterator<'a, T> {
    #[instrument(level = "trace", skip_all)]
    pub fn new(root: Option<&'a TreeNode<T>>) -> Self {
        let mut iter = Self {
            path_stack: Vec::new(),
            peak_depth: 0,
        };
        iter.push_path_to_next_smallest(root);
        iter
    }

    /// Current number of pending nodes on the stack.
    pub fn depth(&self) -> usize {
        self.path_stack.len()
    }

    /// Largest stack depth observed so far.
    pub fn peak_depth(&self) -> usize {
        self.peak_depth
    }

    fn push_path_to_next_smallest(&mut self, mut node: Option<&'a TreeNode<T>>) {
        while let Some(current) = node {
            self.path_stack.push(current);
            node = current.left();
        }
        self.peak_depth = self.peak_depth.max(self.path_stack.len());
    }
}

impl<'a, T> Cursor for BstIterator<'a, T> {
    type Item = &'a T;

    fn has_next(&self) -> bool {
        !self.path_stack.is_empty()
    }

    #[instrument(level = "trace", skip(self), fields(depth = self.path_stack.len()))]
    fn next(&mut self) -> DomainResult<&'a T> {
        let next = self.path_stack.pop().ok_or(DomainError::Exhausted)?;
        self.push_path_to_next_smallest(next.right());
        Ok(next.val())
    }
}
