/*
Rendering of binary search trees with termtree.

Each node becomes a `Tree<String>` whose leaves are its existing children,
left before right. Children are tagged with `L:`/`R:` so a lone right child is
not mistaken for a left one.
 */
use std::fmt::Display;

use termtree::Tree;
use tracing::instrument;

use crate::domain::bst::{BinarySearchTree, TreeNode};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: Display> TreeNodeConvert for TreeNode<T> {
    #[instrument(level = "trace", skip_all)]
    fn to_tree_string(&self) -> Tree<String> {
        build_tree(self, self.val().to_string())
    }
}

impl<T: Display> TreeNodeConvert for BinarySearchTree<T> {
    fn to_tree_string(&self) -> Tree<String> {
        match self.root() {
            Some(root) => root.to_tree_string(),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

// Pre-order with an explicit stack, then fold back to front: every node's
// subtrees are complete before it is attached to its parent.
fn build_tree<T: Display>(root: &TreeNode<T>, label: String) -> Tree<String> {
    let mut order: Vec<(usize, Tree<String>)> = Vec::new(); // (parent slot, tree)
    let mut stack = vec![(root, label, 0)];

    while let Some((node, label, parent)) = stack.pop() {
        let slot = order.len();
        order.push((parent, Tree::new(label)));
        // right is pushed first so the left subtree is visited first
        if let Some(right) = node.right() {
            stack.push((right, format!("R: {}", right.val()), slot));
        }
        if let Some(left) = node.left() {
            stack.push((left, format!("L: {}", left.val()), slot));
        }
    }

    // right subtrees are folded before left ones, hence insert at the front
    while order.len() > 1 {
        if let Some((parent, tree)) = order.pop() {
            order[parent].1.leaves.insert(0, tree);
        }
    }
    let (_, tree) = order.swap_remove(0);
    tree
}
