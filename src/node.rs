//! The tree model: labeled nodes with ordered children, and the tree that owns them.

use crate::walk::{Visit, walk};
use std::fmt;

/// A labeled vertex owning an ordered list of children.
///
/// Children keep insertion order, which is also listing and document order.
/// Nodes are only compared by label, through [`label_matches`].
#[derive(Debug, Clone)]
pub struct Node {
    label: String,
    children: Vec<Node>,
}

impl Node {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Appends `child` and returns a mutable reference to it.
    pub fn add_child(&mut self, child: Node) -> &mut Node {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Builder-style [`Node::add_child`].
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Shorthand for `label_matches(self, expected)`.
    pub fn is(&self, expected: &str) -> bool {
        label_matches(self, expected)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Whether `node` is the entry named `expected`. Children are never compared.
pub fn label_matches(node: &Node, expected: &str) -> bool {
    node.label == expected
}

/// A root node plus the maximum depth recorded while it was built.
///
/// The root alone has depth 1. A `Tree` is read-only once constructed.
#[derive(Debug, Clone)]
pub struct Tree {
    root: Node,
    depth: usize,
}

impl Tree {
    /// Wraps an already assembled node hierarchy, measuring its depth once.
    pub fn new(root: Node) -> Self {
        let mut tree = Self { root, depth: 1 };
        let mut deepest = 1;
        walk(&tree, |_, depth| {
            deepest = deepest.max(depth);
            Visit::Continue
        });
        tree.depth = deepest;
        tree
    }

    /// For builders that track depth during construction.
    pub(crate) fn with_depth(root: Node, depth: usize) -> Self {
        Self { root, depth }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}
