//! Depth-first pre-order traversal with per-node descent control.

use crate::node::{Node, Tree};
use std::convert::Infallible;

/// What the traversal should do after visiting a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Visit this node's children next.
    Continue,
    /// Leave this node's children out and carry on with its siblings.
    SkipChildren,
}

/// Visits every node of `tree` in pre-order. The root is at depth 1.
pub fn walk<F>(tree: &Tree, mut visitor: F)
where
    F: FnMut(&Node, usize) -> Visit,
{
    let result: Result<(), Infallible> = try_walk(tree, |node, depth| Ok(visitor(node, depth)));
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Like [`walk`], but the first error returned by `visitor` ends the walk.
pub fn try_walk<F, E>(tree: &Tree, mut visitor: F) -> Result<(), E>
where
    F: FnMut(&Node, usize) -> Result<Visit, E>,
{
    visit_node(tree.root(), 1, &mut visitor)
}

fn visit_node<F, E>(node: &Node, depth: usize, visitor: &mut F) -> Result<(), E>
where
    F: FnMut(&Node, usize) -> Result<Visit, E>,
{
    if visitor(node, depth)? == Visit::SkipChildren {
        return Ok(());
    }
    for child in node.children() {
        visit_node(child, depth + 1, visitor)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree {
        Tree::new(
            Node::new("root")
                .with_child(
                    Node::new("a")
                        .with_child(Node::new("a1"))
                        .with_child(Node::new("a2").with_child(Node::new("deep"))),
                )
                .with_child(Node::new("b").with_child(Node::new("b1"))),
        )
    }

    #[test]
    fn visits_pre_order_with_depth() {
        let mut seen = Vec::new();
        walk(&sample(), |node, depth| {
            seen.push((node.label().to_string(), depth));
            Visit::Continue
        });
        let expected = [
            ("root", 1),
            ("a", 2),
            ("a1", 3),
            ("a2", 3),
            ("deep", 4),
            ("b", 2),
            ("b1", 3),
        ];
        let expected: Vec<_> = expected.iter().map(|(l, d)| (l.to_string(), *d)).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn skip_children_only_prunes_that_subtree() {
        let mut seen = Vec::new();
        walk(&sample(), |node, _| {
            seen.push(node.label().to_string());
            if node.is("a") {
                Visit::SkipChildren
            } else {
                Visit::Continue
            }
        });
        assert_eq!(seen, ["root", "a", "b", "b1"]);
    }

    #[test]
    fn walk_is_restartable() {
        let tree = sample();
        let mut first = 0;
        walk(&tree, |_, _| {
            first += 1;
            Visit::Continue
        });
        let mut second = 0;
        walk(&tree, |_, _| {
            second += 1;
            Visit::Continue
        });
        assert_eq!(first, 7);
        assert_eq!(first, second);
    }

    #[test]
    fn try_walk_stops_on_error() {
        let mut seen = Vec::new();
        let result = try_walk(&sample(), |node, _| {
            seen.push(node.label().to_string());
            if node.is("a2") {
                Err(node.label().to_string())
            } else {
                Ok(Visit::Continue)
            }
        });
        assert_eq!(result, Err("a2".to_string()));
        assert_eq!(seen, ["root", "a", "a1", "a2"]);
    }
}
