//! Persisted form of a tree: nested elements, one `value` attribute each.
//!
//! The concrete syntax is JSON:
//!
//! ```json
//! {"tree": {"value": "root", "children": [{"value": "a"}]}}
//! ```

use crate::error::DirTreeError;
use crate::node::{Node, Tree};
use crate::walk::{Visit, walk};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One element of the document, standing for one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

/// The synthetic wrapper holding the root element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub tree: Element,
}

/// Builds the document for `tree`, nesting elements in traversal order.
pub fn encode(tree: &Tree) -> Document {
    // open[d] is the element for the ancestor at depth d + 1.
    let mut open: Vec<Element> = Vec::new();
    walk(tree, |node, depth| {
        close_until(&mut open, depth - 1);
        open.push(Element {
            value: node.label().to_string(),
            children: Vec::with_capacity(node.children().len()),
        });
        Visit::Continue
    });
    close_until(&mut open, 1);
    let tree = open.pop().unwrap_or_else(|| Element {
        value: tree.root().label().to_string(),
        children: Vec::new(),
    });
    Document { tree }
}

fn close_until(open: &mut Vec<Element>, len: usize) {
    while open.len() > len.max(1) {
        let Some(done) = open.pop() else { break };
        if let Some(parent) = open.last_mut() {
            parent.children.push(done);
        }
    }
}

/// Rebuilds a tree from `document`, recording its deepest nesting as the depth.
pub fn decode(document: Document) -> Tree {
    let mut depth = 0;
    let root = element_to_node(document.tree, 1, &mut depth);
    Tree::with_depth(root, depth)
}

fn element_to_node(element: Element, level: usize, deepest: &mut usize) -> Node {
    *deepest = (*deepest).max(level);
    let mut node = Node::new(element.value);
    for child in element.children {
        node.add_child(element_to_node(child, level + 1, deepest));
    }
    node
}

pub fn to_json(tree: &Tree, pretty: bool) -> Result<String, DirTreeError> {
    let document = encode(tree);
    let text = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(text)
}

pub fn from_json(text: &str) -> Result<Tree, DirTreeError> {
    let document: Document = serde_json::from_str(text)?;
    Ok(decode(document))
}

pub fn write_document(
    tree: &Tree,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), DirTreeError> {
    let text = to_json(tree, pretty)?;
    fs::write(&path, text).map_err(|e| DirTreeError::io(path.as_ref(), e))?;
    Ok(())
}

pub fn read_document(path: impl AsRef<Path>) -> Result<Tree, DirTreeError> {
    let text = fs::read_to_string(&path).map_err(|e| DirTreeError::io(path.as_ref(), e))?;
    #[cfg(feature = "logging")]
    tracing::debug!("Read document {} ({} bytes)", path.as_ref().display(), text.len());
    from_json(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complex() -> Tree {
        Tree::new(
            Node::new("root")
                .with_child(
                    Node::new("dir_a")
                        .with_child(Node::new("1"))
                        .with_child(Node::new("dir_b").with_child(Node::new("1"))),
                )
                .with_child(Node::new("dir_c").with_child(Node::new("1")))
                .with_child(Node::new("dir_d")),
        )
    }

    #[test]
    fn encode_nests_in_document_order() {
        let document = encode(&complex());
        assert_eq!(document.tree.value, "root");
        let names: Vec<_> = document.tree.children.iter().map(|e| e.value.as_str()).collect();
        assert_eq!(names, ["dir_a", "dir_c", "dir_d"]);
        let dir_a = &document.tree.children[0];
        assert_eq!(dir_a.children[1].value, "dir_b");
        assert_eq!(dir_a.children[1].children[0].value, "1");
        assert!(document.tree.children[2].children.is_empty());
    }

    #[test]
    fn encode_lone_root() {
        let document = encode(&Tree::new(Node::new("only")));
        assert_eq!(
            document,
            Document {
                tree: Element {
                    value: "only".into(),
                    children: Vec::new()
                }
            }
        );
    }

    #[test]
    fn json_round_trip_renders_identically() {
        let tree = complex();
        let restored = from_json(&to_json(&tree, true).unwrap()).unwrap();
        assert_eq!(restored.as_text(), tree.as_text());
        assert_eq!(restored.depth(), 4);
    }

    #[test]
    fn compact_json_omits_empty_children() {
        let tree = Tree::new(Node::new("root").with_child(Node::new("a")));
        assert_eq!(
            to_json(&tree, false).unwrap(),
            r#"{"tree":{"value":"root","children":[{"value":"a"}]}}"#
        );
    }

    #[test]
    fn decode_records_nesting_depth() {
        let tree = from_json(
            r#"{"tree": {"value": "r", "children": [
                {"value": "a", "children": [{"value": "b"}]},
                {"value": "c"}
            ]}}"#,
        )
        .unwrap();
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.root().children()[1].label(), "c");
    }

    #[test]
    fn malformed_document_is_reported() {
        for text in [r#"{"tree": {"value": "r", "children": [}"#, r#"{"root": {}}"#, ""] {
            let err = from_json(text).unwrap_err();
            assert!(matches!(err, DirTreeError::MalformedDocument(_)));
        }
    }
}
