//! Checking candidate paths against a tree without touching storage.

use crate::error::DirTreeError;
use crate::node::{Tree, label_matches};
use crate::walk::{Visit, try_walk};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Splits `candidate` into trimmed segments.
///
/// Empty segments from doubled, leading or trailing separators are collapsed,
/// `.` is dropped and `..` removes the previous segment. A whitespace-only
/// segment survives as an empty string so it fails validation.
pub fn normalize(candidate: &str) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    for raw in candidate.split('/') {
        if raw.is_empty() {
            continue;
        }
        match raw.trim() {
            "." => {}
            ".." => {
                segments.pop();
            }
            segment => segments.push(segment.to_string()),
        }
    }
    segments
}

/// Checks `candidate` against `tree` and returns its canonical form.
///
/// # Errors
///
/// * [`DirTreeError::InvalidRoot`] when the first segment is not the root label.
/// * [`DirTreeError::InvalidSegment`] when a segment names no child of the
///   node before it.
/// * [`DirTreeError::PathTooLong`] when the candidate continues past a leaf.
pub fn validate(tree: &Tree, candidate: &str) -> Result<String, DirTreeError> {
    let segments = normalize(candidate);
    let root = tree.root();
    let first = segments.first().map(String::as_str).unwrap_or_default();
    if !label_matches(root, first) {
        return Err(DirTreeError::InvalidRoot {
            segment: first.to_string(),
            root: root.label().to_string(),
        });
    }

    let mut validated = 0;
    try_walk(tree, |node, depth| {
        let Some(segment) = segments.get(depth - 1) else {
            return Ok(Visit::SkipChildren);
        };
        if !label_matches(node, segment) {
            return Ok(Visit::SkipChildren);
        }
        validated = validated.max(depth);
        let Some(next) = segments.get(depth) else {
            return Ok(Visit::SkipChildren);
        };
        if node.has_children() && !node.children().iter().any(|c| label_matches(c, next)) {
            return Err(DirTreeError::InvalidSegment {
                path: segments[..=depth].join("/"),
                prefix: segments[..depth].join("/"),
                alternatives: node
                    .children()
                    .iter()
                    .map(|c| c.label().to_string())
                    .collect(),
            });
        }
        Ok(Visit::Continue)
    })?;

    if validated < segments.len() {
        return Err(DirTreeError::PathTooLong {
            path: segments.join("/"),
            valid: segments[..validated].join("/"),
        });
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Validated {}", candidate);
    Ok(segments.join("/"))
}

/// Validates each candidate, in input order.
pub fn validate_all<S>(tree: &Tree, candidates: &[S]) -> Vec<Result<String, DirTreeError>>
where
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    let results = candidates
        .par_iter()
        .map(|candidate| validate(tree, candidate.as_ref()))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let results = candidates
        .iter()
        .map(|candidate| validate(tree, candidate.as_ref()))
        .collect();
    results
}

impl Tree {
    /// See [`validate`].
    pub fn validate(&self, candidate: &str) -> Result<String, DirTreeError> {
        validate(self, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    fn simple() -> Tree {
        Tree::new(Node::new("root").with_child(Node::new("a")))
    }

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
    fn normalize_collapses_separators_and_trims() {
        assert_eq!(normalize("root//a/"), ["root", "a"]);
        assert_eq!(normalize("/root/./a"), ["root", "a"]);
        assert_eq!(normalize(" root / dir_a /x/../1 "), ["root", "dir_a", "1"]);
        assert_eq!(normalize("root/ /a"), ["root", "", "a"]);
        assert!(normalize("").is_empty());
    }

    #[test]
    fn simple_tree_accepts_known_paths() {
        let tree = simple();
        assert_eq!(validate(&tree, "root").unwrap(), "root");
        assert_eq!(validate(&tree, "root/a").unwrap(), "root/a");
        assert_eq!(validate(&tree, " root / a ").unwrap(), "root/a");
    }

    #[test]
    fn unknown_root() {
        let err = validate(&simple(), "not-root/a").unwrap_err();
        match &err {
            DirTreeError::InvalidRoot { segment, root } => {
                assert_eq!(segment, "not-root");
                assert_eq!(root, "root");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            err.to_string(),
            "'not-root' is not valid.\nValid entries are:\n  root"
        );
        assert!(matches!(
            validate(&simple(), "").unwrap_err(),
            DirTreeError::InvalidRoot { .. }
        ));
    }

    #[test]
    fn unknown_segment_lists_alternatives() {
        let err = validate(&simple(), "root/b").unwrap_err();
        match &err {
            DirTreeError::InvalidSegment {
                path,
                prefix,
                alternatives,
            } => {
                assert_eq!(path, "root/b");
                assert_eq!(prefix, "root");
                assert_eq!(alternatives, &["a"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            err.to_string(),
            "'root/b' is not valid.\nValid entries are:\n  root/a"
        );
    }

    #[test]
    fn complex_tree_paths() {
        let tree = complex();
        for path in [
            "root",
            "root/dir_a",
            "root/dir_a/1",
            "root/dir_a/dir_b",
            "root/dir_a/dir_b/1",
            "root/dir_c/1",
            "root/dir_d",
        ] {
            assert_eq!(tree.validate(path).unwrap(), path);
        }
        let err = tree.validate("root/dir_a/foo").unwrap_err();
        assert_eq!(
            err.to_string(),
            "'root/dir_a/foo' is not valid.\nValid entries are:\n  root/dir_a/1\n  root/dir_a/dir_b"
        );
        assert!(matches!(
            tree.validate("root/dir_a/dir_b/2").unwrap_err(),
            DirTreeError::InvalidSegment { .. }
        ));
    }

    #[test]
    fn continuing_past_a_leaf_is_too_long() {
        let tree = complex();
        for path in ["root/dir_a/1/x", "root/dir_d/x", "root/dir_a/dir_b/1/x/y"] {
            match tree.validate(path).unwrap_err() {
                DirTreeError::PathTooLong { valid, .. } => {
                    assert!(path.starts_with(&valid));
                }
                other => panic!("unexpected error for {path}: {other}"),
            }
        }
    }

    #[test]
    fn blank_segment_is_rejected() {
        let tree = complex();
        assert!(matches!(
            tree.validate("root/ /dir_a").unwrap_err(),
            DirTreeError::InvalidSegment { .. }
        ));
        assert!(matches!(
            tree.validate("root/dir_d/ ").unwrap_err(),
            DirTreeError::PathTooLong { .. }
        ));
    }

    #[test]
    fn every_node_path_validates() {
        let tree = complex();
        let mut stack: Vec<String> = Vec::new();
        let mut paths = Vec::new();
        crate::walk::walk(&tree, |node, depth| {
            stack.truncate(depth - 1);
            stack.push(node.label().to_string());
            paths.push(stack.join("/"));
            Visit::Continue
        });
        for (path, result) in paths.iter().zip(validate_all(&tree, &paths)) {
            assert_eq!(&result.unwrap(), path);
        }
    }

    #[test]
    fn validate_all_keeps_order() {
        let tree = simple();
        let results = validate_all(&tree, &["root/a", "nope", "root/a/b"]);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(DirTreeError::InvalidRoot { .. })));
        assert!(matches!(results[2], Err(DirTreeError::PathTooLong { .. })));
    }
}
