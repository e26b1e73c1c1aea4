//! Output formatting for directory trees.
//!
//! Provides functions to format a [`Tree`] as ASCII art, as ASCII art inside
//! a Markdown code block, or as the JSON document.

use crate::document;
use crate::{DirTreeError, Tree};
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the tree into a string.
pub fn format_tree(tree: &Tree, format: OutputFormat, pretty: bool) -> Result<String, DirTreeError> {
    match format {
        OutputFormat::Text => Ok(tree.as_text()),
        OutputFormat::Markdown => Ok(format_markdown(tree)),
        OutputFormat::Json => document::to_json(tree, pretty),
    }
}

/// Writes the formatted tree to a file.
pub fn write_tree_to_file(
    tree: &Tree,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), DirTreeError> {
    let mut content = format_tree(tree, format, pretty)?;
    if !content.ends_with('\n') {
        content.push('\n');
    }
    fs::write(&path, content).map_err(|e| DirTreeError::io(path.as_ref(), e))?;
    Ok(())
}

fn format_markdown(tree: &Tree) -> String {
    let text = tree.as_text();
    let mut out = String::with_capacity(text.len() + 32);
    out.push_str(&format!("## {}\n\n```text\n", tree.root().label()));
    out.push_str(&text);
    out.push_str("\n```\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Node;

    #[test]
    fn markdown_wraps_the_drawing() {
        let tree = Tree::new(Node::new("root").with_child(Node::new("a")));
        let out = format_tree(&tree, OutputFormat::Markdown, false).unwrap();
        assert_eq!(
            out,
            "## root\n\n```text\n+ root +\n       |\n       + a\n```\n"
        );
    }

    #[test]
    fn json_is_the_document() {
        let tree = Tree::new(Node::new("root"));
        let out = format_tree(&tree, OutputFormat::Json, false).unwrap();
        assert_eq!(out, r#"{"tree":{"value":"root"}}"#);
        assert_eq!(OutputFormat::Json.extension(), "json");
    }
}
