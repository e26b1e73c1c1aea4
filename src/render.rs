//! Left-to-right ASCII-art rendering.
//!
//! ```text
//! + root +
//!        |
//!        + dir_a +
//!        |       |
//!        |       + 1
//!        |
//!        + dir_d
//! ```
//!
//! Continuation bars are reconstructed from traversal order alone: each open
//! ancestor remembers the column of its trailing `+` and how many of its
//! children are still to come.

use crate::node::{Node, Tree};
use crate::walk::{Visit, walk};
use std::fmt;

/// An ancestor whose children are still being drawn.
struct Branch {
    column: usize,
    remaining: usize,
}

/// Renders `tree` as newline-joined lines with no trailing newline.
pub fn render(tree: &Tree) -> String {
    let mut open: Vec<Branch> = Vec::new();
    let mut lines: Vec<String> = Vec::new();

    walk(tree, |node, depth| {
        let text = node_text(node);
        while open.len() >= depth {
            open.pop();
        }

        if let Some((innermost, outer)) = open.split_last_mut() {
            let mut spacer = String::new();
            for (idx, branch) in outer.iter().enumerate() {
                push_column(&mut spacer, idx, branch);
            }
            push_column(&mut spacer, outer.len(), innermost);
            lines.push(spacer);

            let mut line = String::new();
            for (idx, branch) in outer.iter().enumerate() {
                push_column(&mut line, idx, branch);
            }
            innermost.remaining = innermost.remaining.saturating_sub(1);
            pad(&mut line, outer.len(), innermost);
            line.push_str(&text);
            lines.push(line);
        } else {
            lines.push(text.clone());
        }

        if node.has_children() {
            open.push(Branch {
                column: text.chars().count() - 1,
                remaining: node.children().len(),
            });
        }
        Visit::Continue
    });

    lines.join("\n")
}

fn node_text(node: &Node) -> String {
    if node.has_children() {
        format!("+ {} +", node.label())
    } else {
        format!("+ {}", node.label())
    }
}

/// Every column after the first already sits one past its parent's marker.
fn pad(out: &mut String, idx: usize, branch: &Branch) {
    let width = if idx == 0 {
        branch.column
    } else {
        branch.column - 1
    };
    out.extend(std::iter::repeat_n(' ', width));
}

fn push_column(out: &mut String, idx: usize, branch: &Branch) {
    pad(out, idx, branch);
    out.push(if branch.remaining > 0 { '|' } else { ' ' });
}

impl Tree {
    /// See [`render`].
    pub fn as_text(&self) -> String {
        render(self)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
