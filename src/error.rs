use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum DirTreeError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("'{}' does not exist", .path.display())]
    NotFound { path: PathBuf },
    #[error("'{}' has no name to label the tree root with", .path.display())]
    UnnamedRoot { path: PathBuf },
    #[error("'{segment}' is not valid.\nValid entries are:\n  {root}")]
    InvalidRoot { segment: String, root: String },
    #[error(
        "'{path}' is not valid.\nValid entries are:\n{}",
        qualified_entries(.prefix, .alternatives)
    )]
    InvalidSegment {
        /// The candidate up to and including the rejected segment.
        path: String,
        /// The validated part of the candidate.
        prefix: String,
        /// Every child label of the last validated node.
        alternatives: Vec<String>,
    },
    #[error("'{path}' is not valid.\n'{valid}' has no entries below it")]
    PathTooLong { path: String, valid: String },
    #[error("Malformed document: {0}")]
    MalformedDocument(#[from] serde_json::Error),
}
impl DirTreeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DirTreeError::Io {
            path: path.into(),
            source,
        }
    }
    /// True for the three recoverable outcomes of path validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DirTreeError::InvalidRoot { .. }
                | DirTreeError::InvalidSegment { .. }
                | DirTreeError::PathTooLong { .. }
        )
    }
}
fn qualified_entries(prefix: &str, alternatives: &[String]) -> String {
    alternatives
        .iter()
        .map(|label| format!("  {}/{}", prefix, label))
        .collect::<Vec<_>>()
        .join("\n")
}
