//! # dirtree
//!
//! `dirtree` takes a snapshot of a directory hierarchy and answers questions
//! about it without touching the filesystem again: whether a slash-delimited
//! path exists in the snapshot, and what the snapshot looks like, either as
//! left-to-right ASCII art or as a persisted JSON document.
//!
//! # Features
//!
//! - `parallel`: Validates batches of paths in parallel using Rayon.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use dirtree::{DirTreeBuilder, DirectoryTree};
//!
//! let options = DirTreeBuilder::new(".")
//!     .max_depth(3)
//!     .only_directories(true)
//!     .build();
//!
//! let tree = DirectoryTree::scan(&options).expect("Failed to scan directory");
//!
//! println!("{}", tree.as_text());
//! match tree.validate("src/bin") {
//!     Ok(path) => println!("ok: {}", path),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

mod directory;
pub mod document;
mod error;
mod listing;
mod node;
mod options;
pub mod output;
mod render;
mod validate;
mod walk;

pub use directory::DirectoryTree;
pub use document::{Document, Element};
pub use error::DirTreeError;
pub use listing::{FsListing, ListEntry, Listing};
pub use node::{Node, Tree, label_matches};
pub use options::{DirTreeBuilder, DirTreeOptions};
pub use render::render;
pub use validate::{normalize, validate, validate_all};
pub use walk::{Visit, try_walk, walk};
