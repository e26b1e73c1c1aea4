use crate::document::{self, Document};
use crate::error::DirTreeError;
use crate::listing::{FsListing, Listing};
use crate::node::{Node, Tree};
use crate::options::DirTreeOptions;
use std::fs;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;
/// A [`Tree`] snapshot of a directory hierarchy.
///
/// Once built, nothing here touches storage again: rendering and validation
/// answer from memory, so the snapshot can go stale.
#[derive(Debug, Clone)]
pub struct DirectoryTree {
    tree: Tree,
    max_depth: Option<usize>,
    only_directories: bool,
}
struct Scan<'a, L: ?Sized> {
    listing: &'a L,
    max_depth: Option<usize>,
    only_directories: bool,
    deepest: usize,
}
impl<L: Listing + ?Sized> Scan<'_, L> {
    /// `is_dir` comes from the parent's listing so the location is never
    /// re-examined (an unfollowed symlink stays a leaf).
    fn node_at(
        &mut self,
        location: &Path,
        name: String,
        is_dir: bool,
        depth: usize,
    ) -> Result<Node, DirTreeError> {
        let mut node = Node::new(name);
        self.deepest = self.deepest.max(depth);
        let expand = self.max_depth.is_none_or(|limit| depth < limit);
        if expand && is_dir {
            for entry in self.listing.list_children(location)? {
                if self.only_directories && !entry.is_dir {
                    continue;
                }
                let child = location.join(&entry.name);
                node.add_child(self.node_at(&child, entry.name, entry.is_dir, depth + 1)?);
            }
        }
        Ok(node)
    }
}
impl DirectoryTree {
    /// Builds the tree rooted at `options.root` through `listing`.
    ///
    /// # Errors
    ///
    /// [`DirTreeError::NotFound`] if the root does not exist,
    /// [`DirTreeError::UnnamedRoot`] if its path has no final name (`/`), or
    /// whatever the listing reports while enumerating.
    pub fn build<L>(options: &DirTreeOptions, listing: &L) -> Result<Self, DirTreeError>
    where
        L: Listing + ?Sized,
    {
        Self::build_at(&options.root, options, listing)
    }
    /// Builds the tree from the real filesystem, using [`FsListing`] configured
    /// from the same options.
    pub fn scan(options: &DirTreeOptions) -> Result<Self, DirTreeError> {
        let listing = FsListing::new(options)?;
        if !listing.exists(&options.root) {
            return Err(DirTreeError::NotFound {
                path: options.root.clone(),
            });
        }
        // `.` and `..` have no name of their own.
        let root = if options.root.file_name().is_some() {
            options.root.clone()
        } else {
            fs::canonicalize(&options.root).map_err(|e| DirTreeError::io(&options.root, e))?
        };
        Self::build_at(&root, options, &listing)
    }
    fn build_at<L>(root: &Path, options: &DirTreeOptions, listing: &L) -> Result<Self, DirTreeError>
    where
        L: Listing + ?Sized,
    {
        #[cfg(feature = "logging")]
        tracing::debug!("Building directory tree from {}", root.display());
        if !listing.exists(root) {
            return Err(DirTreeError::NotFound {
                path: root.to_path_buf(),
            });
        }
        let name = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| DirTreeError::UnnamedRoot {
                path: root.to_path_buf(),
            })?;
        let max_depth = options.max_depth.map(|limit| limit.max(1));
        let mut scan = Scan {
            listing,
            max_depth,
            only_directories: options.only_directories,
            deepest: 0,
        };
        let node = scan.node_at(root, name, listing.is_dir(root), 1)?;
        #[cfg(feature = "logging")]
        tracing::debug!("Built directory tree with depth {}", scan.deepest);
        Ok(Self {
            tree: Tree::with_depth(node, scan.deepest),
            max_depth,
            only_directories: options.only_directories,
        })
    }
    /// Restores a previously persisted tree. No depth limit or filter applies.
    pub fn from_document(document: Document) -> Self {
        Self {
            tree: document::decode(document),
            max_depth: None,
            only_directories: false,
        }
    }
    pub fn read_document(path: impl AsRef<Path>) -> Result<Self, DirTreeError> {
        let tree = document::read_document(path)?;
        Ok(Self {
            tree,
            max_depth: None,
            only_directories: false,
        })
    }
    pub fn tree(&self) -> &Tree {
        &self.tree
    }
    pub fn into_tree(self) -> Tree {
        self.tree
    }
    pub fn root(&self) -> &Node {
        self.tree.root()
    }
    pub fn depth(&self) -> usize {
        self.tree.depth()
    }
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
    pub fn only_directories(&self) -> bool {
        self.only_directories
    }
    pub fn as_text(&self) -> String {
        self.tree.as_text()
    }
    pub fn validate(&self, candidate: &str) -> Result<String, DirTreeError> {
        self.tree.validate(candidate)
    }
    pub fn to_document(&self) -> Document {
        document::encode(&self.tree)
    }
    pub fn write_document(&self, path: impl AsRef<Path>, pretty: bool) -> Result<(), DirTreeError> {
        document::write_document(&self.tree, path, pretty)
    }
}
impl From<DirectoryTree> for Tree {
    fn from(directory: DirectoryTree) -> Self {
        directory.tree
    }
}
