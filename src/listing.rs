use crate::error::DirTreeError;
use crate::options::DirTreeOptions;
use ignore::WalkBuilder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
/// One immediate child of a listed location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub name: String,
    pub is_dir: bool,
}
impl ListEntry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}
/// Enumerates the immediate children of a location.
///
/// The tree builder only ever talks to storage through this trait, so any
/// hierarchy that can answer these three questions can be modeled.
pub trait Listing {
    fn exists(&self, location: &Path) -> bool;
    fn is_dir(&self, location: &Path) -> bool;
    /// Children in the order they should appear in the tree.
    fn list_children(&self, location: &Path) -> Result<Vec<ListEntry>, DirTreeError>;
}
/// [`Listing`] over the real filesystem.
#[derive(Debug, Clone)]
pub struct FsListing {
    respect_gitignore: bool,
    include_hidden: bool,
    follow_links: bool,
    sort_by_name: bool,
    matcher: Option<globset::GlobSet>,
}
impl FsListing {
    pub fn new(options: &DirTreeOptions) -> Result<Self, DirTreeError> {
        let matcher = if !options.ignore_patterns.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.ignore_patterns {
                let glob = globset::Glob::new(pattern).map_err(|e| {
                    DirTreeError::Walk(format!("Invalid glob pattern '{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
            }
            Some(
                glob_builder
                    .build()
                    .map_err(|e| DirTreeError::Walk(format!("Failed to build glob set: {}", e)))?,
            )
        } else {
            None
        };
        Ok(Self {
            respect_gitignore: options.respect_gitignore,
            include_hidden: options.include_hidden,
            follow_links: options.follow_links,
            sort_by_name: options.sort_by_name,
            matcher,
        })
    }
}
impl Default for FsListing {
    fn default() -> Self {
        Self {
            respect_gitignore: false,
            include_hidden: true,
            follow_links: false,
            sort_by_name: false,
            matcher: None,
        }
    }
}
impl Listing for FsListing {
    fn exists(&self, location: &Path) -> bool {
        fs::symlink_metadata(location).is_ok()
    }
    fn is_dir(&self, location: &Path) -> bool {
        let metadata = if self.follow_links {
            fs::metadata(location)
        } else {
            fs::symlink_metadata(location)
        };
        metadata.is_ok_and(|m| m.is_dir())
    }
    fn list_children(&self, location: &Path) -> Result<Vec<ListEntry>, DirTreeError> {
        let mut builder = WalkBuilder::new(location);
        builder
            .git_ignore(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .hidden(!self.include_hidden)
            .max_depth(Some(1))
            .follow_links(self.follow_links)
            .ignore(false)
            .parents(self.respect_gitignore)
            .require_git(false);
        if self.sort_by_name {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }
        if let Some(ref matcher) = self.matcher {
            let matcher = matcher.clone();
            builder.filter_entry(move |entry| !matcher.is_match(entry.path()));
        }
        let mut entries = Vec::new();
        for result in builder.build() {
            let entry = result.map_err(|e| DirTreeError::Walk(e.to_string()))?;
            if entry.depth() == 0 {
                continue;
            }
            // Unfollowed symlinks report their own type and stay leaves.
            let is_dir = entry.file_type().is_some_and(|kind| kind.is_dir());
            entries.push(ListEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        #[cfg(feature = "logging")]
        tracing::debug!(
            "Listed {} entries under {}",
            entries.len(),
            location.display()
        );
        Ok(entries)
    }
}
