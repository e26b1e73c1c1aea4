use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirTreeOptions {
    pub root: PathBuf,
    /// Depth at which branches stop being explored. The root is depth 1.
    pub max_depth: Option<usize>,
    pub only_directories: bool,
    pub respect_gitignore: bool,
    pub include_hidden: bool,
    pub follow_links: bool,
    pub ignore_patterns: Vec<String>,
    pub sort_by_name: bool,
}
impl Default for DirTreeOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            max_depth: None,
            only_directories: false,
            respect_gitignore: false,
            include_hidden: true,
            follow_links: false,
            ignore_patterns: Vec::new(),
            sort_by_name: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct DirTreeBuilder {
    options: DirTreeOptions,
}
impl DirTreeBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: DirTreeOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn only_directories(mut self, yes: bool) -> Self {
        self.options.only_directories = yes;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn sort_by_name(mut self, yes: bool) -> Self {
        self.options.sort_by_name = yes;
        self
    }
    pub fn build(self) -> DirTreeOptions {
        self.options
    }
}
