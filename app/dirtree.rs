//! Command-line interface for dirtree.
//!
//! Draws a directory hierarchy, checks candidate paths against it, or
//! exports it as a JSON document that later runs can load instead of
//! scanning the filesystem.

use clap::{Args, Parser, Subcommand, ValueEnum};
use dirtree::{DirTreeBuilder, DirTreeError, DirTreeOptions, DirectoryTree, output, validate_all};
use std::path::{Path, PathBuf};
use std::process::exit;

/// dirtree: in-memory directory snapshots
#[derive(Parser)]
#[command(name = "dirtree", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw the hierarchy as ASCII art
    Display {
        #[command(flatten)]
        source: Source,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Pretty output (indented JSON)
        #[arg(short, long)]
        pretty: bool,
    },
    /// Check paths against the hierarchy and print their canonical form
    Validate {
        #[command(flatten)]
        source: Source,

        /// Slash-delimited paths, starting with the root's name
        #[arg(required = true)]
        candidates: Vec<String>,
    },
    /// Write the hierarchy as a JSON document
    Export {
        #[command(flatten)]
        source: Source,

        /// Destination file
        #[arg(short, long)]
        output: PathBuf,

        /// Pretty output (indented JSON)
        #[arg(short, long)]
        pretty: bool,
    },
}

/// Where the tree comes from and how a live scan is filtered.
#[derive(Args)]
struct Source {
    /// Root directory (default current dir)
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Load a previously exported document instead of scanning
    #[arg(
        long,
        conflicts_with_all = [
            "root",
            "max_depth",
            "only_directories",
            "ignore_patterns",
            "no_hidden",
            "gitignore",
            "follow_links",
            "sort",
        ]
    )]
    from_document: Option<PathBuf>,

    /// Max depth, root is 1 (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Leave files out of the tree
    #[arg(short = 'd', long)]
    only_directories: bool,

    /// Ignore patterns (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Skip hidden entries
    #[arg(long)]
    no_hidden: bool,

    /// Honor .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Sort entries by name instead of filesystem order
    #[arg(long)]
    sort: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
    Json,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => output::OutputFormat::Text,
            OutputFormat::Markdown => output::OutputFormat::Markdown,
            OutputFormat::Json => output::OutputFormat::Json,
        }
    }
}

impl Source {
    fn options(&self) -> DirTreeOptions {
        let builder = DirTreeBuilder::new(&self.root)
            .only_directories(self.only_directories)
            .ignore_patterns(self.ignore_patterns.clone())
            .include_hidden(!self.no_hidden)
            .respect_gitignore(self.gitignore)
            .follow_links(self.follow_links)
            .sort_by_name(self.sort);

        let builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };
        builder.build()
    }

    fn load(&self) -> Result<DirectoryTree, DirTreeError> {
        match &self.from_document {
            Some(path) => DirectoryTree::read_document(path),
            None => DirectoryTree::scan(&self.options()),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Command::Display {
            source,
            format,
            pretty,
        } => run_display(&source, format, pretty),
        Command::Validate { source, candidates } => run_validate(&source, &candidates),
        Command::Export {
            source,
            output,
            pretty,
        } => run_export(&source, &output, pretty),
    };

    match result {
        Ok(true) => {}
        Ok(false) => exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(not(feature = "logging"))]
fn init_logging() {}

fn run_display(source: &Source, format: OutputFormat, pretty: bool) -> Result<bool, DirTreeError> {
    let tree = source.load()?;
    let out = output::format_tree(tree.tree(), format.into(), pretty)?;
    println!("{}", out);
    Ok(true)
}

fn run_validate(source: &Source, candidates: &[String]) -> Result<bool, DirTreeError> {
    let tree = source.load()?;
    let mut all_valid = true;
    for result in validate_all(tree.tree(), candidates) {
        match result {
            Ok(path) => println!("{}", path),
            Err(e) if e.is_validation() => {
                eprintln!("{}", e);
                all_valid = false;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(all_valid)
}

fn run_export(source: &Source, destination: &Path, pretty: bool) -> Result<bool, DirTreeError> {
    let tree = source.load()?;
    tree.write_document(destination, pretty)?;
    Ok(true)
}
