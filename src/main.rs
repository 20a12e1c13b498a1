//! filetree - browse a directory tree lazily and rename entries in place.
//!
//! Usage:
//!   ftree [PATH]                 List the tree under PATH
//!   ftree list [PATH]            Same, with depth/format options
//!   ftree demo                   Provision the demo layout and list it
//!   ftree rename PATH NEW_NAME   Rename a file or directory in place
//!   ftree --help                 Show help
//!
//! The commands drive the provider exactly the way a hosting view would:
//! ask for the roots once, then ask for children per expanded directory.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{eyre, Result};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use filetree_browse::{provision_demo_root, LazyTreeProvider};
use filetree_core::FileNode;
use filetree_ops::{rename_entry, RenameOutcome};

#[derive(Parser)]
#[command(
    name = "filetree",
    version,
    about = "Browse a directory tree lazily and rename entries in place",
    long_about = "filetree lists directory children on demand, the way a \
                  tree view expands branches.\n\nRun `ftree [PATH]` to list \
                  a tree, `ftree demo` to set up and browse a small example \
                  layout, or `ftree rename` to rename one entry."
)]
struct Cli {
    /// Root directory to browse (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List the tree under a root directory
    List {
        /// Root directory to browse
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Maximum depth to expand
        #[arg(short, long, default_value = "3")]
        depth: u32,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Provision the demo layout and list it
    Demo {
        /// Base directory for the demo root (defaults to the system temp dir)
        #[arg(long)]
        base: Option<PathBuf>,
    },

    /// Rename a file or directory in place
    Rename {
        /// Entry to rename
        path: PathBuf,

        /// New name (a single path segment, not a path)
        new_name: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One node of a listing, captured for JSON output.
#[derive(Serialize)]
struct Snapshot {
    name: String,
    kind: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Snapshot>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .compact()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::List {
            path,
            depth,
            format,
        }) => list_tree(&path, depth, format),
        Some(Command::Demo { base }) => run_demo(base),
        Some(Command::Rename { path, new_name }) => run_rename(&path, &new_name),
        None => list_tree(&cli.path, 3, OutputFormat::Text),
    }
}

fn list_tree(path: &Path, depth: u32, format: OutputFormat) -> Result<()> {
    let provider = LazyTreeProvider::new(path)?;

    match format {
        OutputFormat::Text => {
            for root in provider.roots() {
                print_node(&provider, &root, 0, depth);
            }
        }
        OutputFormat::Json => {
            let snapshots: Vec<_> = provider
                .roots()
                .iter()
                .map(|root| snapshot(&provider, root, 0, depth))
                .collect();
            println!("{}", serde_json::to_string_pretty(&snapshots)?);
        }
    }

    Ok(())
}

fn print_node(provider: &LazyTreeProvider, node: &FileNode, level: u32, max_depth: u32) {
    let indent = "  ".repeat(level as usize);
    let suffix = if node.is_dir() { "/" } else { "" };
    println!("{indent}{}{suffix}", node.name());

    if node.is_dir() && level < max_depth {
        for child in provider.children(node) {
            print_node(provider, &child, level + 1, max_depth);
        }
    }
}

fn snapshot(provider: &LazyTreeProvider, node: &FileNode, level: u32, max_depth: u32) -> Snapshot {
    let kind = match node.kind() {
        Some(k) if k.is_dir() => "directory",
        Some(k) if k.is_file() => "file",
        Some(_) => "other",
        None => "missing",
    };

    let children = if node.is_dir() && level < max_depth {
        provider
            .children(node)
            .iter()
            .map(|child| snapshot(provider, child, level + 1, max_depth))
            .collect()
    } else {
        Vec::new()
    };

    Snapshot {
        name: node.name().to_string(),
        kind,
        children,
    }
}

fn run_demo(base: Option<PathBuf>) -> Result<()> {
    let base = base.unwrap_or_else(std::env::temp_dir);

    // A provisioning failure must not abort the demo; browse whatever is
    // there and let the listing speak for itself.
    let root = base.join(filetree_browse::DEMO_ROOT_NAME);
    match provision_demo_root(&base) {
        Ok(path) => info!(root = %path.display(), "demo layout ready"),
        Err(err) => warn!(error = %err, "could not provision demo layout"),
    }

    list_tree(&root, 3, OutputFormat::Text)
}

fn run_rename(path: &Path, new_name: &str) -> Result<()> {
    let node = FileNode::new(path);

    match rename_entry(&node, new_name) {
        RenameOutcome::Renamed(renamed) => {
            info!(
                from = %node.path().display(),
                to = %renamed.path().display(),
                "renamed"
            );
            println!("{}", renamed.path().display());
            Ok(())
        }
        RenameOutcome::Collision { target } => Err(eyre!(
            "an entry already exists at {}",
            target.display()
        )),
        RenameOutcome::InvalidName { reason } => Err(eyre!("invalid name: {reason}")),
        RenameOutcome::Failed { target, source } => Err(eyre!(
            "could not rename {} to {}: {source}",
            node.path().display(),
            target.display()
        )),
    }
}
