//! Rename operation.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use filetree_core::FileNode;

/// Outcome of a rename attempt.
///
/// The operation never raises; every way a rename can end is a variant
/// here, and the caller decides whether to log, alert, or retry. Only
/// [`RenameOutcome::Renamed`] means the filesystem was touched.
#[derive(Debug)]
pub enum RenameOutcome {
    /// The entry now lives at the returned node's path. The old node keeps
    /// addressing the old path; callers should replace their reference.
    Renamed(FileNode),
    /// An entry already exists at the target path. Nothing was changed.
    Collision { target: PathBuf },
    /// The new name cannot form a valid sibling path. Nothing was changed.
    InvalidName { reason: String },
    /// The underlying filesystem rename failed. Nothing was changed.
    Failed {
        target: PathBuf,
        source: std::io::Error,
    },
}

impl RenameOutcome {
    /// Check whether the rename went through.
    pub fn is_renamed(&self) -> bool {
        matches!(self, RenameOutcome::Renamed(_))
    }

    /// The new node, if the rename went through.
    pub fn renamed(self) -> Option<FileNode> {
        match self {
            RenameOutcome::Renamed(node) => Some(node),
            _ => None,
        }
    }
}

/// Rename a file or directory in place, keeping it under the same parent.
///
/// The target path is the node's parent joined with `new_name`; a node with
/// no parent resolves the target as `new_name` alone. The rename is
/// attempted exactly once, and is only as atomic as the OS rename
/// primitive: typically atomic within a volume, and it may fail across
/// filesystem boundaries.
pub fn rename_entry(node: &FileNode, new_name: &str) -> RenameOutcome {
    if let Err(reason) = validate_filename(new_name) {
        return RenameOutcome::InvalidName { reason };
    }

    let source = node.path();
    let parent = source.parent().unwrap_or(Path::new(""));
    let target = parent.join(new_name);

    // Renaming onto any existing entry is refused, including the entry's
    // own current name.
    if target.exists() {
        return RenameOutcome::Collision { target };
    }

    debug!(
        source = %source.display(),
        target = %target.display(),
        "renaming entry"
    );

    match fs::rename(source, &target) {
        Ok(()) => RenameOutcome::Renamed(FileNode::new(target)),
        Err(err) => RenameOutcome::Failed {
            target,
            source: err,
        },
    }
}

/// Validate a filename for use as a single path segment.
pub fn validate_filename(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Name cannot be empty".into());
    }

    if name.len() > 255 {
        return Err("Name is too long (max 255 bytes)".into());
    }

    for c in ['/', '\0'] {
        if name.contains(c) {
            return Err(format!("Name cannot contain '{}'", c.escape_default()));
        }
    }

    #[cfg(target_os = "windows")]
    {
        for c in ['\\', ':', '*', '?', '"', '<', '>', '|'] {
            if name.contains(c) {
                return Err(format!("Name cannot contain '{c}'"));
            }
        }
    }

    if name.starts_with(' ') || name.ends_with(' ') {
        return Err("Name cannot start or end with spaces".into());
    }

    if name.ends_with('.') {
        return Err("Name cannot end with a dot".into());
    }

    if name == "." || name == ".." {
        return Err("'.' and '..' are reserved names".into());
    }

    Ok(())
}
