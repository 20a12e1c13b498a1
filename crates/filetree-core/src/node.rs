//! File and directory node types.

use std::fs;
use std::path::{Path, PathBuf};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::error::BrowseError;

/// Type of file system node, as observed at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Directory.
    Directory,
    /// Regular file.
    File,
    /// Other file types (sockets, devices, etc.).
    Other,
}

impl NodeKind {
    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, NodeKind::Directory)
    }

    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        matches!(self, NodeKind::File)
    }
}

/// A single file or directory entry, wrapped as an immutable path value.
///
/// A `FileNode` holds nothing but the path it addresses. Name, kind,
/// existence, and children are all derived on demand; at worst a node
/// addresses an entry that no longer exists, which it reports through
/// `exists()`. Renaming produces a *new* node addressing the new path;
/// holders of the old node keep addressing the old path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FileNode {
    path: PathBuf,
}

impl FileNode {
    /// Wrap a path as a node.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The wrapped path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The entry's display name: the last path segment.
    ///
    /// Empty for paths with no final segment (a filesystem root, or a path
    /// ending in `..`). Derived from the path alone, no I/O.
    pub fn name(&self) -> CompactString {
        self.path
            .file_name()
            .map(|n| CompactString::from(n.to_string_lossy()))
            .unwrap_or_default()
    }

    /// Check whether the entry currently exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Check whether the entry is a directory.
    ///
    /// A missing or unreadable path reports `false`.
    pub fn is_dir(&self) -> bool {
        self.path.is_dir()
    }

    /// Check whether the entry is a regular file.
    pub fn is_file(&self) -> bool {
        self.path.is_file()
    }

    /// The entry's kind, or `None` if it is missing or unreadable.
    ///
    /// Symlinks are followed, so a link to a directory reports
    /// [`NodeKind::Directory`].
    pub fn kind(&self) -> Option<NodeKind> {
        let metadata = fs::metadata(&self.path).ok()?;
        let file_type = metadata.file_type();
        if file_type.is_dir() {
            Some(NodeKind::Directory)
        } else if file_type.is_file() {
            Some(NodeKind::File)
        } else {
            Some(NodeKind::Other)
        }
    }

    /// Enumerate the entries directly inside this node's path.
    ///
    /// Each entry is wrapped, and the result is sorted by node ordering so
    /// a fixed directory state always lists the same way. Nothing is
    /// cached; every call re-reads the directory.
    pub fn read_children(&self) -> Result<Vec<FileNode>, BrowseError> {
        let entries = fs::read_dir(&self.path).map_err(|e| BrowseError::io(&self.path, e))?;

        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| BrowseError::io(&self.path, e))?;
            children.push(FileNode::new(entry.path()));
        }

        children.sort();
        Ok(children)
    }
}

impl std::fmt::Display for FileNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
