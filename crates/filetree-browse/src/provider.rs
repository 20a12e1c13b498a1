//! On-demand child provider backing a hierarchical view.

use std::path::PathBuf;

use tracing::warn;

use filetree_core::{BrowseConfig, BrowseError, FileNode};

/// Serves roots and children for lazy tree expansion.
///
/// The provider is stateless per call: the tree's shape lives in the real
/// filesystem and is queried fresh each time, so re-expanding a node
/// re-lists it from scratch. The root is fixed at construction.
pub struct LazyTreeProvider {
    root: FileNode,
    include_hidden: bool,
}

impl LazyTreeProvider {
    /// Create a provider rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, BrowseError> {
        Self::from_config(BrowseConfig::new(root))
    }

    /// Create a provider from a full browse configuration.
    ///
    /// The root is canonicalized once here; construction fails if it does
    /// not exist or is not a directory.
    pub fn from_config(config: BrowseConfig) -> Result<Self, BrowseError> {
        let root_path = config
            .root
            .canonicalize()
            .map_err(|e| BrowseError::io(&config.root, e))?;

        if !root_path.is_dir() {
            return Err(BrowseError::NotADirectory { path: root_path });
        }

        Ok(Self {
            root: FileNode::new(root_path),
            include_hidden: config.include_hidden,
        })
    }

    /// The configured root node.
    pub fn root(&self) -> &FileNode {
        &self.root
    }

    /// The top-level nodes a tree view starts from.
    ///
    /// Always a single-element vector containing the configured root;
    /// successive calls describe the same path no matter what has been
    /// renamed below it.
    pub fn roots(&self) -> Vec<FileNode> {
        vec![self.root.clone()]
    }

    /// The children of a node, for expanding one tree branch.
    ///
    /// Non-directories have no children. A listing failure (permission
    /// denied, path vanished) is downgraded to an empty vector and reported
    /// as a warning event; the view shows an empty branch either way.
    pub fn children(&self, node: &FileNode) -> Vec<FileNode> {
        if !node.is_dir() {
            return Vec::new();
        }

        match node.read_children() {
            Ok(mut children) => {
                if !self.include_hidden {
                    children.retain(|c| !c.name().starts_with('.'));
                }
                children
            }
            Err(err) => {
                warn!(
                    path = %node.path().display(),
                    error = %err,
                    "listing failed, treating directory as empty"
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_construction_rejects_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let result = LazyTreeProvider::new(dir.path().join("absent"));
        assert!(matches!(result, Err(BrowseError::NotFound { .. })));
    }

    #[test]
    fn test_construction_rejects_file_root() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("flat");
        fs::write(&file, b"").unwrap();

        let result = LazyTreeProvider::new(&file);
        assert!(matches!(result, Err(BrowseError::NotADirectory { .. })));
    }

    #[test]
    fn test_roots_is_a_single_fixed_node() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LazyTreeProvider::new(dir.path()).unwrap();

        let first = provider.roots();
        let second = provider.roots();
        assert_eq!(first.len(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_children_of_a_file_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("leaf");
        fs::write(&file, b"").unwrap();

        let provider = LazyTreeProvider::new(dir.path()).unwrap();
        assert!(provider.children(&FileNode::new(&file)).is_empty());
    }

    #[test]
    fn test_children_of_a_vanished_directory_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LazyTreeProvider::new(dir.path()).unwrap();

        let node = FileNode::new(dir.path().join("fleeting"));
        assert!(provider.children(&node).is_empty());
    }

    #[test]
    fn test_children_are_sorted_and_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b"), b"").unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();

        let provider = LazyTreeProvider::new(dir.path()).unwrap();
        let children = provider.children(provider.root());

        let names: Vec<_> = children.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_hidden_entries_can_be_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".dotfile"), b"").unwrap();
        fs::write(dir.path().join("plain"), b"").unwrap();

        let config = BrowseConfig::builder()
            .root(dir.path())
            .include_hidden(false)
            .build()
            .unwrap();
        let provider = LazyTreeProvider::from_config(config).unwrap();

        let names: Vec<_> = provider
            .children(provider.root())
            .iter()
            .map(|c| c.name())
            .collect();
        assert_eq!(names, ["plain"]);
    }

    #[test]
    fn test_re_expansion_sees_external_changes() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LazyTreeProvider::new(dir.path()).unwrap();

        assert!(provider.children(provider.root()).is_empty());

        fs::write(dir.path().join("appeared"), b"").unwrap();
        assert_eq!(provider.children(provider.root()).len(), 1);
    }
}
