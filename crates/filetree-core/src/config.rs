//! Browse configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for a tree browsing session.
///
/// The root is fixed for the lifetime of the provider built from this
/// config; there is no mechanism to change it at runtime.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct BrowseConfig {
    /// Root path to browse from.
    pub root: PathBuf,

    /// Include hidden entries (starting with .) in listings.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub include_hidden: bool,
}

fn default_true() -> bool {
    true
}

impl BrowseConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        Ok(())
    }
}

impl BrowseConfig {
    /// Create a new browse config builder.
    pub fn builder() -> BrowseConfigBuilder {
        BrowseConfigBuilder::default()
    }

    /// Create a simple config for browsing a path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            include_hidden: true,
        }
    }
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = BrowseConfig::builder()
            .root("/home/user")
            .include_hidden(false)
            .build()
            .unwrap();

        assert_eq!(config.root, PathBuf::from("/home/user"));
        assert!(!config.include_hidden);
    }

    #[test]
    fn test_config_simple() {
        let config = BrowseConfig::new("/home/user");
        assert_eq!(config.root, PathBuf::from("/home/user"));
        assert!(config.include_hidden);
    }

    #[test]
    fn test_empty_root_is_rejected() {
        let result = BrowseConfig::builder().root("").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_root_is_rejected() {
        let result = BrowseConfig::builder().include_hidden(true).build();
        assert!(result.is_err());
    }
}
