//! Lazy tree browsing for filetree.
//!
//! This crate answers the two questions a hierarchical view asks: what are
//! the roots, and what are the children of this node. Children are read
//! from the filesystem on every call. Nothing is cached, so external
//! changes become visible the next time a branch is expanded.
//!
//! # Example
//!
//! ```rust,no_run
//! use filetree_browse::LazyTreeProvider;
//!
//! let provider = LazyTreeProvider::new("/var/data").unwrap();
//! for root in provider.roots() {
//!     for child in provider.children(&root) {
//!         println!("{}", child.name());
//!     }
//! }
//! ```

mod fixture;
mod provider;

pub use fixture::{provision_demo_root, DEMO_ROOT_NAME};
pub use provider::LazyTreeProvider;

// Re-export core types for convenience
pub use filetree_core::{BrowseConfig, BrowseError, FileNode, NodeKind};
