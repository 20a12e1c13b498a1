//! Core types for filetree.
//!
//! This crate provides the fundamental data structures used throughout
//! the filetree workspace: the file node wrapper, browse configuration,
//! and the error taxonomy.

mod config;
mod error;
mod node;

pub use config::{BrowseConfig, BrowseConfigBuilder};
pub use error::BrowseError;
pub use node::{FileNode, NodeKind};
