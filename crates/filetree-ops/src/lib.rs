//! File operations for filetree.
//!
//! Renaming is the only mutation the browsing core performs; it is
//! synchronous and reports every outcome through a tagged result rather
//! than an error channel, so the caller can tell success, collision, and
//! I/O failure apart.

mod rename;

pub use rename::{rename_entry, validate_filename, RenameOutcome};
