//! Demo fixture provisioning.
//!
//! Sets up a small deterministic file layout for users to browse. A real
//! deployment would point the provider at an existing directory instead.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use filetree_core::BrowseError;

/// Name of the directory the demo layout lives under.
pub const DEMO_ROOT_NAME: &str = "ROOT";

/// Files created directly under the demo root.
const ROOT_FILES: [&str; 3] = ["one", "two", "three"];

/// Provision the demo layout under `base` and return the demo root path.
///
/// The layout is `ROOT/Sub-Directory/four` plus `one`, `two`, `three`
/// directly under `ROOT`. The subdirectory is only created when `ROOT`
/// itself was freshly created; the three root files are ensured on every
/// call, without touching existing content.
pub fn provision_demo_root(base: &Path) -> Result<PathBuf, BrowseError> {
    let root = base.join(DEMO_ROOT_NAME);

    if !root.exists() {
        fs::create_dir(&root).map_err(|e| BrowseError::io(&root, e))?;

        let subdir = root.join("Sub-Directory");
        fs::create_dir(&subdir).map_err(|e| BrowseError::io(&subdir, e))?;
        touch(&subdir.join("four"))?;
    }

    for name in ROOT_FILES {
        touch(&root.join(name))?;
    }

    Ok(root)
}

/// Create an empty file if nothing exists at the path yet.
fn touch(path: &Path) -> Result<(), BrowseError> {
    if path.exists() {
        return Ok(());
    }
    File::create(path)
        .map(drop)
        .map_err(|e| BrowseError::io(path, e))
}
