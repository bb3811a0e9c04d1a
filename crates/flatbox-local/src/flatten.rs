//! Tree flattening.
//!
//! A container's directory tree is walked once per listing and reduced to a
//! flat sequence of files named by their path relative to the root. The
//! sequence is sorted with [`order::sort_entries`](crate::order::sort_entries)
//! before it is returned, so repeated walks of an unchanged tree produce the
//! same sequence.

use std::fs;
use std::io;
use std::path::Path;

use flatbox_types::{StowError, StowResult};
use tracing::debug;
use walkdir::WalkDir;

use crate::order;
use crate::paginate::Named;
use crate::path::path_str;

/// A file found by [`flatten`].
#[derive(Clone, Debug)]
pub struct FlatEntry {
    name: String,
    metadata: fs::Metadata,
}

impl FlatEntry {
    fn new(name: String, metadata: fs::Metadata) -> Self {
        Self { name, metadata }
    }

    /// Path relative to the walked root, with native separators.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Metadata captured during the walk (not following symlinks).
    pub fn metadata(&self) -> &fs::Metadata {
        &self.metadata
    }

    /// Number of separators in the relative name.
    pub fn depth(&self) -> usize {
        order::depth_of(&self.name)
    }
}

impl Named for FlatEntry {
    fn flat_name(&self) -> &str {
        &self.name
    }
}

/// Walk `root` recursively and return every non-directory entry below it,
/// in listing order.
///
/// Fails if any directory cannot be read or any path cannot be expressed
/// relative to `root`.
pub fn flatten(root: &Path) -> StowResult<Vec<FlatEntry>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(walk_error)?;
        if entry.file_type().is_dir() {
            continue;
        }
        let relative = entry.path().strip_prefix(root).map_err(|_| {
            StowError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "{} is not below {}",
                    entry.path().display(),
                    root.display()
                ),
            ))
        })?;
        let name = path_str(relative)?.to_string();
        let metadata = entry.metadata().map_err(walk_error)?;
        entries.push(FlatEntry::new(name, metadata));
    }

    order::sort_entries(&mut entries);
    debug!(root = %root.display(), entries = entries.len(), "flattened tree");
    Ok(entries)
}

/// Keep the failing path in the message while preserving the error kind.
fn walk_error(err: walkdir::Error) -> StowError {
    let kind = err
        .io_error()
        .map(io::Error::kind)
        .unwrap_or(io::ErrorKind::Other);
    StowError::Io(io::Error::new(kind, err))
}
