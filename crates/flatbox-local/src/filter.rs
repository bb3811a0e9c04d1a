//! Prefix and depth filtering of listing entries.
//!
//! Matching is a plain byte-wise prefix test on the full path, not a
//! path-segment comparison: prefix `ab` also matches `abc/file`. The depth
//! bound counts separators in the part of the path after the prefix and is
//! only applied when a prefix is given.

use std::path::Path;

use crate::path::{from_slash, join_str, SEPARATOR};

/// Decides whether an entry's full path belongs in a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListFilter {
    /// Full-path prefix, empty for no filtering.
    prefix: String,
    /// Maximum number of levels below the prefix, 0 for unlimited.
    depth: usize,
}

impl ListFilter {
    /// Build a filter for a container rooted at `root`.
    ///
    /// `prefix` is given in forward-slash form. A relative prefix is resolved
    /// against `root` by string concatenation; an absolute one is used as-is.
    pub fn new(root: &str, prefix: &str, depth: usize) -> Self {
        let native = from_slash(prefix);
        let prefix = if native.is_empty() || Path::new(&native).is_absolute() {
            native
        } else {
            join_str(root, &native)
        };
        Self { prefix, depth }
    }

    /// The resolved full-path prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns `true` if the entry at `full_path` passes the filter.
    pub fn matches(&self, full_path: &str) -> bool {
        if self.prefix.is_empty() {
            return true;
        }
        let Some(rest) = full_path.strip_prefix(self.prefix.as_str()) else {
            return false;
        };
        if self.depth == 0 {
            return true;
        }
        let rest = rest.strip_prefix(SEPARATOR).unwrap_or(rest);
        rest.matches(SEPARATOR).count() < self.depth
    }
}
