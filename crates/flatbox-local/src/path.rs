//! Path helpers shared by the local backend.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

use flatbox_types::{StowError, StowResult};

/// The platform path separator.
pub const SEPARATOR: char = MAIN_SEPARATOR;

/// Convert a forward-slash path into the platform's native form.
pub fn from_slash(path: &str) -> String {
    if SEPARATOR == '/' {
        path.to_string()
    } else {
        path.replace('/', &SEPARATOR.to_string())
    }
}

/// Lexically normalize a path: drop `.` components, fold `..` into the
/// preceding component, and collapse repeated separators.
///
/// An empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root stays at the root.
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Borrow a path as UTF-8, failing with `InvalidData` otherwise.
pub fn path_str(path: &Path) -> StowResult<&str> {
    path.to_str().ok_or_else(|| {
        StowError::Io(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("path is not valid UTF-8: {}", path.display()),
        ))
    })
}

/// Join a relative name onto a root by plain string concatenation.
pub fn join_str(root: &str, name: &str) -> String {
    if root.ends_with(SEPARATOR) {
        format!("{root}{name}")
    } else {
        format!("{root}{SEPARATOR}{name}")
    }
}

/// Length of the `root + separator` prefix shared by every path below `root`.
pub fn prefix_len(root: &str) -> usize {
    if root.ends_with(SEPARATOR) {
        root.len()
    } else {
        root.len() + SEPARATOR.len_utf8()
    }
}

/// Stat a path, mapping a missing target to `NotFound`.
pub fn stat(path: &Path) -> StowResult<fs::Metadata> {
    fs::metadata(path).map_err(|e| not_found_or_io(e, path))
}

/// Map `ErrorKind::NotFound` to [`StowError::NotFound`] and pass every other
/// error through as I/O.
pub fn not_found_or_io(err: io::Error, path: &Path) -> StowError {
    if err.kind() == io::ErrorKind::NotFound {
        StowError::NotFound(path.display().to_string())
    } else {
        StowError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_drops_dots_and_duplicates() {
        assert_eq!(clean_path(Path::new("/a/./b//c/")), PathBuf::from("/a/b/c"));
    }

    #[test]
    fn clean_folds_parent_dirs() {
        assert_eq!(clean_path(Path::new("/a/b/../c")), PathBuf::from("/a/c"));
        assert_eq!(clean_path(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(clean_path(Path::new("../a/..")), PathBuf::from(".."));
    }

    #[test]
    fn clean_empty_is_dot() {
        assert_eq!(clean_path(Path::new("")), PathBuf::from("."));
        assert_eq!(clean_path(Path::new("a/..")), PathBuf::from("."));
    }

    #[test]
    fn join_and_prefix_len_agree() {
        let root = "/srv/data";
        let full = join_str(root, "x.txt");
        assert_eq!(&full[prefix_len(root)..], "x.txt");

        let root = "/";
        let full = join_str(root, "x.txt");
        assert_eq!(full, "/x.txt");
        assert_eq!(&full[prefix_len(root)..], "x.txt");
    }

    #[test]
    fn stat_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = stat(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, StowError::NotFound(_)));
    }

    #[cfg(unix)]
    #[test]
    fn from_slash_is_identity_on_unix() {
        assert_eq!(from_slash("a/b/c"), "a/b/c");
    }
}
