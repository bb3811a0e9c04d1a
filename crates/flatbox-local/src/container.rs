//! Local directory containers.
//!
//! A [`LocalContainer`] presents a directory tree as a flat namespace of
//! items. Listing re-walks the tree on every call and keeps no state between
//! calls: the cursor handed back to the caller is the only continuation
//! state, so concurrent listings never interfere with each other.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use flatbox_types::{Container, Cursor, Locator, Page, StowError, StowResult};
use tracing::debug;

use crate::filter::ListFilter;
use crate::flatten::{flatten, FlatEntry};
use crate::item::LocalItem;
use crate::paginate::paginate;
use crate::path::{clean_path, from_slash, join_str, not_found_or_io, path_str, prefix_len, stat};

/// A container backed by a directory on the local filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalContainer {
    name: String,
    root: PathBuf,
    /// UTF-8 form of `root`, used for byte-wise prefix arithmetic.
    root_str: String,
}

impl LocalContainer {
    /// Open the directory at `root` as a container called `name`.
    ///
    /// The root is canonicalized. Fails with `NotFound` if it does not exist
    /// and `NotADirectory` if it is not a directory.
    pub fn open(name: impl Into<String>, root: impl AsRef<Path>) -> StowResult<Self> {
        let root = root.as_ref();
        let root = fs::canonicalize(root).map_err(|e| not_found_or_io(e, root))?;
        if !stat(&root)?.is_dir() {
            return Err(StowError::NotADirectory(root.display().to_string()));
        }
        let root_str = path_str(&root)?.to_string();
        Ok(Self {
            name: name.into(),
            root,
            root_str,
        })
    }

    /// Canonical root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the container and return every file in listing order.
    pub fn entries(&self) -> StowResult<Vec<FlatEntry>> {
        flatten(&self.root)
    }

    /// Create (or truncate) the file `name` and hand back the open writer.
    ///
    /// Unlike [`Container::put`], parent directories must already exist.
    pub fn create_item(&self, name: &str) -> StowResult<(LocalItem, File)> {
        let path = self.root.join(from_slash(name));
        let file = File::create(&path)?;
        Ok((self.item_at(path), file))
    }

    fn item_at(&self, path: PathBuf) -> LocalItem {
        LocalItem::new(path, prefix_len(&self.root_str))
    }

    /// Resolve a put target to a path below the root.
    ///
    /// Names already below the root are made relative first. Any other name
    /// is taken as relative to the root, leading separators included.
    fn put_path(&self, name: &str) -> StowResult<PathBuf> {
        let native = from_slash(name);
        let relative = match Path::new(&native).strip_prefix(&self.root) {
            Ok(rel) => path_str(rel)?.to_string(),
            Err(_) => native.trim_start_matches(crate::path::SEPARATOR).to_string(),
        };
        Ok(self.root.join(relative))
    }
}

impl Container for LocalContainer {
    type Item = LocalItem;

    fn id(&self) -> String {
        self.root_str.clone()
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn url(&self) -> StowResult<Locator> {
        Locator::from_file_path(&clean_path(&self.root))
    }

    fn item(&self, id: &str) -> StowResult<LocalItem> {
        let path = if Path::new(id).is_absolute() {
            PathBuf::from(id)
        } else {
            self.root.join(from_slash(id))
        };
        if stat(&path)?.is_dir() {
            return Err(StowError::UnexpectedDirectory(path.display().to_string()));
        }
        Ok(self.item_at(path))
    }

    fn items(
        &self,
        prefix: &str,
        cursor: &Cursor,
        page_size: usize,
        depth: usize,
    ) -> StowResult<Page<LocalItem>> {
        let filter = ListFilter::new(&self.root_str, prefix, depth);
        let page = paginate(self.entries()?, cursor, page_size)?;
        let scanned = page.items.len();

        let items: Vec<LocalItem> = page
            .items
            .into_iter()
            .map(|entry| join_str(&self.root_str, entry.name()))
            .filter(|full| filter.matches(full))
            .map(|full| self.item_at(PathBuf::from(full)))
            .collect();

        debug!(
            container = %self.name,
            prefix = filter.prefix(),
            depth,
            scanned,
            returned = items.len(),
            last = page.next.is_end(),
            "listed items"
        );
        Ok(Page::new(items, page.next))
    }

    fn remove_item(&self, id: &str) -> StowResult<()> {
        let path = Path::new(id);
        fs::remove_file(path).map_err(|e| not_found_or_io(e, path))
    }

    fn put(&self, name: &str, reader: &mut dyn Read, size: u64) -> StowResult<LocalItem> {
        let path = self.put_path(name)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // A failed copy leaves whatever was written in place.
        let mut file = File::create(&path)?;
        let written = io::copy(reader, &mut file)?;
        if size > 0 && written != size {
            return Err(StowError::SizeMismatch {
                expected: size,
                actual: written,
            });
        }

        debug!(container = %self.name, path = %path.display(), bytes = written, "put item");
        Ok(self.item_at(path))
    }
}
