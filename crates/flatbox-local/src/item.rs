use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use flatbox_types::{Item, Locator, Metadata, StowResult};

use crate::path::{clean_path, not_found_or_io, stat};

/// A file below a local container's root.
///
/// Holds only the absolute path and the length of the container prefix used
/// to derive its name. Nothing is cached; every accessor stats or opens the
/// file afresh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalItem {
    path: PathBuf,
    prefix_len: usize,
}

impl LocalItem {
    pub(crate) fn new(path: PathBuf, prefix_len: usize) -> Self {
        Self { path, prefix_len }
    }

    /// Absolute path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file for reading.
    pub fn open_file(&self) -> StowResult<File> {
        File::open(&self.path).map_err(|e| not_found_or_io(e, &self.path))
    }

    /// Read the whole file into memory.
    pub fn read_all(&self) -> StowResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.open_file()?.read_to_end(&mut buf)?;
        Ok(buf)
    }

    fn stat(&self) -> StowResult<fs::Metadata> {
        stat(&self.path)
    }

    fn modified(&self) -> StowResult<DateTime<Utc>> {
        Ok(self.stat()?.modified()?.into())
    }
}

impl Item for LocalItem {
    fn id(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    fn name(&self) -> String {
        let id = self.id();
        match id.get(self.prefix_len..) {
            Some(name) => name.to_string(),
            None => id,
        }
    }

    fn url(&self) -> StowResult<Locator> {
        Locator::from_file_path(&clean_path(&self.path))
    }

    fn size(&self) -> StowResult<u64> {
        Ok(self.stat()?.len())
    }

    fn open(&self) -> StowResult<Box<dyn Read + Send>> {
        Ok(Box::new(self.open_file()?))
    }

    fn etag(&self) -> StowResult<String> {
        Ok(self.modified()?.to_rfc3339_opts(SecondsFormat::Nanos, true))
    }

    fn last_modified(&self) -> StowResult<DateTime<Utc>> {
        self.modified()
    }

    fn metadata(&self) -> StowResult<Metadata> {
        let meta = self.stat()?;
        Ok(Metadata {
            path: self.id(),
            name: self.name(),
            size: meta.len(),
            is_dir: meta.is_dir(),
            mode: mode_string(&meta),
            mod_time: meta.modified()?.into(),
        })
    }
}

#[cfg(unix)]
fn mode_string(meta: &fs::Metadata) -> Option<String> {
    use std::os::unix::fs::PermissionsExt;
    Some(format!("{:o}", meta.permissions().mode() & 0o7777))
}

#[cfg(not(unix))]
fn mode_string(_meta: &fs::Metadata) -> Option<String> {
    None
}
