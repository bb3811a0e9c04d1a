use std::fs;
use std::path::{Component, Path, PathBuf};

use flatbox_types::{
    ConfigMap, Container, Cursor, Locator, Page, StowError, StowResult, CONFIG_KEY_PATH,
};
use tracing::info;

use crate::container::LocalContainer;
use crate::item::LocalItem;
use crate::paginate::{paginate, Named};
use crate::path::{from_slash, not_found_or_io, path_str, stat};

/// A directory whose immediate subdirectories are containers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalLocation {
    root: PathBuf,
}

/// Subdirectory found while listing containers.
struct ContainerDir {
    name: String,
    path: PathBuf,
}

impl Named for ContainerDir {
    fn flat_name(&self) -> &str {
        &self.name
    }
}

impl LocalLocation {
    /// Open the directory at `root`, which must exist.
    pub fn open(root: impl AsRef<Path>) -> StowResult<Self> {
        let root = root.as_ref();
        let root = fs::canonicalize(root).map_err(|e| not_found_or_io(e, root))?;
        if !stat(&root)?.is_dir() {
            return Err(StowError::NotADirectory(root.display().to_string()));
        }
        Ok(Self { root })
    }

    /// Canonical root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a container id (absolute path) or name to its directory.
    fn container_path(&self, id: &str) -> PathBuf {
        if Path::new(id).is_absolute() {
            PathBuf::from(id)
        } else {
            self.root.join(from_slash(id))
        }
    }

    /// Container names are single path components.
    fn validate_name(name: &str) -> StowResult<()> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(()),
            _ => Err(StowError::InvalidArgument(format!(
                "invalid container name: {name:?}"
            ))),
        }
    }

    fn container_dirs(&self, prefix: &str) -> StowResult<Vec<ContainerDir>> {
        let mut dirs = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.starts_with(prefix) {
                dirs.push(ContainerDir {
                    name: name.to_string(),
                    path: path.clone(),
                });
            }
        }
        dirs.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
        Ok(dirs)
    }
}

impl flatbox_types::Location for LocalLocation {
    type Container = LocalContainer;

    fn dial(config: &ConfigMap) -> StowResult<Self> {
        Self::open(config.require(CONFIG_KEY_PATH)?)
    }

    fn containers(
        &self,
        prefix: &str,
        cursor: &Cursor,
        page_size: usize,
    ) -> StowResult<Page<LocalContainer>> {
        let page = paginate(self.container_dirs(prefix)?, cursor, page_size)?;
        let containers = page
            .items
            .into_iter()
            .map(|dir| LocalContainer::open(dir.name, dir.path))
            .collect::<StowResult<Vec<_>>>()?;
        Ok(Page::new(containers, page.next))
    }

    fn container(&self, id: &str) -> StowResult<LocalContainer> {
        let path = self.container_path(id);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| id.to_string());
        LocalContainer::open(name, &path)
    }

    fn create_container(&self, name: &str) -> StowResult<LocalContainer> {
        Self::validate_name(name)?;
        let path = self.root.join(name);
        fs::create_dir_all(&path)?;
        info!(container = name, path = %path.display(), "created container");
        LocalContainer::open(name, &path)
    }

    fn remove_container(&self, id: &str) -> StowResult<()> {
        let path = self.container_path(id);
        fs::remove_dir_all(&path).map_err(|e| not_found_or_io(e, &path))?;
        info!(path = %path.display(), "removed container");
        Ok(())
    }

    fn item_by_url(&self, url: &Locator) -> StowResult<LocalItem> {
        let path = url.to_file_path()?;
        let relative = path
            .strip_prefix(&self.root)
            .map_err(|_| StowError::NotFound(url.to_string()))?;
        let container_name = match relative.components().next() {
            Some(Component::Normal(name)) => path_str(Path::new(name))?.to_string(),
            _ => return Err(StowError::NotFound(url.to_string())),
        };
        let container = self.container(&container_name)?;
        container.item(path_str(&path)?)
    }
}
