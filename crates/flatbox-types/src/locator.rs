//! Canonical URLs for containers and items.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use url::Url;

use crate::error::{StowError, StowResult};

/// Scheme used by the local filesystem backend.
pub const FILE_SCHEME: &str = "file";

/// An absolute URL naming a container or item.
///
/// File paths are percent-encoded on the way in and decoded again by
/// [`Locator::to_file_path`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Locator(Url);

impl Locator {
    /// Parse an absolute URL.
    pub fn parse(raw: &str) -> StowResult<Self> {
        Url::parse(raw)
            .map(Self)
            .map_err(|e| StowError::InvalidLocator(format!("{raw}: {e}")))
    }

    /// A `file://` locator over an absolute path.
    pub fn from_file_path(path: &Path) -> StowResult<Self> {
        Url::from_file_path(path).map(Self).map_err(|()| {
            StowError::InvalidLocator(format!("not an absolute path: {}", path.display()))
        })
    }

    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Decode a `file://` locator back to a local path.
    ///
    /// Fails with `InvalidLocator` for other schemes and for file URLs
    /// naming a remote host.
    pub fn to_file_path(&self) -> StowResult<PathBuf> {
        if self.scheme() != FILE_SCHEME {
            return Err(StowError::InvalidLocator(format!(
                "unsupported scheme {:?}: {}",
                self.scheme(),
                self.0
            )));
        }
        self.0
            .to_file_path()
            .map_err(|()| StowError::InvalidLocator(format!("not a local file URL: {}", self.0)))
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Locator {
    type Err = StowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
