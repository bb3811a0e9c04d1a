use std::io::Read;

use chrono::{DateTime, Utc};

use crate::config::ConfigMap;
use crate::cursor::{Cursor, Page};
use crate::error::StowResult;
use crate::locator::Locator;
use crate::metadata::Metadata;

/// A single addressable blob inside a container.
///
/// Items are value-like descriptors. They hold no open handles; every
/// accessor that touches content or attributes goes back to the backend.
pub trait Item: Send + Sync {
    /// Stable identity, accepted by [`Container::item`] and
    /// [`Container::remove_item`].
    fn id(&self) -> String;

    /// Name relative to the owning container.
    fn name(&self) -> String;

    /// Canonical URL of the item.
    fn url(&self) -> StowResult<Locator>;

    /// Current size in bytes.
    fn size(&self) -> StowResult<u64>;

    /// Open the content for reading.
    fn open(&self) -> StowResult<Box<dyn Read + Send>>;

    /// Opaque version tag that changes whenever the content is rewritten.
    fn etag(&self) -> StowResult<String>;

    /// Last modification time.
    fn last_modified(&self) -> StowResult<DateTime<Utc>>;

    /// Snapshot of the item's attributes.
    fn metadata(&self) -> StowResult<Metadata>;
}

/// A flat, paginated namespace of items.
///
/// Implementations hold no mutable state and must be safe to share across
/// threads; concurrent listings are independent of one another.
pub trait Container: Send + Sync {
    type Item: Item;

    /// Stable identity of the container.
    fn id(&self) -> String;

    /// Logical name of the container.
    fn name(&self) -> String;

    /// Canonical URL of the container.
    fn url(&self) -> StowResult<Locator>;

    /// Fetch a single item by identity or by name.
    ///
    /// Fails with `NotFound` if the item does not exist and with
    /// `UnexpectedDirectory` if it names a directory.
    fn item(&self, id: &str) -> StowResult<Self::Item>;

    /// List one page of items.
    ///
    /// `prefix` restricts results to names starting with it; `depth` bounds
    /// how many nested levels below the prefix are revealed (0 = unlimited).
    /// Pass [`Cursor::Start`] for the first page and the returned
    /// [`Page::next`] for subsequent ones until it is [`Cursor::End`].
    fn items(
        &self,
        prefix: &str,
        cursor: &Cursor,
        page_size: usize,
        depth: usize,
    ) -> StowResult<Page<Self::Item>>;

    /// Remove the item with the given identity.
    fn remove_item(&self, id: &str) -> StowResult<()>;

    /// Stream `reader` into the item called `name`, replacing any content.
    ///
    /// When `size` is positive the number of bytes copied must equal it,
    /// otherwise the call fails with `SizeMismatch`.
    fn put(&self, name: &str, reader: &mut dyn Read, size: u64) -> StowResult<Self::Item>;
}

/// Entry point of a backend: resolves configuration into containers.
pub trait Location: Send + Sync {
    type Container: Container;

    /// Connect to the backend described by `config`.
    fn dial(config: &ConfigMap) -> StowResult<Self>
    where
        Self: Sized;

    /// List one page of containers whose names start with `prefix`.
    fn containers(
        &self,
        prefix: &str,
        cursor: &Cursor,
        page_size: usize,
    ) -> StowResult<Page<Self::Container>>;

    /// Fetch a container by identity or by name.
    fn container(&self, id: &str) -> StowResult<Self::Container>;

    /// Create a container, succeeding if it already exists.
    fn create_container(&self, name: &str) -> StowResult<Self::Container>;

    /// Remove a container and everything in it.
    fn remove_container(&self, id: &str) -> StowResult<()>;

    /// Resolve an item from its canonical URL.
    fn item_by_url(&self, url: &Locator) -> StowResult<<Self::Container as Container>::Item>;
}
