//! Backend-neutral types for flatbox blob storage.
//!
//! flatbox presents a storage backend as a set of containers, each holding a
//! flat namespace of items addressed by path-like keys. This crate defines
//! the seams every backend implements and the value types that cross them.
//!
//! # Key Types
//!
//! - [`Location`] -- Entry point that resolves configuration into containers
//! - [`Container`] -- A flat, paginated namespace of items
//! - [`Item`] -- A single addressable blob inside a container
//! - [`Cursor`] -- Opaque continuation token for paginated listings
//! - [`Page`] -- One page of a listing plus the cursor for the next one
//! - [`ConfigMap`] -- String key/value configuration used to dial a location
//! - [`Locator`] -- Canonical URL of a container or item
//! - [`StowError`] -- Closed set of failure kinds shared by all backends

pub mod config;
pub mod cursor;
pub mod error;
pub mod locator;
pub mod metadata;
pub mod traits;

pub use config::{ConfigMap, CONFIG_KEY_PATH};
pub use cursor::{Cursor, Page};
pub use error::{StowError, StowResult};
pub use locator::{Locator, FILE_SCHEME};
pub use metadata::Metadata;
pub use traits::{Container, Item, Location};
