//! Local filesystem backend for flatbox.
//!
//! A location is a directory; each of its immediate subdirectories is a
//! container, and every file anywhere below a container's directory is an
//! item named by its path relative to that directory.
//!
//! # Listing
//!
//! Listing a container walks its whole tree, orders the files shallowest
//! first (ties broken by name), cuts one page at the cursor, and finally
//! applies the prefix/depth filter to that page:
//!
//! - [`flatten`] -- recursive walk producing [`FlatEntry`] values
//! - [`order`] -- the total order over relative names
//! - [`ListFilter`] -- byte-wise prefix match with an optional depth bound
//! - [`paginate()`] -- cursor arithmetic over the unfiltered sequence
//!
//! # Key Types
//!
//! - [`LocalLocation`] -- dials a root directory and manages containers
//! - [`LocalContainer`] -- a directory tree exposed as a flat namespace
//! - [`LocalItem`] -- a file below a container

pub mod container;
pub mod filter;
pub mod flatten;
pub mod item;
pub mod location;
pub mod order;
pub mod paginate;
pub mod path;

pub use container::LocalContainer;
pub use filter::ListFilter;
pub use flatten::{flatten, FlatEntry};
pub use item::LocalItem;
pub use location::LocalLocation;
pub use paginate::{paginate, Named};

// Re-export the backend-neutral seams so callers need a single import.
pub use flatbox_types::{
    ConfigMap, Container, Cursor, Item, Locator, Location, Metadata, Page, StowError, StowResult,
};
