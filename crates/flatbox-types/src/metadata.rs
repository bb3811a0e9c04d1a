use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Descriptive attributes of an item, captured from a fresh stat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Backend path of the item (its identity).
    pub path: String,
    /// Name relative to the owning container.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Whether the path refers to a directory.
    pub is_dir: bool,
    /// Permission bits in octal, where the platform has them.
    pub mode: Option<String>,
    /// Last modification time.
    pub mod_time: DateTime<Utc>,
}
