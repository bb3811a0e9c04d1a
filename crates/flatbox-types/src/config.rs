use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{StowError, StowResult};

/// Config key naming the root directory of a local location.
pub const CONFIG_KEY_PATH: &str = "path";

/// String key/value configuration used to dial a [`Location`](crate::Location).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMap(BTreeMap<String, String>);

impl ConfigMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Get a value that must be present and non-empty.
    pub fn require(&self, key: &str) -> StowResult<&str> {
        match self.get(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(StowError::MissingConfig(key.to_string())),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConfigMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_present_value() {
        let cfg = ConfigMap::new().with(CONFIG_KEY_PATH, "/srv/data");
        assert_eq!(cfg.require(CONFIG_KEY_PATH).unwrap(), "/srv/data");
    }

    #[test]
    fn require_missing_or_empty_fails() {
        let cfg = ConfigMap::new();
        assert!(matches!(
            cfg.require(CONFIG_KEY_PATH),
            Err(StowError::MissingConfig(ref k)) if k == "path"
        ));

        let cfg = ConfigMap::new().with(CONFIG_KEY_PATH, "");
        assert!(matches!(
            cfg.require(CONFIG_KEY_PATH),
            Err(StowError::MissingConfig(_))
        ));
    }

    #[test]
    fn collects_from_pairs() {
        let cfg: ConfigMap = [("path", "/tmp"), ("other", "x")].into_iter().collect();
        assert_eq!(cfg.get("other"), Some("x"));
    }

    #[test]
    fn serializes_as_plain_map() {
        let cfg = ConfigMap::new().with("path", "/tmp");
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(json, r#"{"path":"/tmp"}"#);
    }
}
