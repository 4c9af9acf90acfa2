use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

pub mod map;

pub use map::MapRedirector;

/// Persisted form of a store: hostname -> (path -> target).
pub type Snapshot = HashMap<String, HashMap<String, String>>;

/// One rule: requests to `hostname` with path `url` are redirected to `target`.
///
/// Two redirects are equal when they share hostname and path, regardless of target.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Redirect {
    #[serde(rename = "Hostname")]
    pub hostname: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Target")]
    pub target: String,
}

impl Redirect {
    pub fn new(
        hostname: impl Into<String>,
        url: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            url: url.into(),
            target: target.into(),
        }
    }
}

impl PartialEq for Redirect {
    fn eq(&self, other: &Self) -> bool {
        self.hostname == other.hostname && self.url == other.url
    }
}

impl Eq for Redirect {}

impl Hash for Redirect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hostname.hash(state);
        self.url.hash(state);
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("no redirect found for {hostname}{path}")]
    NotFound { hostname: String, path: String },
    #[error("redirect has empty hostname")]
    EmptyHostname,
    #[error("redirect has empty url")]
    EmptyPath,
}

/// Storage of redirect rules, shared by every request handler.
///
/// Listing operations return rules in no particular order.
pub trait Redirector: Send + Sync + 'static {
    /// Target for an exact (hostname, path) pair.
    fn target(&self, hostname: &str, path: &str) -> Result<String, StoreError>;

    fn all(&self) -> Vec<Redirect>;

    /// Rules for one host, empty if the host is unknown.
    fn for_host(&self, hostname: &str) -> Vec<Redirect>;

    fn get(&self, hostname: &str, path: &str) -> Option<Redirect>;

    /// Inserts or replaces the target for (hostname, path).
    fn add(&self, redirect: Redirect) -> Result<(), StoreError>;

    /// Removes one rule. Removing a missing rule is a no-op.
    fn remove(&self, hostname: &str, path: &str);

    /// Removes every rule for a host. Removing a missing host is a no-op.
    fn remove_host(&self, hostname: &str);

    fn snapshot(&self) -> Snapshot;

    fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(&self.snapshot())
    }
}

pub fn decode_snapshot(bytes: &[u8]) -> Result<Snapshot, serde_json::Error> {
    serde_json::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_target() {
        let a = Redirect::new("example.com", "/", "http://a.example");
        let b = Redirect::new("example.com", "/", "http://b.example");
        let c = Redirect::new("example.com", "/other", "http://a.example");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let r = Redirect::new("example.com", "/", "http://dest.example");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Hostname": "example.com",
                "URL": "/",
                "Target": "http://dest.example",
            })
        );
    }

    #[test]
    fn decodes_snapshot_object() {
        let snapshot =
            decode_snapshot(br#"{"a.example": {"/": "http://x", "/y": "http://y"}, "b.example": {}}"#)
                .unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot["a.example"]["/y"], "http://y");
        assert!(snapshot["b.example"].is_empty());
    }

    #[test]
    fn rejects_non_object_snapshot() {
        assert!(decode_snapshot(b"[1, 2, 3]").is_err());
        assert!(decode_snapshot(b"{\"a\": {\"/\": 1}}").is_err());
    }
}
