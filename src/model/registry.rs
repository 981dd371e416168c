//! Resource registry: `id://` reference resolution.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// URI scheme prefix carried by every resource reference.
pub const ID_SCHEME: &str = "id://";

/// Lookup table mapping resource ids to normalized relative paths.
///
/// Built once from `Reference.xml` relationship entries and read-only
/// thereafter. A miss is a non-fatal lookup failure, not an error: the
/// referencing image is simply omitted from the artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRegistry {
    entries: BTreeMap<String, String>,
}

impl ResourceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource, normalizing path separators to forward slashes.
    pub fn insert(&mut self, id: impl Into<String>, target: impl Into<String>) {
        self.entries.insert(id.into(), target.into().replace('\\', "/"));
    }

    /// Look up a bare resource id.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// Resolve an `id://`-prefixed reference to a relative path.
    ///
    /// Returns `None` for references without the scheme prefix and for ids
    /// with no registry entry.
    pub fn resolve(&self, source: &str) -> Option<&str> {
        source.strip_prefix(ID_SCHEME).and_then(|id| self.get(id))
    }

    /// Number of registered resources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate (id, path) pairs in deterministic id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
