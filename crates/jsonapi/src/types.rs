//! Caller-supplied type metadata.
//!
//! A [`TypeMap`] tells the serializer which record keys refer to other
//! resources and how to build links for them. It is supplied per call and
//! never persisted: the serializer treats it as an immutable configuration
//! value, deriving a re-rooted copy at each relationship boundary instead
//! of mutating it in place.

use std::collections::HashMap;

/// Key under which the top-level record's descriptor is registered.
pub const ROOT_KEY: &str = "root";

/// Describes how a record key maps to a resource kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// The resource type name (e.g. "people").
    pub resource_type: String,
    /// The canonical collection URL (e.g. "example.com/people").
    pub url: String,
}

impl TypeDescriptor {
    /// Creates a new descriptor.
    pub fn new(resource_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            url: url.into(),
        }
    }

    /// Returns the canonical URL of a single resource in this collection.
    pub fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.url, id)
    }
}

/// Mapping from record keys to type descriptors.
///
/// The descriptor for the top-level record lives under [`ROOT_KEY`]. Any
/// other entry marks its key as a relationship wherever it appears in the
/// record tree.
#[derive(Debug, Clone, Default)]
pub struct TypeMap {
    entries: HashMap<String, TypeDescriptor>,
}

impl TypeMap {
    /// Creates an empty type map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a type map with the given root descriptor.
    pub fn with_root(descriptor: TypeDescriptor) -> Self {
        Self::new().with(ROOT_KEY, descriptor)
    }

    /// Registers a descriptor for a key.
    pub fn with(mut self, key: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        self.entries.insert(key.into(), descriptor);
        self
    }

    /// Returns the descriptor for the top-level record, if registered.
    pub fn root(&self) -> Option<&TypeDescriptor> {
        self.entries.get(ROOT_KEY)
    }

    /// Returns the descriptor registered for a key.
    pub fn get(&self, key: &str) -> Option<&TypeDescriptor> {
        self.entries.get(key)
    }

    /// Returns true if a descriptor is registered for the key.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns a copy of this map whose root descriptor is `root`.
    ///
    /// Used at each relationship boundary: the nested record is serialized
    /// with the relationship's own descriptor as its root, while all other
    /// entries stay visible for deeper nesting.
    pub fn rebase(&self, root: TypeDescriptor) -> Self {
        self.clone().with(ROOT_KEY, root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_url() {
        let descriptor = TypeDescriptor::new("people", "example.com/people");
        assert_eq!(descriptor.item_url("123"), "example.com/people/123");
    }

    #[test]
    fn test_root_lookup() {
        let types = TypeMap::with_root(TypeDescriptor::new("people", "/people"));
        assert_eq!(types.root().unwrap().resource_type, "people");
        assert!(types.get("pets").is_none());
    }

    #[test]
    fn test_rebase_replaces_root_and_keeps_entries() {
        let types = TypeMap::with_root(TypeDescriptor::new("people", "/people"))
            .with("town", TypeDescriptor::new("towns", "/towns"));

        let rebased = types.rebase(TypeDescriptor::new("towns", "/towns"));
        assert_eq!(rebased.root().unwrap().resource_type, "towns");
        assert!(rebased.contains("town"));

        // The original map is untouched.
        assert_eq!(types.root().unwrap().resource_type, "people");
    }
}
