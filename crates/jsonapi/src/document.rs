//! Resource document values.
//!
//! Owned value types for normalized response documents. A
//! [`ResourceDocument`] pairs its primary data with a [`LinkSet`]; the data
//! is either a single [`Resource`] or an ordered collection of nested
//! documents. All types serialize with `serde`, omitting absent links,
//! empty attributes, and empty relationships from the output.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Navigation links attached to a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkSet {
    /// Link to the document itself.
    #[serde(rename = "self")]
    pub self_link: String,

    /// Previous page, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    /// Next page, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// First page, when the total count is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,

    /// Last page, when the total count is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

impl LinkSet {
    /// Creates a link set containing only a self link.
    pub fn self_only(url: impl Into<String>) -> Self {
        Self {
            self_link: url.into(),
            ..Self::default()
        }
    }
}

/// A single addressable entity with an id, type, attributes, and optional
/// relationships.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    /// The resource id, always a string in the output.
    pub id: String,

    /// The resource type name.
    #[serde(rename = "type")]
    pub resource_type: String,

    /// Plain attributes. Never contains `id` or relationship keys.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,

    /// Named references to other resources, each a nested document.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: BTreeMap<String, ResourceDocument>,
}

impl Resource {
    /// Creates a resource with no attributes or relationships.
    pub fn new(id: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            resource_type: resource_type.into(),
            attributes: Map::new(),
            relationships: BTreeMap::new(),
        }
    }
}

/// Primary content of a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocumentData {
    /// A single resource.
    Single(Box<Resource>),
    /// An ordered collection of nested documents.
    Collection(Vec<ResourceDocument>),
}

/// A normalized, link-annotated document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceDocument {
    /// The primary data.
    pub data: DocumentData,
    /// Navigation links for the data.
    pub links: LinkSet,
}

impl ResourceDocument {
    /// Creates a document wrapping a single resource.
    pub fn single(resource: Resource, links: LinkSet) -> Self {
        Self {
            data: DocumentData::Single(Box::new(resource)),
            links,
        }
    }

    /// Creates a document wrapping a collection, linked to its collection URL.
    pub fn collection(documents: Vec<ResourceDocument>, collection_url: impl Into<String>) -> Self {
        Self {
            data: DocumentData::Collection(documents),
            links: LinkSet::self_only(collection_url),
        }
    }

    /// Returns the document's single resource, if it holds one.
    pub fn resource(&self) -> Option<&Resource> {
        match &self.data {
            DocumentData::Single(resource) => Some(resource),
            DocumentData::Collection(_) => None,
        }
    }

    /// Returns the document's collection, if it holds one.
    pub fn documents(&self) -> Option<&[ResourceDocument]> {
        match &self.data {
            DocumentData::Single(_) => None,
            DocumentData::Collection(documents) => Some(documents),
        }
    }

    /// Converts the document to a JSON value.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
