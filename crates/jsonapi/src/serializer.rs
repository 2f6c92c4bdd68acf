//! Recursive resource-document serialization.
//!
//! Converts a nested record into a normalized document graph. Keys named in
//! the caller's [`TypeMap`] become relationships, rendered as nested
//! documents with their own links; every other key is carried as a plain
//! attribute. The same logic applies recursively to each relationship it
//! discovers.
//!
//! # Classification
//!
//! Each key of a record is classified exactly once, in this precedence
//! order:
//!
//! 1. null values are dropped from the output entirely
//! 2. a non-empty array under a typed key is a list relationship; any
//!    other array is an attribute, carried verbatim - an empty array is
//!    always an attribute, even when its key is typed
//! 3. an object under a typed key is a singular relationship; any other
//!    object is an attribute, carried verbatim and not recursed into
//! 4. numbers and booleans are attributes, carried verbatim
//! 5. everything else is an attribute in its string form
//!
//! # Example
//!
//! ```rust
//! use meridian_jsonapi::{serialize, TypeDescriptor, TypeMap};
//! use serde_json::json;
//!
//! let record = json!({
//!     "id": 123,
//!     "name": "Alice",
//!     "color": { "r": 10, "g": 10, "b": 10 },
//!     "town": { "id": 456, "name": "Funville" },
//!     "pets": [
//!         { "id": 678, "species": "dog" },
//!         { "id": 789, "species": "cat" }
//!     ]
//! });
//!
//! let types = TypeMap::with_root(TypeDescriptor::new("people", "example.com/people"))
//!     .with("town", TypeDescriptor::new("towns", "example.com/towns"))
//!     .with("pets", TypeDescriptor::new("pets", "example.com/pets"));
//!
//! let document = serialize(&record, &types).unwrap();
//! let json = document.to_json().unwrap();
//!
//! assert_eq!(json["links"]["self"], "example.com/people/123");
//! assert_eq!(json["data"]["attributes"]["color"]["r"], 10);
//! assert_eq!(
//!     json["data"]["relationships"]["town"]["links"]["self"],
//!     "example.com/towns/456"
//! );
//! assert_eq!(
//!     json["data"]["relationships"]["pets"]["links"]["self"],
//!     "example.com/pets"
//! );
//! ```
//!
//! # Input shape
//!
//! The input is assumed to be a tree. A cyclic structure recurses without
//! bound and overflows the stack; detecting cycles is the caller's
//! responsibility.

use serde_json::{Map, Value};
use tracing::debug;

use crate::document::{LinkSet, Resource, ResourceDocument};
use crate::error::DocumentError;
use crate::types::{TypeDescriptor, TypeMap};

/// How a record key is carried into the output document.
///
/// Computed once per key so the attribute/relationship decision lives in a
/// single place.
enum FieldClass<'a> {
    /// Dropped from the output entirely.
    Skip,
    /// Plain attribute, carried as the given value.
    Attribute(Value),
    /// Nested record rendered as its own document.
    Singular(&'a Map<String, Value>, &'a TypeDescriptor),
    /// Non-empty sequence of records rendered as a document collection.
    Collection(&'a [Value], &'a TypeDescriptor),
}

/// Serializes `record` into a [`ResourceDocument`], using `types` to decide
/// which keys are relationships and how to build their links.
///
/// # Errors
///
/// Fails with [`DocumentError::MissingRootDescriptor`] if `types` has no
/// root entry, and with [`DocumentError::MissingId`] if any record reached
/// through the resource path lacks a non-empty `id`. Serialization aborts
/// on the first malformed node; no partial document is returned.
pub fn serialize(record: &Value, types: &TypeMap) -> Result<ResourceDocument, DocumentError> {
    let root = types.root().ok_or(DocumentError::MissingRootDescriptor)?;
    let map = record.as_object().ok_or(DocumentError::NotARecord)?;

    debug!(resource_type = %root.resource_type, "serializing resource document");

    serialize_record(map, types)
}

/// Serializes one record node. Applied recursively to every relationship.
fn serialize_record(
    record: &Map<String, Value>,
    types: &TypeMap,
) -> Result<ResourceDocument, DocumentError> {
    let descriptor = types.root().ok_or(DocumentError::MissingRootDescriptor)?;
    let id = record_id(record)?;

    let links = LinkSet::self_only(descriptor.item_url(&id));
    let mut resource = Resource::new(id, descriptor.resource_type.clone());

    for (key, value) in record {
        if key == "id" {
            continue;
        }

        match classify(key, value, types) {
            FieldClass::Skip => {}
            FieldClass::Attribute(value) => {
                resource.attributes.insert(key.clone(), value);
            }
            FieldClass::Singular(child, child_type) => {
                let derived = types.rebase(child_type.clone());
                let document = serialize_record(child, &derived)?;
                resource.relationships.insert(key.clone(), document);
            }
            FieldClass::Collection(children, child_type) => {
                let derived = types.rebase(child_type.clone());
                let mut documents = Vec::with_capacity(children.len());
                for child in children {
                    let child = child.as_object().ok_or(DocumentError::NotARecord)?;
                    documents.push(serialize_record(child, &derived)?);
                }
                // The wrapper links to the collection itself, not to a page
                // of it; pagination is a separate mechanism.
                let wrapper = ResourceDocument::collection(documents, child_type.url.clone());
                resource.relationships.insert(key.clone(), wrapper);
            }
        }
    }

    Ok(ResourceDocument::single(resource, links))
}

/// Extracts the record id in its string form.
fn record_id(record: &Map<String, Value>) -> Result<String, DocumentError> {
    let id = match record.get("id") {
        None | Some(Value::Null) => return Err(DocumentError::MissingId),
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        Some(_) => return Err(DocumentError::UnsupportedId),
    };

    if id.is_empty() {
        return Err(DocumentError::MissingId);
    }

    Ok(id)
}

/// Classifies a single record key.
fn classify<'a>(key: &str, value: &'a Value, types: &'a TypeMap) -> FieldClass<'a> {
    match value {
        Value::Null => FieldClass::Skip,
        Value::Array(items) => match types.get(key) {
            Some(descriptor) if !items.is_empty() => FieldClass::Collection(items, descriptor),
            // Empty sequences stay attributes even under a typed key.
            _ => FieldClass::Attribute(value.clone()),
        },
        Value::Object(child) => match types.get(key) {
            Some(descriptor) => FieldClass::Singular(child, descriptor),
            None => FieldClass::Attribute(value.clone()),
        },
        // Numbers, booleans, and strings are already their own JSON form.
        _ => FieldClass::Attribute(value.clone()),
    }
}
