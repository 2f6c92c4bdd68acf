//! # meridian-jsonapi - Resource Document Model and Serializer
//!
//! This crate provides the core of the Meridian API toolkit: a recursive
//! transform that converts an arbitrary nested record (with ids) into a
//! normalized, link-annotated document graph in the JSON:API style.
//!
//! The crate is deliberately transport-agnostic. It consumes plain
//! [`serde_json::Value`] records already fetched from storage and produces
//! owned document values; encoding the result and shipping it over HTTP is
//! the embedding layer's job. Pagination links for collection endpoints are
//! a separate mechanism provided by the companion `meridian-query` crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use meridian_jsonapi::{serialize, TypeDescriptor, TypeMap};
//! use serde_json::json;
//!
//! let record = json!({
//!     "id": 123,
//!     "name": "Alice",
//!     "town": { "id": 456, "name": "Funville" }
//! });
//!
//! let types = TypeMap::with_root(TypeDescriptor::new("people", "example.com/people"))
//!     .with("town", TypeDescriptor::new("towns", "example.com/towns"));
//!
//! let document = serialize(&record, &types).unwrap();
//! assert_eq!(document.links.self_link, "example.com/people/123");
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Caller-supplied type metadata (`TypeDescriptor`, `TypeMap`)
//! - [`document`] - Owned document values (`Resource`, `ResourceDocument`, `LinkSet`)
//! - [`serializer`] - The recursive record-to-document transform
//! - [`error`] - Error types

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod error;
pub mod serializer;
pub mod types;

// Re-export commonly used types
pub use document::{DocumentData, LinkSet, Resource, ResourceDocument};
pub use error::DocumentError;
pub use serializer::serialize;
pub use types::{ROOT_KEY, TypeDescriptor, TypeMap};
