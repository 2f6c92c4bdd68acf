//! # meridian-query - Query Validation and Pagination
//!
//! Companion crate to `meridian-jsonapi`: validates the untyped query input
//! an API layer receives and computes pagination links for collection
//! responses.
//!
//! ## Features
//!
//! - **Required arguments**: [`assert_args`] fails fast on the first
//!   missing or null key of a request record
//! - **Page windows**: [`PageWindow`] parses raw `offset`/`limit` strings
//!   into a validated window, rejecting anything that is not an exact
//!   base-10 integer on a page boundary
//! - **Pagination links**: [`pagination_links`] computes the
//!   self/prev/next/first/last [`LinkSet`](meridian_jsonapi::LinkSet) for a
//!   page, with or without a known total count
//! - **Identifiers**: [`validate_uuid`] checks id path parameters
//! - **Configuration**: [`QueryConfig`] carries env-overridable defaults
//!
//! All functions are pure and synchronous; the embedding HTTP layer decides
//! how errors map onto responses (every [`QueryError`] is an invalid-usage
//! condition, rendered as HTTP 400 by convention).
//!
//! ## Quick Start
//!
//! ```rust
//! use meridian_query::{PageWindow, pagination_links};
//!
//! let window = PageWindow::parse(Some("40"), Some("20"), 20, false)?;
//! let links = pagination_links("test.com/people", window.offset(), window.limit(), None);
//!
//! assert_eq!(links.self_link, "test.com/people?offset=40&limit=20");
//! assert_eq!(links.prev.as_deref(), Some("test.com/people?offset=20&limit=20"));
//! # Ok::<(), meridian_query::QueryError>(())
//! ```

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod args;
pub mod config;
pub mod error;
pub mod pagination;

// Re-export commonly used types
pub use args::{assert_args, validate_uuid};
pub use config::QueryConfig;
pub use error::QueryError;
pub use pagination::{DEFAULT_PAGE_SIZE, PageQuery, PageWindow, pagination_links};

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "meridian_query={},meridian_jsonapi={}",
            level, level
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
