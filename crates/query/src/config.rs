//! Configuration for query validation defaults.
//!
//! This module provides the defaults an embedding API layer hands to the
//! pagination and validation functions, supporting both programmatic
//! configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `QUERY_PAGE_SIZE` | 20 | Default page size |
//! | `QUERY_MAX_PAGE_SIZE` | 1000 | Maximum page size |
//! | `QUERY_LIMIT_TO_PAGE_SIZE` | false | Reject limits that differ from the page size |
//! | `QUERY_BASE_URL` | http://localhost:8080 | Base URL for pagination links |

use clap::Parser;
use url::Url;

use crate::error::QueryError;
use crate::pagination::{PageQuery, PageWindow};

/// Pagination and validation defaults for the embedding API layer.
///
/// Construct from environment variables using [`QueryConfig::from_env`],
/// from command line arguments using [`QueryConfig::parse`], or
/// programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "query-config")]
#[command(about = "Query validation defaults")]
pub struct QueryConfig {
    /// Default number of items per page.
    #[arg(long, env = "QUERY_PAGE_SIZE", default_value = "20")]
    pub page_size: u64,

    /// Maximum number of items per page.
    #[arg(long, env = "QUERY_MAX_PAGE_SIZE", default_value = "1000")]
    pub max_page_size: u64,

    /// Reject limits that differ from the page size.
    #[arg(long, env = "QUERY_LIMIT_TO_PAGE_SIZE", default_value = "false")]
    pub limit_to_page_size: bool,

    /// Base URL used when building pagination links.
    #[arg(long, env = "QUERY_BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            max_page_size: 1000,
            limit_to_page_size: false,
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

impl QueryConfig {
    /// Creates a new QueryConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables
    /// without requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Parses a page window using this configuration's defaults.
    pub fn window(&self, query: &PageQuery) -> Result<PageWindow, QueryError> {
        PageWindow::from_query(query, self.page_size, self.limit_to_page_size)
    }

    /// Returns the collection URL for a resource type name.
    pub fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.page_size == 0 {
            errors.push("Page size cannot be 0".to_string());
        }

        if self.page_size > self.max_page_size {
            errors.push("Page size cannot exceed max page size".to_string());
        }

        if Url::parse(&self.base_url).is_err() {
            errors.push(format!("Invalid base URL: {}", self.base_url));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
