//! Offset/limit parsing and pagination link building.
//!
//! Collection endpoints page through their results with an `offset`/`limit`
//! window. [`PageWindow::parse`] turns the raw query parameters into a
//! validated window, and [`pagination_links`] computes the navigation
//! [`LinkSet`] for a page.

use meridian_jsonapi::LinkSet;
use serde::Deserialize;
use tracing::trace;

use crate::error::QueryError;

/// Default page size when the caller does not configure one.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Raw pagination query parameters.
///
/// Values are kept exactly as the client sent them so that validation can
/// reject anything that does not round-trip as a base-10 integer. URLs in
/// the response must match the requested address, which matters for
/// caching.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    /// The `offset` parameter, verbatim.
    pub offset: Option<String>,

    /// The `limit` parameter, verbatim.
    pub limit: Option<String>,
}

/// A validated `(offset, limit)` slice of an ordered collection.
///
/// The offset is always a non-negative multiple of the limit, and the limit
/// is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    offset: u64,
    limit: u64,
}

impl PageWindow {
    /// Parses and validates raw pagination parameters.
    ///
    /// A missing offset defaults to `0`; a missing limit defaults to
    /// `page_size`.
    ///
    /// # Errors
    ///
    /// Fails with [`QueryError::InvalidPagination`] when:
    ///
    /// - either parameter is not an exact base-10 integer (floats,
    ///   non-numeric strings, leading zeros, and explicit signs are all
    ///   rejected by the round-trip check)
    /// - `limit_to_page_size` is set and the limit differs from `page_size`
    /// - either value is negative
    /// - the limit is zero
    /// - the offset does not land on a page boundary for the limit
    pub fn parse(
        raw_offset: Option<&str>,
        raw_limit: Option<&str>,
        page_size: u64,
        limit_to_page_size: bool,
    ) -> Result<Self, QueryError> {
        let default_limit = page_size.to_string();
        let offset_query = raw_offset.unwrap_or("0");
        let limit_query = raw_limit.unwrap_or(&default_limit);

        // First check that the passed parameters are integers.
        let offset = parse_exact_integer(offset_query)?;
        let limit = parse_exact_integer(limit_query)?;

        // Then check that offset and limit are sensible sizes with respect
        // to one another.
        if limit_to_page_size && limit != page_size as i64 {
            return Err(QueryError::InvalidPagination {
                message: format!("limit must equal the page size of {}", page_size),
            });
        }
        if offset < 0 || limit < 0 {
            return Err(QueryError::InvalidPagination {
                message: "offset and limit must not be negative".to_string(),
            });
        }
        if limit == 0 {
            return Err(QueryError::InvalidPagination {
                message: "limit must be greater than zero".to_string(),
            });
        }
        if offset % limit != 0 {
            return Err(QueryError::InvalidPagination {
                message: format!("offset must be a multiple of {}", limit),
            });
        }

        trace!(offset, limit, "validated page window");

        Ok(Self {
            offset: offset as u64,
            limit: limit as u64,
        })
    }

    /// Parses the parameters carried by a [`PageQuery`].
    pub fn from_query(
        query: &PageQuery,
        page_size: u64,
        limit_to_page_size: bool,
    ) -> Result<Self, QueryError> {
        Self::parse(
            query.offset.as_deref(),
            query.limit.as_deref(),
            page_size,
            limit_to_page_size,
        )
    }

    /// Returns the number of items to skip.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the number of items per page.
    pub fn limit(&self) -> u64 {
        self.limit
    }
}

/// Parses a base-10 integer, rejecting any input that does not re-stringify
/// to exactly the original text.
fn parse_exact_integer(raw: &str) -> Result<i64, QueryError> {
    let parsed: i64 = raw.parse().map_err(|_| integer_error())?;
    if parsed.to_string() != raw {
        return Err(integer_error());
    }
    Ok(parsed)
}

fn integer_error() -> QueryError {
    QueryError::InvalidPagination {
        message: "pagination parameters must be integers".to_string(),
    }
}

/// Builds the navigation links for one page of a collection.
///
/// `self` is always present. `prev` appears for any nonzero offset. When
/// `count` is a nonzero total, `next` appears only while a further page
/// exists, and `first`/`last` are included. Without a count the caller does
/// not know the total, so an open-ended `next` is always offered and
/// `first`/`last` are omitted.
///
/// A count of zero behaves exactly like an absent count: an empty dataset
/// is indistinguishable from an unknown total in the produced links.
///
/// The offset is expected to be a non-negative multiple of `page_size`, as
/// produced by [`PageWindow::parse`], and `page_size` must be nonzero.
pub fn pagination_links(
    base_url: &str,
    offset: u64,
    page_size: u64,
    count: Option<u64>,
) -> LinkSet {
    let mut links = LinkSet::self_only(page_url(base_url, offset, page_size));

    if offset != 0 {
        links.prev = Some(page_url(
            base_url,
            offset.saturating_sub(page_size),
            page_size,
        ));
    }

    match count {
        Some(count) if count > 0 => {
            if offset + page_size < count {
                links.next = Some(page_url(base_url, offset + page_size, page_size));
            }
            links.first = Some(page_url(base_url, 0, page_size));
            let last_offset = (count / page_size) * page_size;
            links.last = Some(page_url(base_url, last_offset, page_size));
        }
        _ => {
            links.next = Some(page_url(base_url, offset + page_size, page_size));
        }
    }

    links
}

/// Formats the URL of a single page.
fn page_url(base_url: &str, offset: u64, page_size: u64) -> String {
    format!("{}?offset={}&limit={}", base_url, offset, page_size)
}
