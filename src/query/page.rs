//! Page parameters and the pagination envelope.

use crate::domain::ValidationError;
use serde::Serialize;

/// Rows per page when the client does not ask for a limit.
pub const DEFAULT_LIMIT: i64 = 50;

/// Validated pagination input. Both values are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    page: i64,
    limit: i64,
}

impl Page {
    /// Build from already-parsed values, rejecting anything below 1.
    pub fn new(page: i64, limit: i64) -> Result<Self, ValidationError> {
        if page < 1 {
            return Err(ValidationError::InvalidParameter {
                name: "page",
                value: page.to_string(),
            });
        }
        if limit < 1 {
            return Err(ValidationError::InvalidParameter {
                name: "limit",
                value: limit.to_string(),
            });
        }
        Ok(Self { page, limit })
    }

    /// Parse raw query-string values.
    ///
    /// Absent values fall back to page 1 with [`DEFAULT_LIMIT`] rows. Values
    /// that are present but not positive integers are rejected rather than
    /// silently coerced.
    pub fn from_params(page: Option<&str>, limit: Option<&str>) -> Result<Self, ValidationError> {
        let page = parse_param("page", page, 1)?;
        let limit = parse_param("limit", limit, DEFAULT_LIMIT)?;
        Self::new(page, limit)
    }

    /// One-based page number.
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Rows per page.
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Row offset of the first row of this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn parse_param(name: &'static str, raw: Option<&str>, default: i64) -> Result<i64, ValidationError> {
    match raw {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(value) if value >= 1 => Ok(value),
            _ => Err(ValidationError::InvalidParameter {
                name,
                value: raw.to_string(),
            }),
        },
    }
}

/// Pagination summary returned alongside each contact listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Pagination {
    /// One-based page number that was served
    pub page: i64,

    /// Rows per page that was applied
    pub limit: i64,

    /// Total rows matching the filter, across all pages
    pub total: i64,

    /// Total page count, never less than 1
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

impl Pagination {
    /// Summarize `total` matching rows for the given page parameters.
    ///
    /// The page count is `ceil(total / limit)` with a floor of one, so an
    /// empty result still reads as page 1 of 1.
    pub fn for_total(page: &Page, total: i64) -> Self {
        let total_pages = (total / page.limit() + i64::from(total % page.limit() != 0)).max(1);
        Self {
            page: page.page(),
            limit: page.limit(),
            total,
            total_pages,
        }
    }
}
