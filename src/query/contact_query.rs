//! Contact listing queries.
//!
//! A listing runs two statements: one fetching a page of rows and one
//! counting every match. Both are produced here from a single predicate
//! writer, so the pagination total always describes the same row set as the
//! returned page.

use super::Page;
use crate::models::contact::COLUMNS;
use sqlx::{QueryBuilder, Sqlite};

/// Optional filters applied to a contact listing.
///
/// All filters stack with AND on top of the mandatory owner scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    /// Substring matched against name, email, phone, and company
    pub search: Option<String>,

    /// When true, only favorite contacts
    pub favorite: bool,

    /// Substring matched against the raw comma-delimited tags field
    pub tag: Option<String>,
}

impl ContactFilter {
    /// Build from raw query-string values.
    ///
    /// Search and tag values are trimmed; values that are blank after the
    /// trim count as absent. The favorite filter engages only on the literal
    /// string `"true"`; anything else leaves the listing unfiltered.
    pub fn from_params(search: Option<&str>, favorite: Option<&str>, tag: Option<&str>) -> Self {
        Self {
            search: search.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string),
            favorite: favorite == Some("true"),
            tag: tag.map(str::trim).filter(|t| !t.is_empty()).map(str::to_string),
        }
    }

    /// True when no optional filter is active.
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && !self.favorite && self.tag.is_none()
    }
}

/// Builder for the statement pair backing one contact listing.
#[derive(Debug)]
pub struct ContactQuery<'a> {
    owner_id: i64,
    filter: &'a ContactFilter,
}

impl<'a> ContactQuery<'a> {
    pub fn new(owner_id: i64, filter: &'a ContactFilter) -> Self {
        Self { owner_id, filter }
    }

    /// Statement fetching one page of matching rows, newest first.
    ///
    /// Ties on `created_at` are broken by descending id so pages never
    /// overlap or skip rows as the client walks them.
    pub fn select(&self, page: &Page) -> QueryBuilder<'static, Sqlite> {
        let mut qb = QueryBuilder::new(format!("SELECT {} FROM contacts", COLUMNS));
        self.push_predicate(&mut qb);
        qb.push(" ORDER BY created_at DESC, id DESC");
        qb.push(" LIMIT ");
        qb.push_bind(page.limit());
        qb.push(" OFFSET ");
        qb.push_bind(page.offset());
        qb
    }

    /// Statement counting every row the same predicate matches.
    pub fn count(&self) -> QueryBuilder<'static, Sqlite> {
        let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM contacts");
        self.push_predicate(&mut qb);
        qb
    }

    // The one place WHERE clauses are written. Owner scope first, then the
    // optional filters in a fixed order.
    fn push_predicate(&self, qb: &mut QueryBuilder<'static, Sqlite>) {
        qb.push(" WHERE user_id = ");
        qb.push_bind(self.owner_id);

        if let Some(search) = &self.filter.search {
            let pattern = format!("%{}%", search);
            qb.push(" AND (name LIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR email LIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR phone LIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR company LIKE ");
            qb.push_bind(pattern);
            qb.push(")");
        }

        if self.filter.favorite {
            qb.push(" AND is_favorite = 1");
        }

        if let Some(tag) = &self.filter.tag {
            qb.push(" AND tags LIKE ");
            qb.push_bind(format!("%{}%", tag));
        }
    }
}
