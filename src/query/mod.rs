//! Listing query construction for contacts.
//!
//! This module turns raw query-string input into validated page parameters
//! and filters, and builds the paired data/count SQL statements that back a
//! filtered, paginated listing.

pub mod contact_query;
pub mod page;

pub use contact_query::{ContactFilter, ContactQuery};
pub use page::{Page, Pagination, DEFAULT_LIMIT};
