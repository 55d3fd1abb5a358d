//! Read-time tag extraction.
//!
//! Tags are stored per contact as one comma-delimited string and never
//! normalized at write time. The distinct-tag list for a user is derived
//! here on demand by splitting, trimming, and deduplicating across every
//! stored field.

use std::collections::BTreeSet;

/// Collapse raw per-contact tags fields into a sorted, deduplicated list.
///
/// Whitespace around each tag is trimmed and empty fragments (from doubled
/// or trailing commas) are dropped.
pub fn distinct_tags<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags = BTreeSet::new();
    for field in raw {
        for tag in field.as_ref().split(',') {
            let tag = tag.trim();
            if !tag.is_empty() {
                tags.insert(tag.to_string());
            }
        }
    }
    tags.into_iter().collect()
}
