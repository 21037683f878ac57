//! In-process club list filtering.
//!
//! The store returns the full name-ordered list; the substring filter is
//! applied after the fetch, preserving the store's ordering.

use super::model::Club;

/// Filters a name-ordered club list by a case-insensitive substring over
/// name, description, and tags. `None` or an empty term keeps all clubs.
pub fn filter_clubs(clubs: Vec<Club>, term: Option<&str>) -> Vec<Club> {
    match term {
        Some(t) if !t.trim().is_empty() => {
            let t = t.trim();
            clubs.into_iter().filter(|c| c.matches(t)).collect()
        }
        _ => clubs,
    }
}
