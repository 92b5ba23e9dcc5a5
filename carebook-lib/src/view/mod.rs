//! Table view engine
//!
//! Derives a display-ready row set and a consistent selection from raw
//! contact records, the active filters, and the sort order. All
//! operations are pure synchronous transforms over a page of records:
//! cheap enough to recompute on every keystroke or filter change, and
//! deterministic so repeated evaluation is safe.

mod filter;
mod selection;
mod sort;

pub use filter::*;
pub use selection::*;
pub use sort::*;

use crate::model::Contact;

/// Computes the rows the table should display.
///
/// Keeps records matching every filter (logical AND; an empty slice
/// keeps everything), then sorts them under `sort`. The sort is stable
/// and the input slice is never mutated.
///
/// # Example
///
/// ```
/// use carebook_lib::model::Contact;
/// use carebook_lib::view::{compute_visible_rows, Filter, SortOrder};
///
/// let records = vec![
///     Contact::new("1").set("full_name", "Ben").set("country", "DE"),
///     Contact::new("2").set("full_name", "Ann").set("country", "DE"),
///     Contact::new("3").set("full_name", "Cal").set("country", "NL"),
/// ];
/// let rows = compute_visible_rows(
///     &records,
///     &[Filter::eq("country", "DE")],
///     &SortOrder::asc("full_name"),
/// );
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].id(), "2");
/// ```
pub fn compute_visible_rows(
    records: &[Contact],
    filters: &[Filter],
    sort: &SortOrder,
) -> Vec<Contact> {
    let mut rows: Vec<Contact> = records
        .iter()
        .filter(|record| filters.iter().all(|f| f.matches(record)))
        .cloned()
        .collect();
    sort.apply(&mut rows);
    rows
}

/// Free-text search over the given fields.
///
/// Case-insensitive substring match; a record is kept if any field
/// contains the query. A blank or whitespace-only query keeps every
/// record. Input order is preserved; compose with
/// [`compute_visible_rows`] via [`Filter::search`] when sorting or
/// other filters are also in play.
pub fn search(records: &[Contact], query: &str, fields: &[&str]) -> Vec<Contact> {
    let filter = Filter::search(query, fields.iter().copied());
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Contact> {
        vec![
            Contact::new("1")
                .set("full_name", "Ben Ode")
                .set("country", "DE")
                .set("email", vec!["ben@clinic.example"]),
            Contact::new("2")
                .set("full_name", "Ann Marks")
                .set("country", "DE")
                .set("email", Vec::<String>::new()),
            Contact::new("3")
                .set("full_name", "Cal Ruiz")
                .set("country", "NL")
                .set("email", vec!["cal@care.example"]),
        ]
    }

    #[test]
    fn test_filters_combine_with_and() {
        let records = records();
        let rows = compute_visible_rows(
            &records,
            &[Filter::eq("country", "DE"), Filter::non_empty("email")],
            &SortOrder::asc("full_name"),
        );
        let ids: Vec<_> = rows.iter().map(|c| c.id().to_string()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn test_no_filters_keeps_everything_sorted() {
        let records = records();
        let rows = compute_visible_rows(&records, &[], &SortOrder::asc("full_name"));
        let ids: Vec<_> = rows.iter().map(|c| c.id().to_string()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let records = records();
        let before = records.clone();
        let _ = compute_visible_rows(&records, &[], &SortOrder::desc("full_name"));
        assert_eq!(records, before);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let rows = compute_visible_rows(&[], &[Filter::non_empty("email")], &SortOrder::asc("x"));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_search_matches_any_field() {
        let records = records();
        let hits = search(&records, "care", &["full_name", "email"]);
        let ids: Vec<_> = hits.iter().map(|c| c.id().to_string()).collect();
        assert_eq!(ids, vec!["3"]);
    }

    #[test]
    fn test_search_blank_query_keeps_all() {
        let records = records();
        assert_eq!(search(&records, "  ", &["full_name"]).len(), 3);
    }
}
