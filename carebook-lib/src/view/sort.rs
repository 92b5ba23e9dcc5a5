//! Ordering of table rows.

use std::cmp::Ordering;

use crate::model::Contact;

/// Sort direction for table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
}

/// Specifies the ordering of the contacts table.
///
/// Every value is compared by its string form (see
/// [`Contact::sort_key`]): multi-valued fields by their first element,
/// null or missing fields as the empty string. Comparison uses
/// `str::cmp`, so ordering is by Unicode code point (uppercase letters
/// sort before lowercase).
///
/// # Example
///
/// ```
/// use carebook_lib::view::SortOrder;
///
/// let order = SortOrder::asc("full_name");
/// let by_company = SortOrder::desc("company");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    /// The column to sort on.
    pub column: String,
    /// The direction to sort in.
    pub direction: Direction,
}

impl SortOrder {
    /// Creates an ascending order on a column.
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Ascending,
        }
    }

    /// Creates a descending order on a column.
    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Descending,
        }
    }

    /// Compares two contacts under this order.
    ///
    /// Unknown columns compare as empty strings on both sides, so every
    /// pair is `Equal` and a stable sort leaves the input order intact.
    pub fn compare(&self, a: &Contact, b: &Contact) -> Ordering {
        let ordering = a.sort_key(&self.column).cmp(b.sort_key(&self.column));
        match self.direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }

    /// Sorts rows in place.
    ///
    /// The sort is stable: rows that compare equal (frequent for columns
    /// with missing values, like company) keep their relative input order.
    pub fn apply(&self, rows: &mut [Contact]) {
        rows.sort_by(|a, b| self.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(id: &str, name: &str) -> Contact {
        Contact::new(id).set("name", name)
    }

    #[test]
    fn test_sort_ascending_code_point_order() {
        // The comparator is str::cmp (Unicode code-point order): the empty
        // string sorts first and "Bob" sorts before "alice" because
        // uppercase code points precede lowercase ones.
        let mut rows = vec![named("1", "Bob"), named("2", "alice"), named("3", "")];
        SortOrder::asc("name").apply(&mut rows);
        let names: Vec<_> = rows.iter().map(|c| c.sort_key("name").to_string()).collect();
        assert_eq!(names, vec!["", "Bob", "alice"]);
    }

    #[test]
    fn test_sort_descending_negates() {
        let mut rows = vec![named("1", "Bob"), named("2", "alice"), named("3", "")];
        SortOrder::desc("name").apply(&mut rows);
        let names: Vec<_> = rows.iter().map(|c| c.sort_key("name").to_string()).collect();
        assert_eq!(names, vec!["alice", "Bob", ""]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut rows = vec![
            Contact::new("1").set("company", "Acme").set("name", "Zed"),
            Contact::new("2").set("name", "Amy"),
            Contact::new("3").set("name", "Bea"),
            Contact::new("4").set("company", "Acme").set("name", "Ann"),
        ];
        // Contacts 2 and 3 have no company, so both compare as "" and tie;
        // 1 and 4 tie on "Acme". Relative input order must survive.
        SortOrder::asc("company").apply(&mut rows);
        let ids: Vec<_> = rows.iter().map(|c| c.id().to_string()).collect();
        assert_eq!(ids, vec!["2", "3", "1", "4"]);
    }

    #[test]
    fn test_unknown_column_keeps_input_order() {
        let mut rows = vec![named("1", "Bob"), named("2", "alice")];
        SortOrder::asc("no_such_column").apply(&mut rows);
        let ids: Vec<_> = rows.iter().map(|c| c.id().to_string()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_multivalue_sorts_by_first_element() {
        let mut rows = vec![
            Contact::new("1").set("email", vec!["z@example.com", "a@example.com"]),
            Contact::new("2").set("email", vec!["b@example.com"]),
            Contact::new("3").set("email", Vec::<String>::new()),
        ];
        SortOrder::asc("email").apply(&mut rows);
        let ids: Vec<_> = rows.iter().map(|c| c.id().to_string()).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }
}
