//! Filter predicates for the contacts table.

use std::sync::Arc;

use crate::model::Contact;
use crate::model::FieldValue;

/// A filter condition evaluated against contact records in memory.
///
/// Filters can be combined using logical operators (`And`, `Or`) to
/// build the compound conditions behind the table's filter bar (pool,
/// countries, gender, free-text search). Every filter is pure and
/// total: missing fields make a condition false, never an error, so
/// evaluation is safe to repeat on every input change.
///
/// # Example
///
/// ```
/// use carebook_lib::view::Filter;
///
/// // Contacts in one of two countries
/// let filter = Filter::one_of("country", ["DE", "NL"]);
///
/// // Combined filter
/// let filter = Filter::and([
///     Filter::eq("pool", "clinics"),
///     Filter::non_empty("email"),
/// ]);
///
/// // Arbitrary predicate (escape hatch)
/// let filter = Filter::custom(|c| c.id().starts_with("c-"));
/// ```
#[derive(Clone)]
pub enum Filter {
    /// Field equals a value exactly. Missing fields never match.
    Eq(String, FieldValue),
    /// Field matches one of the candidates; multi-valued fields match
    /// if any element does.
    In(String, Vec<String>),
    /// Field is absent or explicitly null.
    IsNull(String),
    /// Field is present and not null.
    IsNotNull(String),
    /// Field has content: a non-empty string or a list with at least
    /// one element.
    NonEmpty(String),
    /// Case-insensitive substring search over the named fields
    /// (multi-valued fields are flattened). A blank query matches
    /// every record.
    Search {
        /// The free-text query.
        query: String,
        /// The fields to search in.
        fields: Vec<String>,
    },
    /// Logical AND of multiple filters.
    And(Vec<Filter>),
    /// Logical OR of multiple filters.
    Or(Vec<Filter>),
    /// Arbitrary pure predicate (escape hatch).
    Custom(Arc<dyn Fn(&Contact) -> bool + Send + Sync>),
}

impl Filter {
    /// Creates an equality filter.
    pub fn eq(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Filter::Eq(field.into(), value.into())
    }

    /// Creates a one-of filter (e.g. a multi-select country filter).
    pub fn one_of<I, S>(field: impl Into<String>, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Filter::In(
            field.into(),
            candidates.into_iter().map(Into::into).collect(),
        )
    }

    /// Creates an is-null filter.
    pub fn is_null(field: impl Into<String>) -> Self {
        Filter::IsNull(field.into())
    }

    /// Creates an is-not-null filter.
    pub fn is_not_null(field: impl Into<String>) -> Self {
        Filter::IsNotNull(field.into())
    }

    /// Creates a non-empty filter.
    pub fn non_empty(field: impl Into<String>) -> Self {
        Filter::NonEmpty(field.into())
    }

    /// Creates a free-text search filter over the given fields.
    pub fn search<I, S>(query: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Filter::Search {
            query: query.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Combines filters with logical AND.
    pub fn and(filters: impl IntoIterator<Item = Filter>) -> Self {
        Filter::And(filters.into_iter().collect())
    }

    /// Combines filters with logical OR.
    pub fn or(filters: impl IntoIterator<Item = Filter>) -> Self {
        Filter::Or(filters.into_iter().collect())
    }

    /// Wraps an arbitrary pure predicate.
    ///
    /// The predicate must be deterministic and side-effect-free; it may
    /// be evaluated any number of times per record.
    pub fn custom(predicate: impl Fn(&Contact) -> bool + Send + Sync + 'static) -> Self {
        Filter::Custom(Arc::new(predicate))
    }

    /// Evaluates this filter against a contact.
    pub fn matches(&self, contact: &Contact) -> bool {
        match self {
            Filter::Eq(field, value) => contact.get(field) == Some(value),
            Filter::In(field, candidates) => match contact.get(field) {
                Some(FieldValue::String(s)) => candidates.iter().any(|c| c == s),
                Some(FieldValue::List(items)) => items
                    .iter()
                    .any(|item| candidates.iter().any(|c| c == item)),
                _ => false,
            },
            Filter::IsNull(field) => contact.get(field).is_none_or(FieldValue::is_null),
            Filter::IsNotNull(field) => contact.get(field).is_some_and(|v| !v.is_null()),
            Filter::NonEmpty(field) => match contact.get(field) {
                Some(FieldValue::String(s)) => !s.is_empty(),
                Some(FieldValue::List(items)) => !items.is_empty(),
                Some(FieldValue::Bool(_)) => true,
                _ => false,
            },
            Filter::Search { query, fields } => {
                let needle = query.trim().to_lowercase();
                if needle.is_empty() {
                    return true;
                }
                fields.iter().any(|field| match contact.get(field) {
                    Some(FieldValue::String(s)) => s.to_lowercase().contains(&needle),
                    Some(FieldValue::List(items)) => {
                        items.iter().any(|item| item.to_lowercase().contains(&needle))
                    }
                    _ => false,
                })
            }
            Filter::And(filters) => filters.iter().all(|f| f.matches(contact)),
            Filter::Or(filters) => filters.iter().any(|f| f.matches(contact)),
            Filter::Custom(predicate) => predicate(contact),
        }
    }
}

impl std::fmt::Debug for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Filter::Eq(field, value) => f.debug_tuple("Eq").field(field).field(value).finish(),
            Filter::In(field, candidates) => {
                f.debug_tuple("In").field(field).field(candidates).finish()
            }
            Filter::IsNull(field) => f.debug_tuple("IsNull").field(field).finish(),
            Filter::IsNotNull(field) => f.debug_tuple("IsNotNull").field(field).finish(),
            Filter::NonEmpty(field) => f.debug_tuple("NonEmpty").field(field).finish(),
            Filter::Search { query, fields } => f
                .debug_struct("Search")
                .field("query", query)
                .field("fields", fields)
                .finish(),
            Filter::And(filters) => f.debug_tuple("And").field(filters).finish(),
            Filter::Or(filters) => f.debug_tuple("Or").field(filters).finish(),
            Filter::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
