//! Value enum for dynamic field values

use serde::Deserialize;
use serde::Serialize;

/// A dynamic value that can hold any contact field type.
///
/// Contact records come off the wire with a handful of JSON shapes:
/// plain strings (name, company, job title), string arrays (multiple
/// emails or phone numbers), booleans that may be null (gender), and
/// null for anything unset. This enum covers exactly those shapes and
/// is used in [`Contact`](super::Contact) to store field values
/// dynamically.
///
/// # Example
///
/// ```
/// use carebook_lib::model::FieldValue;
///
/// let name = FieldValue::from("Ann Marks");
/// let emails = FieldValue::from(vec!["ann@example.com"]);
/// let gender = FieldValue::from(true);
/// let empty = FieldValue::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// String value.
    String(String),
    /// Multi-valued string field (e.g. several emails or phones).
    List(Vec<String>),
}

impl FieldValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "bool",
            FieldValue::String(_) => "string",
            FieldValue::List(_) => "list",
        }
    }

    /// Returns the string form this value sorts and displays under.
    ///
    /// Multi-valued fields are represented by their first element (empty
    /// string when the list is empty); null is the empty string; booleans
    /// render as `"true"`/`"false"`.
    pub fn sort_key(&self) -> &str {
        match self {
            FieldValue::Null => "",
            FieldValue::Bool(true) => "true",
            FieldValue::Bool(false) => "false",
            FieldValue::String(s) => s.as_str(),
            FieldValue::List(items) => items.first().map(String::as_str).unwrap_or(""),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::String(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::String(v.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(v: Vec<String>) -> Self {
        FieldValue::List(v)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(v: Vec<&str>) -> Self {
        FieldValue::List(v.into_iter().map(str::to_string).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => FieldValue::Null,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Null
    }
}
