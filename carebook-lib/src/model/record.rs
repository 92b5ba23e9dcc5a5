//! Dynamic contact record

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use super::FieldValue;
use crate::error::FieldError;

/// A contact record.
///
/// Contacts hold field values as a `HashMap<String, FieldValue>`,
/// allowing dynamic access to any field the backend returns. Typed
/// getter methods provide safe access with proper error handling.
///
/// The field map is flattened for serde, so a backend payload like
/// `{"id":"1","full_name":"Ann","email":["a@x.com"]}` deserializes
/// directly into a `Contact`.
///
/// # Example
///
/// ```
/// use carebook_lib::model::Contact;
///
/// let contact = Contact::new("c-42")
///     .set("full_name", "Ann Marks")
///     .set("email", vec!["ann@example.com"]);
///
/// assert_eq!(contact.get_string("full_name").unwrap(), Some("Ann Marks"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// The stable unique identifier of the record.
    pub(crate) id: String,

    /// The field values.
    #[serde(flatten)]
    pub(crate) fields: HashMap<String, FieldValue>,
}

impl Contact {
    /// Creates a new empty contact with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: HashMap::new(),
        }
    }

    /// Returns the record identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, FieldValue> {
        &self.fields
    }

    /// Returns the string form a field sorts under.
    ///
    /// Missing fields and nulls degrade to the empty string, multi-valued
    /// fields to their first element. Never fails, whatever the column.
    pub fn sort_key(&self, field: &str) -> &str {
        self.fields.get(field).map(FieldValue::sort_key).unwrap_or("")
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if field is missing or wrong type.
    // Return Ok(None) only if the field exists and is FieldValue::Null.
    // =========================================================================

    /// Gets a string field value.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(FieldValue::Null) => Ok(None),
            Some(FieldValue::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "string",
                other.type_name(),
            )),
        }
    }

    /// Gets a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(FieldValue::Null) => Ok(None),
            Some(FieldValue::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }

    /// Gets a multi-valued string field.
    pub fn get_list(&self, field: &str) -> Result<Option<&[String]>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(FieldValue::Null) => Ok(None),
            Some(FieldValue::List(items)) => Ok(Some(items.as_slice())),
            Some(other) => Err(FieldError::type_mismatch(field, "list", other.type_name())),
        }
    }
}
