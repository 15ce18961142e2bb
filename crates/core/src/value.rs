//! Field value model.
//!
//! A form field holds exactly one of these value kinds. Validation never
//! inspects anything else: a field's validity is recomputable from its
//! current value and its current constraint set alone.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The value slot of a single form field.
///
/// `Empty` serializes as JSON `null`, matching the raw form payload the
/// backend expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    List(Vec<String>),
    Date(NaiveDate),
    #[default]
    Empty,
}

impl FieldValue {
    /// Whether the value counts as "not provided" for `required` checks.
    ///
    /// Whitespace-only text is blank. Booleans and dates are never blank:
    /// an unchecked checkbox is a legitimate `false`, not a missing answer.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Empty => true,
            FieldValue::Bool(_) | FieldValue::Date(_) => false,
        }
    }

    /// Text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Trimmed text content; empty string for non-text values.
    pub fn text_trimmed(&self) -> &str {
        self.as_text().map(str::trim).unwrap_or("")
    }

    /// Boolean content; `false` for non-boolean values.
    pub fn as_bool(&self) -> bool {
        matches!(self, FieldValue::Bool(true))
    }

    /// List content, if this is a list value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}
