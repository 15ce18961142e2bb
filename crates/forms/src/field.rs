//! A single named form field.

use accredit_core::FieldValue;

use crate::constraint::{Constraint, Pattern};

/// A named, typed slot in a form group.
///
/// Validity is always recomputable from `value` and `constraints` alone;
/// `touched`/`dirty` only gate when errors are *displayed*, never whether
/// they exist. Disabled fields are excluded from validation but still
/// present in the raw submit payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: &'static str,
    value: FieldValue,
    constraints: Vec<Constraint>,
    touched: bool,
    dirty: bool,
    disabled: bool,
}

impl Field {
    /// A text field starting empty.
    pub fn text(name: &'static str) -> Self {
        Self::with_value(name, FieldValue::Text(String::new()))
    }

    /// A checkbox field with an initial state.
    pub fn checkbox(name: &'static str, checked: bool) -> Self {
        Self::with_value(name, FieldValue::Bool(checked))
    }

    /// A multi-select field starting empty.
    pub fn list(name: &'static str) -> Self {
        Self::with_value(name, FieldValue::List(Vec::new()))
    }

    /// A date field starting unset.
    pub fn date(name: &'static str) -> Self {
        Self::with_value(name, FieldValue::Empty)
    }

    fn with_value(name: &'static str, value: FieldValue) -> Self {
        Self {
            name,
            value,
            constraints: Vec::new(),
            touched: false,
            dirty: false,
            disabled: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.constraints.push(Constraint::Required);
        self
    }

    pub fn email(mut self) -> Self {
        self.constraints.push(Constraint::Email);
        self
    }

    pub fn digits(mut self, len: usize) -> Self {
        self.constraints.push(Constraint::Pattern(Pattern::Digits(len)));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn touched(&self) -> bool {
        self.touched
    }

    pub fn dirty(&self) -> bool {
        self.dirty
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub(crate) fn set_value(&mut self, value: FieldValue) {
        self.value = value;
    }

    pub(crate) fn set_constraints(&mut self, constraints: Vec<Constraint>) {
        self.constraints = constraints;
    }

    pub(crate) fn set_touched(&mut self, touched: bool) {
        self.touched = touched;
    }

    pub(crate) fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    pub(crate) fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// The type-appropriate "cleared" value for this field.
    pub(crate) fn cleared_value(&self) -> FieldValue {
        match &self.value {
            FieldValue::Text(_) => FieldValue::Text(String::new()),
            FieldValue::Bool(_) => FieldValue::Bool(false),
            FieldValue::List(_) => FieldValue::List(Vec::new()),
            FieldValue::Date(_) | FieldValue::Empty => FieldValue::Empty,
        }
    }
}
