//! Conditional rules: the cross-field cascade DSL.
//!
//! A rule watches a set of fields; when any of them changes value, the
//! rule's predicate picks one of two patch lists to apply. Patches are a
//! small closed vocabulary rather than arbitrary closures, so every
//! cascade stays declarative, inspectable, and testable in isolation.

use crate::constraint::Constraint;

/// Condition a rule evaluates over current field values.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// The named checkbox field is checked.
    IsTrue(&'static str),
    /// At least one of the named fields has a non-blank value.
    AnyNonEmpty(&'static [&'static str]),
    /// The named field has a non-blank value.
    NonEmpty(&'static str),
}

/// One patch applied to a target field.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOp {
    /// Replace the field's constraint set.
    SetConstraints(&'static str, Vec<Constraint>),
    /// Reset the field to its type-appropriate empty value.
    ClearValue(&'static str),
    /// Mirror another field's value.
    CopyValue { from: &'static str, to: &'static str },
    /// Mirror "First Last" built from two name fields.
    CopyFullName {
        first: &'static str,
        last: &'static str,
        to: &'static str,
    },
    /// Drop the (text) value of one field from a list-valued field.
    RemoveListValue {
        value_of: &'static str,
        from: &'static str,
    },
    Disable(&'static str),
    Enable(&'static str),
    /// Mark touched and dirty so deferred errors display immediately.
    MarkTouched(&'static str),
    /// Reset to pristine and untouched.
    MarkPristine(&'static str),
}

/// A declarative cross-field rule, registered once at group construction
/// and re-evaluated synchronously on every watched-field change.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalRule {
    pub watched: &'static [&'static str],
    pub predicate: Predicate,
    pub on_true: Vec<PatchOp>,
    pub on_false: Vec<PatchOp>,
}

impl ConditionalRule {
    pub fn watches(&self, field: &str) -> bool {
        self.watched.contains(&field)
    }
}
