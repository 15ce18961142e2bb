//! Field constraints and the pure value check.
//!
//! The constraint set is closed: `Required`, `Email`, and `Pattern`.
//! Format constraints (`Email`, `Pattern`) pass on blank values — only
//! `Required` objects to absence, so an optional email field stays valid
//! while untouched.

use std::collections::BTreeSet;

use accredit_core::FieldValue;

/// Error keys attached to fields and groups. String keys, not variants,
/// because the presentation layer addresses messages by key.
pub mod keys {
    pub const REQUIRED: &str = "required";
    pub const EMAIL: &str = "email";
    pub const PATTERN: &str = "pattern";
    pub const DUPLICATE_WITH_PRIMARY: &str = "duplicateWithPrimary";
    pub const DUPLICATE_PRIMARY_SECONDARY: &str = "duplicatePrimarySecondary";
}

/// A shape requirement on text values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Exactly `n` ASCII digits (phone numbers use `Digits(10)`).
    Digits(usize),
}

impl Pattern {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Pattern::Digits(n) => {
                text.len() == *n && text.chars().all(|c| c.is_ascii_digit())
            }
        }
    }
}

/// A single field constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Required,
    Email,
    Pattern(Pattern),
}

/// Loose email shape check: one `@`, non-empty local part and domain, no
/// whitespace. Deliberately permissive — the backend revalidates.
fn is_email_shaped(text: &str) -> bool {
    let mut parts = text.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && !text.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

/// Evaluate a value against a constraint set, yielding error keys.
///
/// Pure: depends on nothing but the arguments.
pub fn check(value: &FieldValue, constraints: &[Constraint]) -> BTreeSet<&'static str> {
    let mut errors = BTreeSet::new();
    let blank = value.is_blank();
    for constraint in constraints {
        match constraint {
            Constraint::Required => {
                if blank {
                    errors.insert(keys::REQUIRED);
                }
            }
            Constraint::Email => {
                if !blank && !is_email_shaped(value.text_trimmed()) {
                    errors.insert(keys::EMAIL);
                }
            }
            Constraint::Pattern(pattern) => {
                if !blank && !pattern.matches(value.text_trimmed()) {
                    errors.insert(keys::PATTERN);
                }
            }
        }
    }
    errors
}
