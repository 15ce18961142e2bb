//! `accredit-forms` — the form validation engine.
//!
//! A [`FieldGroup`](group::FieldGroup) owns named fields, their individual
//! constraints, and the cross-field rules that patch other fields'
//! constraints when a watched value changes. Validity is always a pure,
//! synchronous function of current values and active constraints: errors
//! are data, never exceptions. The one accreditation form this portal
//! serves is declared in [`accreditation`].

pub mod accreditation;
pub mod catalog;
pub mod constraint;
pub mod field;
pub mod group;
pub mod repeatable;
pub mod rules;
pub mod wizard;

pub use accreditation::{AccreditationForm, SubmitOutcome, SubmitRejection, names};
pub use catalog::TobPicker;
pub use constraint::{Constraint, Pattern, keys};
pub use field::Field;
pub use group::{FieldGroup, GroupOutcome, GroupValidator, ValidityReport};
pub use repeatable::RepeatableSection;
pub use rules::{ConditionalRule, PatchOp, Predicate};
pub use wizard::{STEP_COUNT, Step, Wizard};
