//! `accredit-core` — foundation building blocks for the accreditation portal.
//!
//! This crate contains **pure** primitives (no I/O, no framework concerns):
//! field values, normalization rules for contact data, case conversion, and
//! the structural error model shared by the higher layers.

pub mod case;
pub mod error;
pub mod normalize;
pub mod value;

pub use case::kebab_to_pascal;
pub use error::{StructureError, StructureResult};
pub use normalize::{normalize_email, normalize_phone};
pub use value::FieldValue;
