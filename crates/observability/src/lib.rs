//! Shared tracing/logging setup for the accreditation crates.

pub mod tracing;

pub use tracing::{init, init_with_filter};
