//! Gateway error model.
//!
//! Network and API failures are surfaced once as a user-visible notice and
//! never retried automatically; they must not corrupt form or session
//! state. Nothing here is fatal to the process.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The transport could not complete the request (timeout, DNS, ...).
    /// Carries the embedder-supplied description only.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The backend answered with `success: false`.
    #[error("api rejected request: {message}")]
    Api {
        message: String,
        errors: Vec<String>,
    },

    /// The backend answered `success: true` but omitted the payload.
    #[error("api response missing data")]
    MissingData,

    /// The response body was not a well-formed envelope.
    #[error("malformed response body: {0}")]
    Malformed(String),
}
