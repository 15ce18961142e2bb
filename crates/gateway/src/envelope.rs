//! Uniform response envelope.
//!
//! Every endpoint wraps its payload in the same shape; list endpoints wrap
//! a page descriptor inside it.

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// The backend's uniform JSON envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the envelope into the payload or a displayable error.
    ///
    /// A `success: true` envelope without data is still an error: callers
    /// that reach for the payload expect it to exist.
    pub fn into_result(self) -> Result<T, GatewayError> {
        if !self.success {
            return Err(GatewayError::Api {
                message: self.message,
                errors: self.errors.unwrap_or_default(),
            });
        }
        self.data.ok_or(GatewayError::MissingData)
    }
}

/// One page of a paginated list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub page_index: u32,
    pub page_size: u32,
    pub count: u64,
    pub items: Vec<T>,
}
