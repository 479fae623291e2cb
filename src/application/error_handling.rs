// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for UI
// - Never exposes internal implementation details
// - Logs errors for debugging

use serde::{Deserialize, Serialize};
use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Requested recipe does not exist
    NotFound,

    /// Missing/empty required field; the user can fix and resubmit
    Validation,

    /// Underlying storage failed; nothing was guaranteed written
    Storage,

    /// A stored value could not be decoded
    CorruptRecord,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self::not_found("Recipe"),

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: "All fields must be filled before saving.".to_string(),
                details: Some(domain_error.to_string()),
            },

            AppError::CorruptRecord { key, reason } => {
                log::error!("Corrupt record '{}': {}", key, reason);

                Self {
                    success: false,
                    error_type: ErrorType::CorruptRecord,
                    message: "Stored recipe data could not be read".to_string(),
                    details: Some(key),
                }
            }

            err if err.is_storage_failure() => {
                log::error!("Storage failure: {:?}", err);

                Self {
                    success: false,
                    error_type: ErrorType::Storage,
                    message: "Storage operation failed".to_string(),
                    details: Some("Check logs for details".to_string()),
                }
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Data serialization failed".to_string(),
                    details: None,
                }
            }

            other => {
                log::error!("Unhandled error: {}", other);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: other.to_string(),
                    details: None,
                }
            }
        }
    }

    fn not_found(resource: &str) -> Self {
        Self {
            success: false,
            error_type: ErrorType::NotFound,
            message: format!("{} not found", resource),
            details: None,
        }
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response)
                .unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}
