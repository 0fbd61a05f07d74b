use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::validation::ValidationError;

/// Serializable error envelope handed to outer layers (CLI, transports).
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict { .. } => "conflict",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn into_body(self) -> ErrorBody {
        let code = self.code();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::bad_request(e.to_string(), json!({ "field": e.field() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = e.field_errors().keys().map(|k| k.to_string()).collect();
        fields.sort();
        AppError::bad_request("Invalid input", json!({ "fields": fields }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let body = AppError::not_found("Owner not found", json!({ "id": 7 })).into_body();
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["error"]["code"], "not_found");
        assert_eq!(value["error"]["message"], "Owner not found");
        assert_eq!(value["error"]["details"]["id"], 7);
    }

    #[test]
    fn test_validation_error_maps_to_bad_request() {
        let err: AppError = ValidationError::Telephone {
            value: "invalid-phone".to_string(),
            digits: 10,
        }
        .into();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.code(), "validation_error");
    }
}
