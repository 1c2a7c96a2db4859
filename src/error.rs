//! Error types for the SIM-Sarpras core

use thiserror::Error;

/// Application error codes surfaced alongside error messages.
/// `Success` is the reserved zero for callers reporting outcomes as codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    NotAuthorized = 2,
    StorageFailure = 3,
    Duplicate = 4,
    BadValue = 5,
    NoSuchRecord = 6,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),
}

impl AppError {
    /// Numeric code for the error, for callers that display or log codes
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Authentication(_) | AppError::Authorization(_) => ErrorCode::NotAuthorized,
            AppError::NotFound(_) => ErrorCode::NoSuchRecord,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::Conflict(_) => ErrorCode::Duplicate,
            AppError::Storage(_) => ErrorCode::StorageFailure,
            AppError::BusinessRule(_) => ErrorCode::Failure,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = Vec::new();
        for (field, errors) in e.field_errors() {
            for err in errors {
                match &err.message {
                    Some(msg) => messages.push(msg.to_string()),
                    None => messages.push(format!("{} is invalid", field)),
                }
            }
        }
        messages.sort();
        AppError::Validation(messages.join("; "))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_maps_to_a_produced_code() {
        let msg = || "x".to_string();
        assert_eq!(AppError::Authentication(msg()).code(), ErrorCode::NotAuthorized);
        assert_eq!(AppError::Authorization(msg()).code(), ErrorCode::NotAuthorized);
        assert_eq!(AppError::NotFound(msg()).code(), ErrorCode::NoSuchRecord);
        assert_eq!(AppError::Validation(msg()).code(), ErrorCode::BadValue);
        assert_eq!(AppError::Conflict(msg()).code(), ErrorCode::Duplicate);
        assert_eq!(AppError::Storage(msg()).code(), ErrorCode::StorageFailure);
        assert_eq!(AppError::BusinessRule(msg()).code(), ErrorCode::Failure);
    }

    #[test]
    fn validation_errors_flatten_into_sorted_messages() {
        use validator::Validate;

        #[derive(Validate)]
        struct Payload {
            #[validate(length(min = 3, message = "code too short"))]
            code: String,
            #[validate(length(min = 3, message = "name too short"))]
            name: String,
        }

        let err: AppError = Payload {
            code: "a".to_string(),
            name: "b".to_string(),
        }
        .validate()
        .unwrap_err()
        .into();
        assert_eq!(
            err.to_string(),
            "Validation error: code too short; name too short"
        );
    }
}
