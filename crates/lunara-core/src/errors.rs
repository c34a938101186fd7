// ABOUTME: Unified error handling with standard error codes shared across the workspace
// ABOUTME: Defines AppError, ErrorCode, and the AppResult alias used by all engine seams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

//! # Unified Error Handling
//!
//! Centralized error types for the Lunara engine. Analytic functions are
//! total over their documented domain: sparse history is encoded in result
//! types (`has_data = false`), never raised as an error. `AppError` is
//! reserved for programmer errors (unknown user id, invalid parameters) and
//! storage-collaborator failures.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Input validation failed
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// A value was outside its documented range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange,
    /// Requested resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// Configuration is invalid or inconsistent
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
    /// Storage collaborator failure
    #[serde(rename = "STORAGE_ERROR")]
    StorageError,
    /// Unclassified internal error
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Human-readable description of the error class
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::ValueOutOfRange => "Value out of range",
            Self::ResourceNotFound => "Resource not found",
            Self::ConfigInvalid => "Invalid configuration",
            Self::StorageError => "Storage error",
            Self::InternalError => "Internal error",
        }
    }
}

/// Application error with code, message, and optional context
#[derive(Debug, thiserror::Error)]
pub struct AppError {
    /// Standard error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// User the error occurred for, when known
    pub user_id: Option<Uuid>,
    /// Underlying cause for error chaining
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            user_id: None,
            source: None,
        }
    }

    /// Attach the user id the error occurred for
    #[must_use]
    pub fn with_user_id(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Attach a source error for chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Storage collaborator error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_code_description() {
        let err = AppError::invalid_input("severity must be within 1..=10");
        assert_eq!(
            err.to_string(),
            "Invalid input: severity must be within 1..=10"
        );
    }

    #[test]
    fn test_error_context() {
        let user_id = Uuid::new_v4();
        let err = AppError::not_found("user").with_user_id(user_id);
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
        assert_eq!(err.user_id, Some(user_id));
    }

    #[test]
    fn test_error_code_serde_rename() {
        let json = serde_json::to_string(&ErrorCode::StorageError).unwrap();
        assert_eq!(json, "\"STORAGE_ERROR\"");
    }
}
