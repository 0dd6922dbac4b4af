//! # Error Types
//!
//! Validation error types for stride-core.
//!
//! ## Two Shapes of Validation Result
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Single-rule validators        →  Result<(), ValidationError>           │
//! │    validate_password, ...         (first broken rule, typed)            │
//! │                                                                         │
//! │  Record validators             →  ValidationReport                      │
//! │    validate_user_registration,    (ALL broken rules, in check order,    │
//! │    validate_order_data,            as human-readable messages;          │
//! │    validate_product                no short-circuiting)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Record validators never stop at the first failure: a registration form
//! with a bad email AND a short password reports both messages, in the order
//! the checks run.

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// A single validation rule failure.
///
/// The `Display` output of each variant is the exact message surfaced to
/// API clients, so wording changes here are contract changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} is too long")]
    TooLong { field: String },

    /// Invalid format (e.g. malformed email or postal code).
    #[error("Invalid {field} format")]
    InvalidFormat { field: String },

    /// Numeric value out of its allowed range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be a positive number")]
    MustBePositive { field: String },
}

// =============================================================================
// Validation Report
// =============================================================================

/// Accumulated validation outcome for a whole record.
///
/// Messages are ordered by check order and the record is valid exactly when
/// the message list is empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    /// Creates an empty (valid) report.
    pub fn new() -> Self {
        ValidationReport { errors: Vec::new() }
    }

    /// Records a failed check.
    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Records a failed check from a typed error.
    pub fn push_error(&mut self, error: ValidationError) {
        self.errors.push(error.to_string());
    }

    /// True when no check failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The accumulated messages, in check order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consumes the report, yielding the message list.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
