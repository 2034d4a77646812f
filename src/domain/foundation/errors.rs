//! Domain error vocabulary.
//!
//! `ValidationError` covers malformed raw input (blank keys, unparsable
//! numbers, bad scale bounds). `DomainError` is the coded, detail-carrying
//! error every area converts into at the application boundary.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Input that could not be turned into a domain value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{field}' must not be blank")]
    EmptyField { field: String },

    #[error("'{field}' is malformed: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field } | ValidationError::InvalidFormat { field, .. } => {
                field
            }
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors
    EmptyField,
    OutOfRange,
    InvalidFormat,

    // Answer admission errors
    InvalidAnswerShape,
    UnknownOption,

    // Lookup errors
    QuestionNotFound,

    // State errors
    InvalidStateTransition,
    InterviewComplete,
    InterviewIncomplete,
    InconsistentHistory,

    // Configuration errors
    CatalogInvalid,
    CatalogUnavailable,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidAnswerShape => "INVALID_ANSWER_SHAPE",
            ErrorCode::UnknownOption => "UNKNOWN_OPTION",
            ErrorCode::QuestionNotFound => "QUESTION_NOT_FOUND",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::InterviewComplete => "INTERVIEW_COMPLETE",
            ErrorCode::InterviewIncomplete => "INTERVIEW_INCOMPLETE",
            ErrorCode::InconsistentHistory => "INCONSISTENT_HISTORY",
            ErrorCode::CatalogInvalid => "CATALOG_INVALID",
            ErrorCode::CatalogUnavailable => "CATALOG_UNAVAILABLE",
        };
        f.write_str(s)
    }
}

/// Coded error with a human message and sorted key/value details.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{code}] {message}")]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: BTreeMap<String, String>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: BTreeMap::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).map(String::as_str)
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        };
        let field = err.field().to_string();
        DomainError::new(code, err.to_string()).with_detail("field", field)
    }
}
