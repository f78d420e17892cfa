//! Error types for coded values and terminology lookups

use thiserror::Error;

/// Errors raised when a string or datatype cannot become a coded value.
///
/// `UnknownCode` is the invalid-argument case: the input is present but is not
/// one of the codes declared by the code system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// The code is not a member of the code system.
    #[error("'{code}' is not a valid code for code system {system}")]
    UnknownCode { system: &'static str, code: String },

    /// A `Coding` names a different system than the one expected.
    #[error("'{found}' is not a valid system for code system {expected}")]
    SystemMismatch {
        expected: &'static str,
        found: String,
    },

    /// A `Coding` or `code` element has no code value.
    #[error("no code value present for code system {system}")]
    MissingCode { system: &'static str },

    /// The string breaks the FHIR primitive grammar.
    #[error("invalid syntax: {0}")]
    InvalidSyntax(String),

    /// The element id breaks `[A-Za-z0-9\-\.]{1,64}`.
    #[error("invalid element id: {0}")]
    InvalidId(String),

    /// An element must carry a value, an extension, or both.
    #[error("element for code system {system} must have a value or at least one extension")]
    MissingValueOrExtension { system: &'static str },
}

impl CodeError {
    pub fn unknown_code(system: &'static str, code: impl Into<String>) -> Self {
        CodeError::UnknownCode {
            system,
            code: code.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CodeError>;
