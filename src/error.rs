//! Error types for provider-dto.
//!
//! This module is intentionally dependency-light and shared across the crate.

use thiserror::Error;

/// Errors raised at the flat-record boundary.
///
/// Both variants are raised synchronously while decoding a flat record and
/// never otherwise: direct construction trusts the caller and cannot fail.
#[derive(Error, Debug)]
pub enum DtoError {
    /// A key declared required by the record type is absent from the input.
    #[error("Missing required field `{field}` for {dto}")]
    MissingField {
        /// The missing key.
        field: String,
        /// Name of the record type that declared the key required.
        dto: &'static str,
    },

    /// A field's value does not name any member of its enumeration.
    #[error("Invalid {enumeration} value `{value}` for field `{field}`")]
    InvalidEnumValue {
        /// The offending value as it appeared in the record.
        value: String,
        /// The field the value was read from.
        field: String,
        /// Name of the enumeration the value failed to decode into.
        enumeration: &'static str,
    },
}

impl DtoError {
    /// Create a missing-field error.
    pub fn missing_field(field: impl Into<String>, dto: &'static str) -> Self {
        Self::MissingField {
            field: field.into(),
            dto,
        }
    }

    /// Create an invalid-enum-value error.
    pub fn invalid_enum_value(
        value: impl Into<String>,
        field: impl Into<String>,
        enumeration: &'static str,
    ) -> Self {
        Self::InvalidEnumValue {
            value: value.into(),
            field: field.into(),
            enumeration,
        }
    }
}

/// Errors from the JSON Schema validation helpers.
///
/// Kept separate from [`DtoError`]: schema pre-validation is an optional
/// collaborator, not part of the record boundary contract.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Schema compilation error
    #[error("Schema compilation error: {0}")]
    Compilation(String),

    /// Schema validation error
    #[error("Schema validation error: {0}")]
    Validation(String),
}
