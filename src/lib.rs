//! provider-dto
//!
//! Flat-record DTO types for provider catalog metadata.
//!
//! This crate intentionally contains only *record-level* types: the
//! [`DataTransferObject`] boundary between a typed record and its flat
//! string-keyed JSON representation, the closed enumerations those records
//! carry, and the JSON Schema descriptors that make the flat records
//! self-describing. Transport, persistence, and configuration loading live
//! with the callers that produce or consume these records.
#![deny(unsafe_code)]

pub mod dto;
pub mod error;
pub mod schema;
pub mod types;

pub use dto::{DataTransferObject, FlatRecord};
pub use error::{DtoError, SchemaError};
pub use types::{ProviderMetadata, ProviderType, RequestAuthenticationMethod};
