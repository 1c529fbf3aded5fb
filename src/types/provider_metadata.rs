//! Provider catalog metadata record.
//!
//! This module centralizes the flat-record shape for descriptive metadata
//! about one external service provider: identifier, display name, where it
//! runs, and how requests to it are authenticated.

use serde_json::{Value, json};

use crate::dto::{DataTransferObject, FlatRecord, optional_str, required_str};
use crate::error::DtoError;
use crate::types::common::{ProviderType, RequestAuthenticationMethod};

/// Keys that must be present before a record can be decoded.
const REQUIRED_FIELDS: [&str; 3] = ["id", "name", "type"];

/// Descriptive metadata about one external service provider.
///
/// Immutable after construction: fields are read through accessors and there
/// are no setters. Direct construction via [`ProviderMetadata::new`] trusts
/// the caller; decoding untrusted input goes through
/// [`DataTransferObject::from_record`], which enforces required fields and
/// enumeration membership at the flat-record boundary.
///
/// # Example
///
/// ```rust,ignore
/// use provider_dto::{DataTransferObject, ProviderMetadata, ProviderType};
///
/// let provider = ProviderMetadata::new("openai", "OpenAI", ProviderType::Cloud)
///     .with_description("OpenAI GPT models");
///
/// let record = provider.to_record();
/// assert_eq!(ProviderMetadata::from_record(&record)?, provider);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMetadata {
    id: String,
    name: String,
    description: Option<String>,
    provider_type: ProviderType,
    credentials_url: Option<String>,
    authentication_method: Option<RequestAuthenticationMethod>,
}

impl ProviderMetadata {
    /// Create a record from its required fields; optional fields start empty.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        provider_type: ProviderType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            provider_type,
            credentials_url: None,
            authentication_method: None,
        }
    }

    /// Set the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the URL where credentials for this provider are obtained.
    pub fn with_credentials_url(mut self, url: impl Into<String>) -> Self {
        self.credentials_url = Some(url.into());
        self
    }

    /// Set the request authentication method.
    pub fn with_authentication_method(mut self, method: RequestAuthenticationMethod) -> Self {
        self.authentication_method = Some(method);
        self
    }

    /// Canonical provider identifier (e.g. `"openai"`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable provider name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Where the provider runs.
    pub fn provider_type(&self) -> ProviderType {
        self.provider_type
    }

    /// URL where credentials for this provider are obtained, if any.
    pub fn credentials_url(&self) -> Option<&str> {
        self.credentials_url.as_deref()
    }

    /// How requests to the provider are authenticated, if declared.
    pub fn authentication_method(&self) -> Option<RequestAuthenticationMethod> {
        self.authentication_method
    }
}

impl DataTransferObject for ProviderMetadata {
    const NAME: &'static str = "ProviderMetadata";

    fn from_record(record: &FlatRecord) -> Result<Self, DtoError> {
        Self::ensure_fields(record, &REQUIRED_FIELDS)?;

        let id = required_str(record, "id", Self::NAME)?.to_owned();
        let name = required_str(record, "name", Self::NAME)?.to_owned();

        let provider_type = match record.get("type") {
            Some(Value::String(raw)) => ProviderType::from_value(raw)
                .ok_or_else(|| DtoError::invalid_enum_value(raw.as_str(), "type", "ProviderType"))?,
            value => {
                return Err(DtoError::invalid_enum_value(
                    value.map_or_else(|| "null".to_owned(), Value::to_string),
                    "type",
                    "ProviderType",
                ));
            }
        };

        let authentication_method = match record.get("authenticationMethod") {
            None | Some(Value::Null) => None,
            Some(Value::String(raw)) => {
                Some(RequestAuthenticationMethod::from_value(raw).ok_or_else(|| {
                    DtoError::invalid_enum_value(
                        raw.as_str(),
                        "authenticationMethod",
                        "RequestAuthenticationMethod",
                    )
                })?)
            }
            Some(other) => {
                return Err(DtoError::invalid_enum_value(
                    other.to_string(),
                    "authenticationMethod",
                    "RequestAuthenticationMethod",
                ));
            }
        };

        Ok(Self {
            id,
            name,
            description: optional_str(record, "description"),
            provider_type,
            credentials_url: optional_str(record, "credentialsUrl"),
            authentication_method,
        })
    }

    /// Emits all declared fields. Optional fields that hold no value are
    /// rendered as explicit nulls, so an input that spelled an optional key
    /// as absent round-trips to one that spells it as null.
    fn to_record(&self) -> FlatRecord {
        let mut record = FlatRecord::new();
        record.insert("id".to_owned(), Value::String(self.id.clone()));
        record.insert("name".to_owned(), Value::String(self.name.clone()));
        record.insert(
            "description".to_owned(),
            nullable_string(self.description.as_deref()),
        );
        record.insert(
            "type".to_owned(),
            Value::String(self.provider_type.as_str().to_owned()),
        );
        record.insert(
            "credentialsUrl".to_owned(),
            nullable_string(self.credentials_url.as_deref()),
        );
        record.insert(
            "authenticationMethod".to_owned(),
            nullable_string(self.authentication_method.map(|m| m.as_str())),
        );
        record
    }

    fn json_schema() -> Value {
        let type_values: Vec<&str> = ProviderType::ALL.iter().map(|t| t.as_str()).collect();
        let mut auth_values: Vec<Value> = RequestAuthenticationMethod::ALL
            .iter()
            .map(|m| Value::String(m.as_str().to_owned()))
            .collect();
        auth_values.push(Value::Null);

        json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "Canonical provider identifier"
                },
                "name": {
                    "type": "string",
                    "description": "Human-readable provider name"
                },
                "description": {
                    "type": "string",
                    "description": "Free-text description of the provider"
                },
                "type": {
                    "type": "string",
                    "enum": type_values,
                    "description": "Where the provider runs"
                },
                "credentialsUrl": {
                    "type": "string",
                    "description": "URL where credentials for the provider are obtained"
                },
                "authenticationMethod": {
                    "type": ["string", "null"],
                    "enum": auth_values,
                    "description": "How requests to the provider are authenticated"
                }
            },
            "required": REQUIRED_FIELDS
        })
    }
}

fn nullable_string(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |v| Value::String(v.to_owned()))
}
