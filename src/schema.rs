//! JSON Schema validation helpers.
//!
//! Record schemas from [`DataTransferObject::json_schema`] are
//! documentation-as-data: the DTO contract itself never enforces them. This
//! module hosts the validator side of that split so callers can pre-validate
//! a flat record before handing it to
//! [`DataTransferObject::from_record`](crate::dto::DataTransferObject::from_record).

use serde_json::Value;

use crate::dto::{DataTransferObject, FlatRecord};
use crate::error::SchemaError;

/// A trait for validating JSON values against a schema.
///
/// Provides a common interface for schema validation so callers are not tied
/// to one validation backend. The default implementation is
/// [`JsonSchemaValidator`].
pub trait SchemaValidator {
    /// Validate a JSON value against the schema.
    ///
    /// Returns `Ok(())` if validation succeeds and
    /// [`SchemaError::Validation`] with error details otherwise.
    fn validate(&self, instance: &Value) -> Result<(), SchemaError>;

    /// Check if a JSON value is valid without returning error details.
    fn is_valid(&self, instance: &Value) -> bool {
        self.validate(instance).is_ok()
    }
}

/// Validate a JSON value against a JSON Schema in one shot.
///
/// Compiles the schema on every call; use [`JsonSchemaValidator`] when the
/// same schema is checked repeatedly.
pub fn validate_json(schema: &Value, instance: &Value) -> Result<(), SchemaError> {
    JsonSchemaValidator::new(schema)?.validate(instance)
}

/// A reusable JSON Schema validator.
///
/// Compiles a JSON Schema once and validates any number of instances
/// against it.
///
/// # Example
///
/// ```rust,ignore
/// use provider_dto::ProviderMetadata;
/// use provider_dto::schema::{JsonSchemaValidator, SchemaValidator};
///
/// let validator = JsonSchemaValidator::for_dto::<ProviderMetadata>()?;
/// validator.validate_record(&record)?;
/// let provider = ProviderMetadata::from_record(&record)?;
/// ```
pub struct JsonSchemaValidator {
    validator: jsonschema::Validator,
}

impl JsonSchemaValidator {
    /// Compile a validator for a schema.
    ///
    /// Fails with [`SchemaError::Compilation`] if the schema itself is not
    /// a valid JSON Schema.
    pub fn new(schema: &Value) -> Result<Self, SchemaError> {
        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Compilation(format!("Invalid JSON Schema: {e}")))?;

        Ok(Self { validator })
    }

    /// Compile a validator for a record type's own schema descriptor.
    pub fn for_dto<T: DataTransferObject>() -> Result<Self, SchemaError> {
        Self::new(&T::json_schema())
    }

    /// Validate a flat record against the compiled schema.
    pub fn validate_record(&self, record: &FlatRecord) -> Result<(), SchemaError> {
        self.validate(&Value::Object(record.clone()))
    }
}

impl SchemaValidator for JsonSchemaValidator {
    fn validate(&self, instance: &Value) -> Result<(), SchemaError> {
        if self.validator.validate(instance).is_err() {
            // Report the first few violations, not the whole list.
            let mut msgs = Vec::new();
            for err in self.validator.iter_errors(instance) {
                msgs.push(format!("{} at {}", err, err.instance_path));
                if msgs.len() >= 3 {
                    break;
                }
            }
            return Err(SchemaError::Validation(msgs.join("; ")));
        }

        Ok(())
    }

    fn is_valid(&self, instance: &Value) -> bool {
        self.validator.validate(instance).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct MockValidator;

    impl SchemaValidator for MockValidator {
        fn validate(&self, instance: &Value) -> Result<(), SchemaError> {
            if instance.is_object() {
                Ok(())
            } else {
                Err(SchemaError::Validation("Expected object".to_string()))
            }
        }
    }

    #[test]
    fn test_validate_json_success() {
        let schema = json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" }
            }
        });

        let value = json!({ "name": "Alice" });
        assert!(validate_json(&schema, &value).is_ok());
    }

    #[test]
    fn test_validate_json_failure() {
        let schema = json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" }
            }
        });

        let value = json!({ "name": 123 });
        assert!(validate_json(&schema, &value).is_err());
    }

    #[test]
    fn test_schema_validator_is_valid_default() {
        let validator = MockValidator;

        assert!(validator.is_valid(&json!({ "key": "value" })));
        assert!(!validator.is_valid(&json!("string")));
    }

    #[test]
    fn test_compiled_validator_reports_required_violations() {
        let schema = json!({
            "type": "object",
            "properties": {
                "id": { "type": "string" }
            },
            "required": ["id"]
        });

        let validator = JsonSchemaValidator::new(&schema).unwrap();
        assert!(validator.is_valid(&json!({ "id": "x" })));

        let err = validator.validate(&json!({})).unwrap_err();
        assert!(err.to_string().contains("id"));
    }
}
