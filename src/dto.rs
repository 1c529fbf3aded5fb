//! The data-transfer-object contract.
//!
//! A [`DataTransferObject`] is an immutable typed record whose sole behavior
//! is converting to and from a flat record: a string-keyed JSON object whose
//! values are strings or nulls. The trait also hands out a JSON Schema
//! descriptor so external validators can pre-validate a flat record before
//! it reaches [`DataTransferObject::from_record`].

use serde_json::Value;

use crate::error::DtoError;

/// The flat wire shape of a record: string keys, string-or-null values.
pub type FlatRecord = serde_json::Map<String, Value>;

/// Conversion contract between a typed record and its flat representation.
///
/// Implementations must keep [`from_record`](Self::from_record) and
/// [`to_record`](Self::to_record) inverse to each other: decoding the output
/// of `to_record` yields an equal record. Absent and explicitly-null keys
/// are equivalent on input; `to_record` always emits explicit nulls for
/// empty optional fields.
pub trait DataTransferObject: Sized {
    /// Record type name reported in boundary errors.
    const NAME: &'static str;

    /// Construct a record from a flat record.
    ///
    /// Fails with [`DtoError::MissingField`] when a required key is absent
    /// and with [`DtoError::InvalidEnumValue`] when an enum-valued field
    /// carries a value outside its enumeration. Either the whole record
    /// constructs or nothing does.
    fn from_record(record: &FlatRecord) -> Result<Self, DtoError>;

    /// Render the record as a flat record.
    ///
    /// Every declared field is present in the output. Optional fields that
    /// hold no value are rendered as explicit nulls, enum fields as their
    /// canonical string value.
    fn to_record(&self) -> FlatRecord;

    /// JSON Schema descriptor for the flat shape of this record type.
    ///
    /// A static description of the type, independent of any value. The
    /// contract never validates against it; it is meant for external
    /// JSON-Schema validators (see [`crate::schema`]).
    fn json_schema() -> Value;

    /// Check that every required key is present before reading it.
    ///
    /// A key that is present but explicitly null counts as absent. Must be
    /// called by `from_record` before accessing required fields so missing
    /// input surfaces as a uniform [`DtoError::MissingField`] rather than a
    /// decode failure deeper in construction.
    fn ensure_fields(record: &FlatRecord, required: &[&str]) -> Result<(), DtoError> {
        for key in required {
            if record.get(*key).is_none_or(Value::is_null) {
                return Err(DtoError::missing_field(*key, Self::NAME));
            }
        }
        Ok(())
    }
}

/// Read a required string field.
///
/// Callers are expected to have run [`DataTransferObject::ensure_fields`]
/// first; a field that is absent, null, or not a string is reported as
/// missing.
pub fn required_str<'a>(
    record: &'a FlatRecord,
    field: &str,
    dto: &'static str,
) -> Result<&'a str, DtoError> {
    record
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| DtoError::missing_field(field, dto))
}

/// Read an optional string field. Absent and null both decode to `None`.
pub fn optional_str(record: &FlatRecord, field: &str) -> Option<String> {
    record.get(field).and_then(Value::as_str).map(str::to_owned)
}
