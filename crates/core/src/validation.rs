//! Input-shape validation.
//!
//! Turns untyped input (a JSON request body, or a raw path/query string) into
//! typed values. Only the first problem is reported, together with the name
//! of the field that caused it.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::types::DbId;

/// Message used when a required field is missing.
pub const REQUIRED_MESSAGE: &str = "Required";

/// Message used when a string contains a NUL character, which TEXT columns
/// cannot store.
pub const NUL_CHARACTER_MESSAGE: &str = "Must not contain NUL characters";

/// A single input problem: what went wrong and which field caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Human-readable description.
    pub message: String,
    /// Name of the offending field; empty when the body itself is wrong.
    pub field: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: field.into(),
        }
    }
}

/// JSON type name as it appears in mismatch messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_mismatch(field: &str, expected: &str, found: &Value) -> ValidationError {
    ValidationError::new(
        field,
        format!("Expected {expected}, received {}", json_type_name(found)),
    )
}

/// Parse a positive integer id from a path segment or query-string value.
pub fn parse_id(raw: &str, field: &str) -> Result<DbId, ValidationError> {
    match raw.trim().parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::new(
            field,
            format!("Expected a positive integer id, received '{raw}'"),
        )),
    }
}

// ---------------------------------------------------------------------------
// FieldReader
// ---------------------------------------------------------------------------

/// Typed accessors over the fields of a JSON object body.
///
/// - `required_*`: the field must be present and non-null.
/// - `optional_*`: absent and `null` both mean "not given".
/// - `patch_*`: absent means "leave unchanged"; `null` is rejected unless the
///   accessor returns a nested option for a nullable column.
///
/// Unknown fields are ignored.
pub struct FieldReader<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> FieldReader<'a> {
    /// Wrap a request body. Anything other than a JSON object is rejected.
    pub fn new(body: &'a Value) -> Result<Self, ValidationError> {
        match body {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(type_mismatch("", "object", other)),
        }
    }

    pub fn required_string(&self, field: &str) -> Result<String, ValidationError> {
        match self.fields.get(field) {
            None => Err(ValidationError::new(field, REQUIRED_MESSAGE)),
            Some(value) => as_string(field, value),
        }
    }

    pub fn optional_string(&self, field: &str) -> Result<Option<String>, ValidationError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => as_string(field, value).map(Some),
        }
    }

    pub fn patch_string(&self, field: &str) -> Result<Option<String>, ValidationError> {
        self.fields
            .get(field)
            .map(|value| as_string(field, value))
            .transpose()
    }

    pub fn optional_bool(&self, field: &str) -> Result<Option<bool>, ValidationError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => as_bool(field, value).map(Some),
        }
    }

    pub fn patch_bool(&self, field: &str) -> Result<Option<bool>, ValidationError> {
        self.fields
            .get(field)
            .map(|value| as_bool(field, value))
            .transpose()
    }

    /// An optional foreign-key id. Numeric strings are coerced.
    pub fn optional_id(&self, field: &str) -> Result<Option<DbId>, ValidationError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => as_id(field, value).map(Some),
        }
    }

    /// A nullable foreign-key id in a partial update.
    ///
    /// `None` = absent (keep), `Some(None)` = explicit `null` (clear),
    /// `Some(Some(id))` = set.
    pub fn patch_nullable_id(&self, field: &str) -> Result<Option<Option<DbId>>, ValidationError> {
        match self.fields.get(field) {
            None => Ok(None),
            Some(Value::Null) => Ok(Some(None)),
            Some(value) => as_id(field, value).map(|id| Some(Some(id))),
        }
    }
}

fn as_string(field: &str, value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::String(s) if s.contains('\0') => {
            Err(ValidationError::new(field, NUL_CHARACTER_MESSAGE))
        }
        Value::String(s) => Ok(s.clone()),
        other => Err(type_mismatch(field, "string", other)),
    }
}

fn as_bool(field: &str, value: &Value) -> Result<bool, ValidationError> {
    match value {
        Value::Bool(b) => Ok(*b),
        other => Err(type_mismatch(field, "boolean", other)),
    }
}

fn as_id(field: &str, value: &Value) -> Result<DbId, ValidationError> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(id) if id > 0 => Ok(id),
            _ => Err(ValidationError::new(
                field,
                format!("Expected a positive integer id, received {n}"),
            )),
        },
        Value::String(s) => parse_id(s, field),
        other => Err(type_mismatch(field, "number", other)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
