//! Static field descriptions and the boundary check that casts untyped JSON
//! payloads onto them.
//!
//! Casting follows document-schema rules rather than strict JSON typing: a
//! numeric string is a valid number, a bare value is a valid one-element
//! list, `null` means "not provided". Keys the schema does not declare are
//! accepted and dropped. Nothing is required.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

/// The declared type of a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Text,
    Number,
    Boolean,
    DateTime,
    /// Ordered sequence of the inner kind.
    List(&'static FieldKind),
    /// Nested document with its own fields.
    Object(&'static [Field]),
}

impl FieldKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Text      => "Text",
            Self::Number    => "Number",
            Self::Boolean   => "Boolean",
            Self::DateTime  => "DateTime",
            Self::List(_)   => "List",
            Self::Object(_) => "Object",
        }
    }
}

/// One named field. Every field is optional.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("payload must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("{path}: cast to {expected} failed for value {value}")]
    Cast { path: String, expected: &'static str, value: String },

    /// The field list and the Rust type disagree. A bug in the resource
    /// definition, not in the payload.
    #[error("{0}")]
    Shape(String),
}

/// Result of checking a payload against a field list.
#[derive(Clone, Debug, PartialEq)]
pub enum Validation<T> {
    Valid(T),
    Invalid(ValidationError),
}

impl<T> Validation<T> {
    pub fn into_result(self) -> Result<T, ValidationError> {
        match self {
            Self::Valid(doc) => Ok(doc),
            Self::Invalid(e) => Err(e),
        }
    }
}

/// Casts `payload` onto `fields` and decodes the result as `T`.
pub fn validate<T: DeserializeOwned>(fields: &[Field], payload: &Value) -> Validation<T> {
    let Value::Object(map) = payload else {
        return Validation::Invalid(ValidationError::NotAnObject { found: json_type(payload) });
    };

    let cast = match cast_object(fields, map, "") {
        Ok(cast) => cast,
        Err(e) => return Validation::Invalid(e),
    };

    match serde_json::from_value(Value::Object(cast)) {
        Ok(doc) => Validation::Valid(doc),
        Err(e) => Validation::Invalid(ValidationError::Shape(e.to_string())),
    }
}

fn cast_object(fields: &[Field], map: &Map<String, Value>, prefix: &str) -> Result<Map<String, Value>, ValidationError> {
    let mut out = Map::new();
    for field in fields {
        let Some(value) = map.get(field.name) else { continue };
        let path = if prefix.is_empty() {
            field.name.to_owned()
        } else {
            format!("{prefix}.{}", field.name)
        };
        if let Some(cast) = cast_value(field.kind, value, &path)? {
            out.insert(field.name.to_owned(), cast);
        }
    }
    Ok(out)
}

/// `Ok(None)` means the value counts as absent.
fn cast_value(kind: FieldKind, value: &Value, path: &str) -> Result<Option<Value>, ValidationError> {
    if value.is_null() {
        return Ok(None);
    }
    let fail = || ValidationError::Cast {
        path: path.to_owned(),
        expected: kind.name(),
        value: value.to_string(),
    };

    let cast = match (kind, value) {
        (FieldKind::Text, Value::String(_)) => value.clone(),
        (FieldKind::Text, Value::Number(n)) => Value::String(n.to_string()),
        (FieldKind::Text, Value::Bool(b)) => Value::String(b.to_string()),

        (FieldKind::Number, Value::Number(_)) => value.clone(),
        (FieldKind::Number, Value::String(s)) if s.trim().is_empty() => return Ok(None),
        (FieldKind::Number, Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(fail)?,

        (FieldKind::Boolean, Value::Bool(_)) => value.clone(),
        (FieldKind::Boolean, Value::Number(n)) => match n.as_f64() {
            Some(f) if f == 1.0 => Value::Bool(true),
            Some(f) if f == 0.0 => Value::Bool(false),
            _ => return Err(fail()),
        },
        (FieldKind::Boolean, Value::String(s)) => match s.trim() {
            "" => return Ok(None),
            "true" | "1" | "yes" => Value::Bool(true),
            "false" | "0" | "no" => Value::Bool(false),
            _ => return Err(fail()),
        },

        (FieldKind::DateTime, Value::String(s)) if s.trim().is_empty() => return Ok(None),
        (FieldKind::DateTime, Value::String(s)) => {
            Value::String(to_rfc3339(parse_datetime(s.trim()).ok_or_else(fail)?))
        }
        (FieldKind::DateTime, Value::Number(n)) => {
            let millis = n.as_i64().or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64));
            let at = millis.and_then(DateTime::from_timestamp_millis).ok_or_else(fail)?;
            Value::String(to_rfc3339(at))
        }

        (FieldKind::List(inner), Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                if let Some(cast) = cast_value(*inner, item, &format!("{path}.{i}"))? {
                    out.push(cast);
                }
            }
            Value::Array(out)
        }
        (FieldKind::List(inner), single) => match cast_value(*inner, single, &format!("{path}.0"))? {
            Some(cast) => Value::Array(vec![cast]),
            None => Value::Array(Vec::new()),
        },

        (FieldKind::Object(fields), Value::Object(map)) => Value::Object(cast_object(fields, map, path)?),

        _ => return Err(fail()),
    };
    Ok(Some(cast))
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(s) {
        return Some(at.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn to_rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null      => "null",
        Value::Bool(_)   => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_)  => "array",
        Value::Object(_) => "object",
    }
}
