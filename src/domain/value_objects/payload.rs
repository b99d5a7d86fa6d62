//! Loosely-typed request payloads.
//!
//! Entities are constructed from a [`Payload`] so that missing fields and
//! wrongly-typed fields can be reported separately, which plain serde
//! deserialization cannot do.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Why a field could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Absent, `null` or an empty string.
    Missing,
    /// Present with a value of the wrong JSON type.
    WrongType,
}

/// JSON object payload with typed field accessors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value. Anything other than an object becomes an empty payload.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Keep only the listed keys; everything else a client sent is dropped.
    pub fn only(&self, keys: &[&str]) -> Self {
        let map = keys
            .iter()
            .filter_map(|key| self.0.get(*key).map(|value| (key.to_string(), value.clone())))
            .collect();
        Self(map)
    }

    /// Builder-style insert, used to merge path and auth values into a body.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn is_missing(&self, key: &str) -> bool {
        match self.0.get(key) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        }
    }

    /// Read a single required string field.
    pub fn required_string(&self, key: &str) -> Result<String, FieldError> {
        let [value] = self.required_strings([key])?;
        Ok(value)
    }

    /// Read several required string fields.
    ///
    /// Presence of every key is checked before any type is checked, so a
    /// payload that is both incomplete and mistyped reports `Missing`.
    pub fn required_strings<const N: usize>(
        &self,
        keys: [&str; N],
    ) -> Result<[String; N], FieldError> {
        if keys.iter().any(|key| self.is_missing(key)) {
            return Err(FieldError::Missing);
        }

        let mut values: [String; N] = std::array::from_fn(|_| String::new());
        for (slot, key) in values.iter_mut().zip(keys) {
            match self.0.get(key) {
                Some(Value::String(s)) => *slot = s.clone(),
                _ => return Err(FieldError::WrongType),
            }
        }

        Ok(values)
    }

    /// Read an optional RFC 3339 timestamp.
    pub fn optional_datetime(&self, key: &str) -> Result<Option<DateTime<Utc>>, FieldError> {
        if self.is_missing(key) {
            return Ok(None);
        }

        match self.0.get(key) {
            Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
                .map(|dt| Some(dt.with_timezone(&Utc)))
                .map_err(|_| FieldError::WrongType),
            _ => Err(FieldError::WrongType),
        }
    }

    /// Read an optional boolean, defaulting to `false`.
    pub fn optional_bool(&self, key: &str) -> Result<bool, FieldError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(FieldError::WrongType),
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}
