use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, NaiveDate, Utc};
use log::trace;
use serde_json::Value;

use super::{GraphEnum, Parsable, ParsableFactory, Primitive};
use crate::{GraphError, GraphResult};

/// Date-only values are written and read as `YYYY-MM-DD`.
pub(crate) const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// A single position in a decoded JSON payload.
///
/// The node remembers the member name it was reached through so that decode
/// errors can name the offending field. Every typed getter returns
/// `Ok(None)` for a JSON `null`, and a [`GraphError::TypeMismatch`] when the
/// wire value has a different kind than the one requested.
#[derive(Debug, Clone, Copy)]
pub struct JsonParseNode<'a> {
    key: &'a str,
    value: &'a Value,
}

impl<'a> JsonParseNode<'a> {
    /// Creates a root node over a decoded payload.
    pub fn new(value: &'a Value) -> Self {
        Self { key: "", value }
    }

    /// The member name this node was reached through (empty for the root).
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// The raw JSON value at this position.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// Looks up an object member. Returns `None` when this node is not an
    /// object or the member is absent.
    pub fn child_node(&self, key: &str) -> Option<JsonParseNode<'a>> {
        let (key, value) = self.value.as_object()?.get_key_value(key)?;
        Some(JsonParseNode { key, value })
    }

    /// Iterates over the members of an object node.
    pub fn members(&self) -> GraphResult<impl Iterator<Item = JsonParseNode<'a>>> {
        let object = self.value.as_object().ok_or_else(|| self.mismatch("object"))?;
        Ok(object.iter().map(|(key, value)| JsonParseNode { key, value }))
    }

    pub fn get_string_value(&self) -> GraphResult<Option<String>> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            _ => Err(self.mismatch("string")),
        }
    }

    pub fn get_bool_value(&self) -> GraphResult<Option<bool>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            _ => Err(self.mismatch("boolean")),
        }
    }

    pub fn get_i32_value(&self) -> GraphResult<Option<i32>> {
        match self.get_i64_with("int32")? {
            Some(n) => i32::try_from(n)
                .map(Some)
                .map_err(|_| self.malformed("int32", n.to_string())),
            None => Ok(None),
        }
    }

    pub fn get_i64_value(&self) -> GraphResult<Option<i64>> {
        self.get_i64_with("int64")
    }

    pub fn get_f64_value(&self) -> GraphResult<Option<f64>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| self.malformed("float64", n.to_string())),
            _ => Err(self.mismatch("float64")),
        }
    }

    /// Reads a base64-encoded byte array.
    pub fn get_byte_array_value(&self) -> GraphResult<Option<Vec<u8>>> {
        match self.get_string_with("base64 string")? {
            Some(s) => STANDARD
                .decode(s)
                .map(Some)
                .map_err(|_| self.malformed("base64 string", s)),
            None => Ok(None),
        }
    }

    /// Reads an RFC 3339 timestamp, normalized to UTC.
    pub fn get_time_value(&self) -> GraphResult<Option<DateTime<Utc>>> {
        match self.get_string_with("timestamp")? {
            Some(s) => DateTime::parse_from_rfc3339(s)
                .map(|t| Some(t.with_timezone(&Utc)))
                .map_err(|_| self.malformed("RFC 3339 timestamp", s)),
            None => Ok(None),
        }
    }

    pub fn get_date_only_value(&self) -> GraphResult<Option<NaiveDate>> {
        match self.get_string_with("date")? {
            Some(s) => NaiveDate::parse_from_str(s, DATE_ONLY_FORMAT)
                .map(Some)
                .map_err(|_| self.malformed("YYYY-MM-DD date", s)),
            None => Ok(None),
        }
    }

    /// Reads an enumerated value by its member name.
    pub fn get_enum_value<E: GraphEnum>(&self) -> GraphResult<Option<E>> {
        match self.get_string_with(E::TYPE_NAME)? {
            Some(s) => E::parse(s).map(Some),
            None => Ok(None),
        }
    }

    /// Builds a nested object with `factory` and populates it from this node.
    pub fn get_object_value<T: Parsable>(&self, factory: ParsableFactory<T>) -> GraphResult<Option<T>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Object(_) => {
                let mut object = factory(self)?;
                object.deserialize(self)?;
                Ok(Some(object))
            }
            _ => Err(self.mismatch("object")),
        }
    }

    pub fn get_collection_of_object_values<T: Parsable>(
        &self,
        factory: ParsableFactory<T>,
    ) -> GraphResult<Option<Vec<T>>> {
        self.collect(|element| element.get_object_value(factory))
    }

    pub fn get_collection_of_primitive_values<V: Primitive>(&self) -> GraphResult<Option<Vec<V>>> {
        self.collect(V::read)
    }

    pub fn get_collection_of_enum_values<E: GraphEnum>(&self) -> GraphResult<Option<Vec<E>>> {
        self.collect(|element| element.get_enum_value())
    }

    fn collect<T>(
        &self,
        read: impl Fn(&JsonParseNode<'a>) -> GraphResult<Option<T>>,
    ) -> GraphResult<Option<Vec<T>>> {
        let elements = match self.value {
            Value::Null => return Ok(None),
            Value::Array(elements) => elements,
            _ => return Err(self.mismatch("array")),
        };

        let mut values = Vec::with_capacity(elements.len());
        for value in elements {
            let element = JsonParseNode { key: self.key, value };
            match read(&element)? {
                Some(v) => values.push(v),
                None => trace!("skipping null element in collection '{}'", self.key),
            }
        }
        Ok(Some(values))
    }

    fn get_i64_with(&self, expected: &'static str) -> GraphResult<Option<i64>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| self.malformed(expected, n.to_string())),
            _ => Err(self.mismatch(expected)),
        }
    }

    fn get_string_with(&self, expected: &'static str) -> GraphResult<Option<&'a str>> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.as_str())),
            _ => Err(self.mismatch(expected)),
        }
    }

    fn mismatch(&self, expected: &'static str) -> GraphError {
        GraphError::TypeMismatch {
            field: self.key.to_string(),
            expected,
            found: kind_of(self.value),
        }
    }

    fn malformed(&self, expected: &'static str, value: impl Into<String>) -> GraphError {
        GraphError::MalformedValue {
            field: self.key.to_string(),
            expected,
            value: value.into(),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
