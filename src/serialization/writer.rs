use serde_json::{Map, Value};

use super::{AdditionalData, GraphEnum, Parsable, Primitive};
use crate::{GraphError, GraphResult};

/// Collects the members of one JSON object.
///
/// Each typed method inserts a single member. Nothing is written for absent
/// values: callers skip unset fields rather than emitting `null`.
#[derive(Debug, Default)]
pub struct JsonSerializationWriter {
    members: Map<String, Value>,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_string_value(&mut self, key: &str, value: &str) {
        self.members.insert(key.to_string(), Value::String(value.to_string()));
    }

    pub fn write_bool_value(&mut self, key: &str, value: bool) {
        self.members.insert(key.to_string(), Value::Bool(value));
    }

    pub fn write_i32_value(&mut self, key: &str, value: i32) {
        self.members.insert(key.to_string(), Value::from(value));
    }

    /// Writes any scalar wire kind (timestamps, dates, byte arrays, ...).
    pub fn write_primitive_value<V: Primitive>(&mut self, key: &str, value: &V) -> GraphResult<()> {
        let value = value.to_value().map_err(|e| with_field(key, e))?;
        self.members.insert(key.to_string(), value);
        Ok(())
    }

    /// Writes an enumerated value as its member name.
    pub fn write_enum_value<E: GraphEnum>(&mut self, key: &str, value: E) {
        self.write_string_value(key, value.as_str());
    }

    /// Writes a nested object produced by the value's own serializer.
    pub fn write_object_value<T: Parsable + ?Sized>(&mut self, key: &str, value: &T) -> GraphResult<()> {
        let object = Self::object_of(value)?;
        self.members.insert(key.to_string(), object);
        Ok(())
    }

    pub fn write_collection_of_object_values<T: Parsable>(
        &mut self,
        key: &str,
        values: &[T],
    ) -> GraphResult<()> {
        let elements = values.iter().map(Self::object_of).collect::<GraphResult<Vec<_>>>()?;
        self.members.insert(key.to_string(), Value::Array(elements));
        Ok(())
    }

    pub fn write_collection_of_primitive_values<V: Primitive>(
        &mut self,
        key: &str,
        values: &[V],
    ) -> GraphResult<()> {
        let elements = values
            .iter()
            .map(V::to_value)
            .collect::<GraphResult<Vec<_>>>()
            .map_err(|e| with_field(key, e))?;
        self.members.insert(key.to_string(), Value::Array(elements));
        Ok(())
    }

    pub fn write_collection_of_enum_values<E: GraphEnum>(&mut self, key: &str, values: &[E]) {
        let elements = values.iter().map(|v| Value::String(v.as_str().to_string())).collect();
        self.members.insert(key.to_string(), Value::Array(elements));
    }

    /// Writes members that were preserved from a payload but are not part of
    /// the record's declared fields.
    pub fn write_additional_data(&mut self, data: &AdditionalData) {
        for (key, value) in data {
            self.members.insert(key.clone(), value.clone());
        }
    }

    /// Consumes the writer, returning the object written so far.
    pub fn into_value(self) -> Value {
        Value::Object(self.members)
    }

    /// Consumes the writer, returning the UTF-8 JSON text.
    pub fn serialized_content(self) -> GraphResult<Vec<u8>> {
        Ok(serde_json::to_vec(&self.into_value())?)
    }

    fn object_of<T: Parsable + ?Sized>(value: &T) -> GraphResult<Value> {
        let mut writer = Self::new();
        value.serialize(&mut writer)?;
        Ok(writer.into_value())
    }
}

/// Names the member a primitive was being written to, since values do not
/// know their own key.
fn with_field(key: &str, error: GraphError) -> GraphError {
    match error {
        GraphError::MalformedValue { field, expected, value } if field.is_empty() => {
            GraphError::MalformedValue {
                field: key.to_string(),
                expected,
                value,
            }
        }
        other => other,
    }
}
