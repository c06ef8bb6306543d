use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde_json::{Number, Value};

use super::parse_node::DATE_ONLY_FORMAT;
use super::JsonParseNode;
use crate::{GraphError, GraphResult};

/// A scalar wire kind: something a parse node can read and a writer can emit
/// as a single JSON value.
pub trait Primitive: Sized {
    /// Human-readable name of the wire kind, used in schema introspection.
    const KIND: &'static str;

    fn read(node: &JsonParseNode<'_>) -> GraphResult<Option<Self>>;

    fn to_value(&self) -> GraphResult<Value>;
}

impl Primitive for String {
    const KIND: &'static str = "string";

    fn read(node: &JsonParseNode<'_>) -> GraphResult<Option<Self>> {
        node.get_string_value()
    }

    fn to_value(&self) -> GraphResult<Value> {
        Ok(Value::String(self.clone()))
    }
}

impl Primitive for bool {
    const KIND: &'static str = "boolean";

    fn read(node: &JsonParseNode<'_>) -> GraphResult<Option<Self>> {
        node.get_bool_value()
    }

    fn to_value(&self) -> GraphResult<Value> {
        Ok(Value::Bool(*self))
    }
}

impl Primitive for i32 {
    const KIND: &'static str = "int32";

    fn read(node: &JsonParseNode<'_>) -> GraphResult<Option<Self>> {
        node.get_i32_value()
    }

    fn to_value(&self) -> GraphResult<Value> {
        Ok(Value::from(*self))
    }
}

impl Primitive for i64 {
    const KIND: &'static str = "int64";

    fn read(node: &JsonParseNode<'_>) -> GraphResult<Option<Self>> {
        node.get_i64_value()
    }

    fn to_value(&self) -> GraphResult<Value> {
        Ok(Value::from(*self))
    }
}

impl Primitive for f64 {
    const KIND: &'static str = "float64";

    fn read(node: &JsonParseNode<'_>) -> GraphResult<Option<Self>> {
        node.get_f64_value()
    }

    // JSON has no representation for NaN or the infinities. The writer
    // fills in the member name.
    fn to_value(&self) -> GraphResult<Value> {
        Number::from_f64(*self)
            .map(Value::Number)
            .ok_or_else(|| GraphError::MalformedValue {
                field: String::new(),
                expected: "finite float64",
                value: self.to_string(),
            })
    }
}

impl Primitive for Vec<u8> {
    const KIND: &'static str = "base64";

    fn read(node: &JsonParseNode<'_>) -> GraphResult<Option<Self>> {
        node.get_byte_array_value()
    }

    fn to_value(&self) -> GraphResult<Value> {
        Ok(Value::String(STANDARD.encode(self)))
    }
}

impl Primitive for DateTime<Utc> {
    const KIND: &'static str = "dateTimeOffset";

    fn read(node: &JsonParseNode<'_>) -> GraphResult<Option<Self>> {
        node.get_time_value()
    }

    fn to_value(&self) -> GraphResult<Value> {
        Ok(Value::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
    }
}

impl Primitive for NaiveDate {
    const KIND: &'static str = "date";

    fn read(node: &JsonParseNode<'_>) -> GraphResult<Option<Self>> {
        node.get_date_only_value()
    }

    fn to_value(&self) -> GraphResult<Value> {
        Ok(Value::String(self.format(DATE_ONLY_FORMAT).to_string()))
    }
}
