//! JSON codec for Graph models.
//!
//! Decoding walks a [`JsonParseNode`] tree; encoding fills a
//! [`JsonSerializationWriter`]. Each model describes its wire fields once in a
//! static [`FieldTable`] and gets both directions from the [`Schema`] blanket
//! implementation of [`Parsable`]. Polymorphic hierarchies pick the concrete
//! type to build through a [`DiscriminatorRegistry`].

mod discriminator;
mod enums;
mod field_table;
mod parse_node;
mod primitives;
mod writer;

use serde_json::Value;

pub use discriminator::DiscriminatorRegistry;
pub(crate) use enums::graph_enum;
pub use enums::GraphEnum;
pub use field_table::{FieldTable, FieldTableBuilder, WireKind};
pub use parse_node::JsonParseNode;
pub use primitives::Primitive;
pub use writer::JsonSerializationWriter;

use crate::GraphResult;

/// Wire member carrying the type discriminator of a polymorphic object.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Members of a payload that no declared field claimed.
pub type AdditionalData = serde_json::Map<String, Value>;

/// A record that can populate itself from a parse node and write itself to a
/// serialization writer.
pub trait Parsable {
    /// Populates `self` from the members of an object node. Members that are
    /// absent or `null` leave the corresponding field untouched.
    fn deserialize(&mut self, node: &JsonParseNode<'_>) -> GraphResult<()>;

    /// Writes every present field. Absent fields are omitted, never `null`.
    fn serialize(&self, writer: &mut JsonSerializationWriter) -> GraphResult<()>;
}

/// Builds an empty record for a node, possibly choosing a subtype by
/// inspecting it. The record is populated afterwards with
/// [`Parsable::deserialize`].
pub type ParsableFactory<T> = fn(&JsonParseNode<'_>) -> GraphResult<T>;

/// A record whose wire fields are described by a static [`FieldTable`].
pub trait Schema: Sized + 'static {
    fn fields() -> &'static FieldTable<Self>;
}

impl<T: Schema> Parsable for T {
    fn deserialize(&mut self, node: &JsonParseNode<'_>) -> GraphResult<()> {
        T::fields().deserialize(self, node)
    }

    fn serialize(&self, writer: &mut JsonSerializationWriter) -> GraphResult<()> {
        T::fields().serialize(self, writer)
    }
}

/// Decodes a JSON document into a record built by `factory`.
pub fn parse_json<T: Parsable>(content: &[u8], factory: ParsableFactory<T>) -> GraphResult<T> {
    let value: Value = serde_json::from_slice(content)?;
    let node = JsonParseNode::new(&value);
    let mut record = factory(&node)?;
    record.deserialize(&node)?;
    Ok(record)
}

/// Encodes a record as a JSON document.
pub fn serialize_to_json<T: Parsable + ?Sized>(record: &T) -> GraphResult<Vec<u8>> {
    let mut writer = JsonSerializationWriter::new();
    record.serialize(&mut writer)?;
    writer.serialized_content()
}
