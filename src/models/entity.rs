use once_cell::sync::Lazy;

use crate::serialization::{AdditionalData, FieldTable, JsonParseNode, Schema};
use crate::GraphResult;

/// Fields shared by every addressable Graph resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    /// Members received on the wire that no declared field claimed.
    pub additional_data: AdditionalData,

    /// The unique identifier for an entity. Read-only.
    pub id: Option<String>,

    /// The `@odata.type` discriminator.
    pub odata_type: Option<String>,
}

static ENTITY_FIELDS: Lazy<FieldTable<Entity>> = Lazy::new(|| {
    FieldTable::<Entity>::builder()
        .additional_data(|m| &m.additional_data, |m| &mut m.additional_data)
        .primitive("id", |m| &m.id, |m| &mut m.id)
        .primitive("@odata.type", |m| &m.odata_type, |m| &mut m.odata_type)
        .build()
});

impl Schema for Entity {
    fn fields() -> &'static FieldTable<Self> {
        &ENTITY_FIELDS
    }
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    /// An entity carrying the given discriminator.
    pub(crate) fn tagged(odata_type: &str) -> Self {
        Self {
            odata_type: Some(odata_type.to_string()),
            ..Self::default()
        }
    }

    pub fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> GraphResult<Self> {
        Ok(Self::new())
    }
}
