use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::trace;

use super::{
    AdditionalData, GraphEnum, JsonParseNode, JsonSerializationWriter, Parsable, ParsableFactory,
    Primitive,
};
use crate::GraphResult;

type Decoder<T> = Arc<dyn Fn(&mut T, &JsonParseNode<'_>) -> GraphResult<()> + Send + Sync>;
type Encoder<T> = Arc<dyn Fn(&T, &mut JsonSerializationWriter) -> GraphResult<()> + Send + Sync>;
type DataGetter<T> = Arc<dyn Fn(&T) -> &AdditionalData + Send + Sync>;
type DataGetterMut<T> = Arc<dyn Fn(&mut T) -> &mut AdditionalData + Send + Sync>;

/// The wire kind of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireKind {
    Primitive(&'static str),
    Enum(&'static str),
    Object,
    PrimitiveCollection(&'static str),
    ObjectCollection,
}

struct Field<T> {
    name: &'static str,
    kind: WireKind,
    decode: Decoder<T>,
    encode: Encoder<T>,
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            kind: self.kind,
            decode: Arc::clone(&self.decode),
            encode: Arc::clone(&self.encode),
        }
    }
}

fn decoder<T, F>(f: F) -> Decoder<T>
where
    F: Fn(&mut T, &JsonParseNode<'_>) -> GraphResult<()> + Send + Sync + 'static,
{
    Arc::new(f)
}

fn encoder<T, F>(f: F) -> Encoder<T>
where
    F: Fn(&T, &mut JsonSerializationWriter) -> GraphResult<()> + Send + Sync + 'static,
{
    Arc::new(f)
}

struct AdditionalDataLens<T> {
    get: DataGetter<T>,
    get_mut: DataGetterMut<T>,
}

impl<T> AdditionalDataLens<T> {
    fn new<G, M>(get: G, get_mut: M) -> Self
    where
        G: Fn(&T) -> &AdditionalData + Send + Sync + 'static,
        M: Fn(&mut T) -> &mut AdditionalData + Send + Sync + 'static,
    {
        Self {
            get: Arc::new(get),
            get_mut: Arc::new(get_mut),
        }
    }
}

/// Declarative schema of one record type: for every wire field, its name,
/// kind, and how to move it between the record and the wire.
///
/// Tables are built once per type and shared. A subtype's table starts from
/// its parent's table projected onto the embedded base record, so inherited
/// fields are declared exactly once.
pub struct FieldTable<T> {
    fields: Vec<Field<T>>,
    index: HashMap<&'static str, usize>,
    additional_data: Option<AdditionalDataLens<T>>,
}

impl<T: 'static> FieldTable<T> {
    pub fn builder() -> FieldTableBuilder<T> {
        FieldTableBuilder {
            fields: Vec::new(),
            additional_data: None,
        }
    }

    /// Populates `record` from the members of an object node.
    ///
    /// Members without a declared field are kept as additional data when the
    /// record has somewhere to put them, and skipped otherwise. The first
    /// field that fails to decode aborts the whole record.
    pub fn deserialize(&self, record: &mut T, node: &JsonParseNode<'_>) -> GraphResult<()> {
        for member in node.members()? {
            match self.index.get(member.key()) {
                Some(&i) => (self.fields[i].decode)(record, &member)?,
                None => match &self.additional_data {
                    Some(lens) => {
                        (lens.get_mut)(record).insert(member.key().to_string(), member.value().clone());
                    }
                    None => trace!("ignoring unknown field '{}'", member.key()),
                },
            }
        }
        Ok(())
    }

    /// Writes every present field of `record`, then its additional data.
    pub fn serialize(&self, record: &T, writer: &mut JsonSerializationWriter) -> GraphResult<()> {
        for field in &self.fields {
            (field.encode)(record, writer)?;
        }
        if let Some(lens) = &self.additional_data {
            writer.write_additional_data((lens.get)(record));
        }
        Ok(())
    }

    /// Declared fields in declaration order, inherited fields first.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn kind_of(&self, name: &str) -> Option<WireKind> {
        self.index.get(name).map(|&i| self.fields[i].kind)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T> fmt::Debug for FieldTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldTable")
            .field("fields", &self.fields.iter().map(|f| f.name).collect::<Vec<_>>())
            .field("additional_data", &self.additional_data.is_some())
            .finish()
    }
}

/// Builder for [`FieldTable`].
///
/// Accessors are plain function pointers to a field of the record, which
/// keeps every table entry free of captured state.
pub struct FieldTableBuilder<T> {
    fields: Vec<Field<T>>,
    additional_data: Option<AdditionalDataLens<T>>,
}

impl<T: 'static> FieldTableBuilder<T> {
    /// Takes over every field of `parent`, reached through the embedded base
    /// record.
    pub fn inherit<P: 'static>(
        mut self,
        parent: &FieldTable<P>,
        get: fn(&T) -> &P,
        get_mut: fn(&mut T) -> &mut P,
    ) -> Self {
        for field in &parent.fields {
            let decode = Arc::clone(&field.decode);
            let encode = Arc::clone(&field.encode);
            self.fields.push(Field {
                name: field.name,
                kind: field.kind,
                decode: decoder(move |record, node| decode(get_mut(record), node)),
                encode: encoder(move |record, writer| encode(get(record), writer)),
            });
        }
        if let Some(lens) = &parent.additional_data {
            let parent_get = Arc::clone(&lens.get);
            let parent_get_mut = Arc::clone(&lens.get_mut);
            self.additional_data = Some(AdditionalDataLens::new(
                move |record| parent_get(get(record)),
                move |record| parent_get_mut(get_mut(record)),
            ));
        }
        self
    }

    /// A scalar field (string, number, boolean, timestamp, date, bytes).
    pub fn primitive<V: Primitive + 'static>(
        self,
        name: &'static str,
        get: fn(&T) -> &Option<V>,
        get_mut: fn(&mut T) -> &mut Option<V>,
    ) -> Self {
        self.push(
            name,
            WireKind::Primitive(V::KIND),
            decoder(move |record, node| {
                if let Some(value) = V::read(node)? {
                    *get_mut(record) = Some(value);
                }
                Ok(())
            }),
            encoder(move |record, writer| match get(record) {
                Some(value) => writer.write_primitive_value(name, value),
                None => Ok(()),
            }),
        )
    }

    /// An enumerated value, written as its member name.
    pub fn enumeration<E: GraphEnum>(
        self,
        name: &'static str,
        get: fn(&T) -> &Option<E>,
        get_mut: fn(&mut T) -> &mut Option<E>,
    ) -> Self {
        self.push(
            name,
            WireKind::Enum(E::TYPE_NAME),
            decoder(move |record, node| {
                if let Some(value) = node.get_enum_value::<E>()? {
                    *get_mut(record) = Some(value);
                }
                Ok(())
            }),
            encoder(move |record, writer| {
                if let Some(value) = get(record) {
                    writer.write_enum_value(name, *value);
                }
                Ok(())
            }),
        )
    }

    /// A nested object built by `factory`, which may pick a subtype.
    pub fn object<V: Parsable + 'static>(
        self,
        name: &'static str,
        factory: ParsableFactory<V>,
        get: fn(&T) -> &Option<V>,
        get_mut: fn(&mut T) -> &mut Option<V>,
    ) -> Self {
        self.push(
            name,
            WireKind::Object,
            decoder(move |record, node| {
                if let Some(value) = node.get_object_value(factory)? {
                    *get_mut(record) = Some(value);
                }
                Ok(())
            }),
            encoder(move |record, writer| match get(record) {
                Some(value) => writer.write_object_value(name, value),
                None => Ok(()),
            }),
        )
    }

    pub fn object_collection<V: Parsable + 'static>(
        self,
        name: &'static str,
        factory: ParsableFactory<V>,
        get: fn(&T) -> &Option<Vec<V>>,
        get_mut: fn(&mut T) -> &mut Option<Vec<V>>,
    ) -> Self {
        self.push(
            name,
            WireKind::ObjectCollection,
            decoder(move |record, node| {
                if let Some(values) = node.get_collection_of_object_values(factory)? {
                    *get_mut(record) = Some(values);
                }
                Ok(())
            }),
            encoder(move |record, writer| match get(record) {
                Some(values) => writer.write_collection_of_object_values(name, values),
                None => Ok(()),
            }),
        )
    }

    pub fn primitive_collection<V: Primitive + 'static>(
        self,
        name: &'static str,
        get: fn(&T) -> &Option<Vec<V>>,
        get_mut: fn(&mut T) -> &mut Option<Vec<V>>,
    ) -> Self {
        self.push(
            name,
            WireKind::PrimitiveCollection(V::KIND),
            decoder(move |record, node| {
                if let Some(values) = node.get_collection_of_primitive_values::<V>()? {
                    *get_mut(record) = Some(values);
                }
                Ok(())
            }),
            encoder(move |record, writer| match get(record) {
                Some(values) => writer.write_collection_of_primitive_values(name, values),
                None => Ok(()),
            }),
        )
    }

    /// Where members without a declared field are kept.
    pub fn additional_data(
        mut self,
        get: fn(&T) -> &AdditionalData,
        get_mut: fn(&mut T) -> &mut AdditionalData,
    ) -> Self {
        self.additional_data = Some(AdditionalDataLens::new(get, get_mut));
        self
    }

    pub fn build(self) -> FieldTable<T> {
        let index = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| (field.name, i))
            .collect();
        FieldTable {
            fields: self.fields,
            index,
            additional_data: self.additional_data,
        }
    }

    // A later declaration with the same name replaces the earlier one, so a
    // subtype can redeclare an inherited field.
    fn push(mut self, name: &'static str, kind: WireKind, decode: Decoder<T>, encode: Encoder<T>) -> Self {
        let field = Field {
            name,
            kind,
            decode,
            encode,
        };
        match self.fields.iter().position(|f| f.name == name) {
            Some(i) => self.fields[i] = field,
            None => self.fields.push(field),
        }
        self
    }
}
