use std::collections::HashMap;
use std::fmt;

use log::debug;

use super::{JsonParseNode, ODATA_TYPE_KEY};
use crate::GraphResult;

/// Maps discriminator tags of one hierarchy to constructors of its concrete
/// variants.
///
/// A node without a tag, or with a tag nobody registered, is built by the
/// fallback constructor of the hierarchy's base type. Matching is exact and
/// case-sensitive.
pub struct DiscriminatorRegistry<R> {
    hierarchy: &'static str,
    fallback: fn() -> R,
    constructors: HashMap<&'static str, fn() -> R>,
}

impl<R> DiscriminatorRegistry<R> {
    pub fn new(hierarchy: &'static str, fallback: fn() -> R) -> Self {
        Self {
            hierarchy,
            fallback,
            constructors: HashMap::new(),
        }
    }

    pub fn register(mut self, tag: &'static str, constructor: fn() -> R) -> Self {
        self.constructors.insert(tag, constructor);
        self
    }

    pub fn hierarchy(&self) -> &'static str {
        self.hierarchy
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.constructors.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    /// Builds an empty record for `tag`.
    pub fn resolve(&self, tag: Option<&str>) -> R {
        match tag {
            Some(tag) => match self.constructors.get(tag) {
                Some(constructor) => constructor(),
                None => {
                    debug!("unknown {} discriminator '{}', using base type", self.hierarchy, tag);
                    (self.fallback)()
                }
            },
            None => (self.fallback)(),
        }
    }

    /// Reads the `@odata.type` member of `node` and builds the matching empty
    /// record. A discriminator that is present but not a string is an error.
    pub fn create(&self, node: &JsonParseNode<'_>) -> GraphResult<R> {
        let tag = match node.child_node(ODATA_TYPE_KEY) {
            Some(child) => child.get_string_value()?,
            None => None,
        };
        Ok(self.resolve(tag.as_deref()))
    }
}

impl<R> fmt::Debug for DiscriminatorRegistry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscriminatorRegistry")
            .field("hierarchy", &self.hierarchy)
            .field("tags", &self.tags())
            .finish()
    }
}
