use crate::serialization::{JsonParseNode, Parsable, ParsableFactory};
use crate::GraphResult;

/// One page of an OData collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionResponse<T> {
    /// The items on this page, in server order.
    pub value: Vec<T>,

    /// Link to the next page, if there is one.
    pub odata_next_link: Option<String>,

    /// Total number of items, when `$count` was requested.
    pub odata_count: Option<i64>,
}

impl<T> Default for CollectionResponse<T> {
    fn default() -> Self {
        Self {
            value: Vec::new(),
            odata_next_link: None,
            odata_count: None,
        }
    }
}

impl<T: Parsable> CollectionResponse<T> {
    /// Decodes a collection page, building each item with `factory`.
    pub fn from_node(node: &JsonParseNode<'_>, factory: ParsableFactory<T>) -> GraphResult<Self> {
        // A page must be an object even when it carries no members we read.
        node.members()?;

        let value = match node.child_node("value") {
            Some(items) => items.get_collection_of_object_values(factory)?.unwrap_or_default(),
            None => Vec::new(),
        };
        let odata_next_link = match node.child_node("@odata.nextLink") {
            Some(link) => link.get_string_value()?,
            None => None,
        };
        let odata_count = match node.child_node("@odata.count") {
            Some(count) => count.get_i64_value()?,
            None => None,
        };

        Ok(Self {
            value,
            odata_next_link,
            odata_count,
        })
    }

    /// Decodes a collection page from a JSON document.
    pub fn parse(content: &[u8], factory: ParsableFactory<T>) -> GraphResult<Self> {
        let value: serde_json::Value = serde_json::from_slice(content)?;
        Self::from_node(&JsonParseNode::new(&value), factory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeviceConfigurationKind, MacOsWiFiConfiguration};
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_items_and_paging_members() {
        let page = CollectionResponse::parse(
            br##"{
                "@odata.count": 2,
                "@odata.nextLink": "https://graph.microsoft.com/beta/deviceManagement/deviceConfigurations?$skiptoken=abc",
                "value": [
                    { "@odata.type": "#microsoft.graph.macOSWiFiConfiguration", "ssid": "Corp" },
                    { "displayName": "untyped" }
                ]
            }"##,
            DeviceConfigurationKind::create_from_discriminator_value,
        )
        .unwrap();

        assert_eq!(page.odata_count, Some(2));
        assert!(page.odata_next_link.unwrap().ends_with("$skiptoken=abc"));
        match &page.value[0] {
            DeviceConfigurationKind::MacOsWiFi(MacOsWiFiConfiguration { ssid, .. }) => {
                assert_eq!(ssid.as_deref(), Some("Corp"))
            }
            other => panic!("unexpected item {other:?}"),
        }
        assert!(matches!(page.value[1], DeviceConfigurationKind::Base(_)));
    }

    #[test]
    fn empty_page_has_no_items() {
        let page = CollectionResponse::parse(br#"{"value": []}"#, DeviceConfigurationKind::create_from_discriminator_value)
            .unwrap();
        assert!(page.value.is_empty());
        assert_eq!(page.odata_next_link, None);
    }
}
