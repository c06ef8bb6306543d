// Export submodules
pub mod device_configurations;
pub mod enrollment_profiles;

use crate::GraphClient;

/// Common trait for API endpoints.
///
/// This trait is implemented by all API endpoints and provides a method to
/// get the client associated with the endpoint.
pub(crate) trait ApiEndpoint {
    /// Get the client associated with this endpoint.
    fn client(&self) -> &GraphClient;
}

/// OData query options for read requests.
///
/// ```
/// use graph_models::QueryParameters;
///
/// let query = QueryParameters::new()
///     .select(["id", "displayName"])
///     .expand(["assignments"])
///     .top(10);
/// assert!(!query.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters {
    select: Vec<String>,
    expand: Vec<String>,
    filter: Option<String>,
    top: Option<u32>,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the returned properties (`$select`).
    pub fn select<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select.extend(properties.into_iter().map(Into::into));
        self
    }

    /// Includes related entities inline (`$expand`).
    pub fn expand<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand.extend(relations.into_iter().map(Into::into));
        self
    }

    /// Filters the items of a collection (`$filter`).
    pub fn filter(mut self, expression: impl Into<String>) -> Self {
        self.filter = Some(expression.into());
        self
    }

    /// Limits the page size of a collection (`$top`).
    pub fn top(mut self, count: u32) -> Self {
        self.top = Some(count);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.select.is_empty() && self.expand.is_empty() && self.filter.is_none() && self.top.is_none()
    }

    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.select.is_empty() {
            pairs.push(("$select", self.select.join(",")));
        }
        if !self.expand.is_empty() {
            pairs.push(("$expand", self.expand.join(",")));
        }
        if let Some(filter) = &self.filter {
            pairs.push(("$filter", filter.clone()));
        }
        if let Some(top) = self.top {
            pairs.push(("$top", top.to_string()));
        }
        pairs
    }
}
