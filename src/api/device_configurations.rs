use http::Method;

use super::{ApiEndpoint, QueryParameters};
use crate::models::{CollectionResponse, DeviceConfigurationAssignment, DeviceConfigurationKind};
use crate::serialization::Parsable;
use crate::{GraphClient, GraphError, GraphResult};

const DEVICE_CONFIGURATIONS: &str = "/deviceManagement/deviceConfigurations";

/// Manages device configuration profiles.
///
/// Every profile is returned as a [`DeviceConfigurationKind`], whose variant
/// is picked from the `@odata.type` of the payload.
pub struct DeviceConfigurationsApi<'a> {
    client: &'a GraphClient,
}

impl<'a> ApiEndpoint for DeviceConfigurationsApi<'a> {
    fn client(&self) -> &GraphClient {
        self.client
    }
}

impl<'a> DeviceConfigurationsApi<'a> {
    pub(crate) fn new(client: &'a GraphClient) -> Self {
        Self { client }
    }

    /// Fetches the first page of device configuration profiles.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &graph_models::GraphClient) -> Result<(), graph_models::GraphError> {
    /// use graph_models::QueryParameters;
    ///
    /// let page = client
    ///     .device_configurations()
    ///     .list(&QueryParameters::new().select(["id", "displayName"]))
    ///     .await?;
    ///
    /// for profile in page.value {
    ///     println!("{:?}: {:?}", profile.id(), profile.configuration().display_name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self, query: &QueryParameters) -> GraphResult<CollectionResponse<DeviceConfigurationKind>> {
        let url = self.client().endpoint_url(DEVICE_CONFIGURATIONS, Some(query))?;
        self.client()
            .get_page(url, DeviceConfigurationKind::create_from_discriminator_value)
            .await
    }

    /// Fetches every profile, following `@odata.nextLink` across pages.
    pub async fn list_all(&self, query: &QueryParameters) -> GraphResult<Vec<DeviceConfigurationKind>> {
        self.client()
            .get_all_pages(
                DEVICE_CONFIGURATIONS,
                Some(query),
                DeviceConfigurationKind::create_from_discriminator_value,
            )
            .await
    }

    /// Fetches one profile by id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ApiError`](crate::GraphError::ApiError) with
    /// status 404 if no such profile exists.
    pub async fn get(&self, id: &str, query: &QueryParameters) -> GraphResult<DeviceConfigurationKind> {
        self.client()
            .get(
                &format!("{DEVICE_CONFIGURATIONS}/{id}"),
                Some(query),
                DeviceConfigurationKind::create_from_discriminator_value,
            )
            .await
    }

    /// Creates a profile and returns it as stored by the service.
    ///
    /// The body's `@odata.type` tells the service which kind of profile to
    /// create, so pass a concrete profile built with its `new()`.
    pub async fn create<B: Parsable + ?Sized>(&self, profile: &B) -> GraphResult<DeviceConfigurationKind> {
        self.client()
            .send_parsable(
                Method::POST,
                DEVICE_CONFIGURATIONS,
                profile,
                DeviceConfigurationKind::create_from_discriminator_value,
            )
            .await?
            .ok_or(GraphError::EmptyResponse)
    }

    /// Updates the present fields of a profile (`PATCH`).
    ///
    /// Returns the updated profile when the service echoes it back, and
    /// `None` for the usual `204 No Content`.
    pub async fn update<B: Parsable + ?Sized>(
        &self,
        id: &str,
        changes: &B,
    ) -> GraphResult<Option<DeviceConfigurationKind>> {
        self.client()
            .send_parsable(
                Method::PATCH,
                &format!("{DEVICE_CONFIGURATIONS}/{id}"),
                changes,
                DeviceConfigurationKind::create_from_discriminator_value,
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> GraphResult<()> {
        self.client()
            .send_no_content(Method::DELETE, &format!("{DEVICE_CONFIGURATIONS}/{id}"))
            .await
    }

    /// Fetches the assignments of one profile.
    pub async fn assignments(&self, id: &str) -> GraphResult<CollectionResponse<DeviceConfigurationAssignment>> {
        let url = self
            .client()
            .endpoint_url(&format!("{DEVICE_CONFIGURATIONS}/{id}/assignments"), None)?;
        self.client()
            .get_page(url, DeviceConfigurationAssignment::create_from_discriminator_value)
            .await
    }
}
