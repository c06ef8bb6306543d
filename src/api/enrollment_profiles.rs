use http::Method;

use super::{ApiEndpoint, QueryParameters};
use crate::models::{CollectionResponse, EnrollmentProfileKind};
use crate::serialization::Parsable;
use crate::{GraphClient, GraphError, GraphResult};

/// Manages the enrollment profiles of one DEP onboarding setting.
pub struct EnrollmentProfilesApi<'a> {
    client: &'a GraphClient,
    dep_onboarding_setting_id: &'a str,
}

impl<'a> ApiEndpoint for EnrollmentProfilesApi<'a> {
    fn client(&self) -> &GraphClient {
        self.client
    }
}

impl<'a> EnrollmentProfilesApi<'a> {
    pub(crate) fn new(client: &'a GraphClient, dep_onboarding_setting_id: &'a str) -> Self {
        Self {
            client,
            dep_onboarding_setting_id,
        }
    }

    fn collection(&self) -> String {
        format!(
            "/deviceManagement/depOnboardingSettings/{}/enrollmentProfiles",
            self.dep_onboarding_setting_id
        )
    }

    fn item(&self, id: &str) -> String {
        format!("{}/{id}", self.collection())
    }

    /// Fetches the first page of enrollment profiles.
    pub async fn list(&self, query: &QueryParameters) -> GraphResult<CollectionResponse<EnrollmentProfileKind>> {
        let url = self.client().endpoint_url(&self.collection(), Some(query))?;
        self.client()
            .get_page(url, EnrollmentProfileKind::create_from_discriminator_value)
            .await
    }

    /// Fetches one enrollment profile by id.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &graph_models::GraphClient) -> Result<(), graph_models::GraphError> {
    /// use graph_models::{EnrollmentProfileKind, QueryParameters};
    ///
    /// let profile = client
    ///     .enrollment_profiles("dep-setting-id")
    ///     .get("profile-id", &QueryParameters::new())
    ///     .await?;
    ///
    /// if let EnrollmentProfileKind::DepIos(ios) = profile {
    ///     println!("shared iPad: {:?}", ios.enable_shared_i_pad);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(&self, id: &str, query: &QueryParameters) -> GraphResult<EnrollmentProfileKind> {
        self.client()
            .get(
                &self.item(id),
                Some(query),
                EnrollmentProfileKind::create_from_discriminator_value,
            )
            .await
    }

    pub async fn create<B: Parsable + ?Sized>(&self, profile: &B) -> GraphResult<EnrollmentProfileKind> {
        self.client()
            .send_parsable(
                Method::POST,
                &self.collection(),
                profile,
                EnrollmentProfileKind::create_from_discriminator_value,
            )
            .await?
            .ok_or(GraphError::EmptyResponse)
    }

    /// Updates the present fields of an enrollment profile (`PATCH`).
    pub async fn update<B: Parsable + ?Sized>(
        &self,
        id: &str,
        changes: &B,
    ) -> GraphResult<Option<EnrollmentProfileKind>> {
        self.client()
            .send_parsable(
                Method::PATCH,
                &self.item(id),
                changes,
                EnrollmentProfileKind::create_from_discriminator_value,
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> GraphResult<()> {
        self.client().send_no_content(Method::DELETE, &self.item(id)).await
    }
}
