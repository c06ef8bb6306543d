use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use super::{ComplianceStatus, Entity};
use crate::serialization::{FieldTable, JsonParseNode, Schema};
use crate::GraphResult;

/// Installation state of a device configuration on one device.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceConfigurationDeviceStatus {
    pub entity: Entity,
    pub compliance_grace_period_expiration_date_time: Option<DateTime<Utc>>,
    pub device_display_name: Option<String>,
    /// The device model that is being reported.
    pub device_model: Option<String>,
    pub last_reported_date_time: Option<DateTime<Utc>>,
    /// Platform of the device that is being reported.
    pub platform: Option<i32>,
    pub status: Option<ComplianceStatus>,
    /// The user name that is being reported.
    pub user_name: Option<String>,
    pub user_principal_name: Option<String>,
}

static DEVICE_STATUS_FIELDS: Lazy<FieldTable<DeviceConfigurationDeviceStatus>> = Lazy::new(|| {
    FieldTable::<DeviceConfigurationDeviceStatus>::builder()
        .inherit(Entity::fields(), |m| &m.entity, |m| &mut m.entity)
        .primitive(
            "complianceGracePeriodExpirationDateTime",
            |m| &m.compliance_grace_period_expiration_date_time,
            |m| &mut m.compliance_grace_period_expiration_date_time,
        )
        .primitive("deviceDisplayName", |m| &m.device_display_name, |m| &mut m.device_display_name)
        .primitive("deviceModel", |m| &m.device_model, |m| &mut m.device_model)
        .primitive(
            "lastReportedDateTime",
            |m| &m.last_reported_date_time,
            |m| &mut m.last_reported_date_time,
        )
        .primitive("platform", |m| &m.platform, |m| &mut m.platform)
        .enumeration("status", |m| &m.status, |m| &mut m.status)
        .primitive("userName", |m| &m.user_name, |m| &mut m.user_name)
        .primitive("userPrincipalName", |m| &m.user_principal_name, |m| &mut m.user_principal_name)
        .build()
});

impl Schema for DeviceConfigurationDeviceStatus {
    fn fields() -> &'static FieldTable<Self> {
        &DEVICE_STATUS_FIELDS
    }
}

impl DeviceConfigurationDeviceStatus {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.deviceConfigurationDeviceStatus";

    pub fn new() -> Self {
        Self {
            entity: Entity::tagged(Self::ODATA_TYPE),
            compliance_grace_period_expiration_date_time: None,
            device_display_name: None,
            device_model: None,
            last_reported_date_time: None,
            platform: None,
            status: None,
            user_name: None,
            user_principal_name: None,
        }
    }

    pub fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> GraphResult<Self> {
        Ok(Self::new())
    }
}

impl Default for DeviceConfigurationDeviceStatus {
    fn default() -> Self {
        Self::new()
    }
}
