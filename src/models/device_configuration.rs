use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use super::{
    DeviceConfigurationAssignment, DeviceConfigurationDeviceStatus, Entity,
    IosEnterpriseWiFiConfiguration, IosWiFiConfiguration, MacOsCustomConfiguration,
    MacOsEnterpriseWiFiConfiguration, MacOsWiFiConfiguration,
};
use crate::serialization::{DiscriminatorRegistry, FieldTable, JsonParseNode, Schema};
use crate::GraphResult;

/// Device configuration profile. Abstract: concrete profiles embed it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceConfiguration {
    pub entity: Entity,

    /// The list of assignments for the device configuration profile.
    pub assignments: Option<Vec<DeviceConfigurationAssignment>>,

    /// DateTime the object was created.
    pub created_date_time: Option<DateTime<Utc>>,

    /// Admin provided description of the Device Configuration.
    pub description: Option<String>,

    /// Admin provided name of the device configuration.
    pub display_name: Option<String>,

    /// DateTime the object was last modified.
    pub last_modified_date_time: Option<DateTime<Utc>>,

    /// List of Scope Tags for this Entity instance.
    pub role_scope_tag_ids: Option<Vec<String>>,

    /// Indicates whether or not the underlying Device Configuration supports
    /// the assignment of scope tags.
    pub supports_scope_tags: Option<bool>,

    /// Version of the device configuration.
    pub version: Option<i32>,

    /// Device configuration installation status by device.
    pub device_statuses: Option<Vec<DeviceConfigurationDeviceStatus>>,
}

static DEVICE_CONFIGURATION_FIELDS: Lazy<FieldTable<DeviceConfiguration>> = Lazy::new(|| {
    FieldTable::<DeviceConfiguration>::builder()
        .inherit(Entity::fields(), |m| &m.entity, |m| &mut m.entity)
        .object_collection(
            "assignments",
            DeviceConfigurationAssignment::create_from_discriminator_value,
            |m| &m.assignments,
            |m| &mut m.assignments,
        )
        .primitive("createdDateTime", |m| &m.created_date_time, |m| &mut m.created_date_time)
        .primitive("description", |m| &m.description, |m| &mut m.description)
        .primitive("displayName", |m| &m.display_name, |m| &mut m.display_name)
        .primitive(
            "lastModifiedDateTime",
            |m| &m.last_modified_date_time,
            |m| &mut m.last_modified_date_time,
        )
        .primitive_collection(
            "roleScopeTagIds",
            |m| &m.role_scope_tag_ids,
            |m| &mut m.role_scope_tag_ids,
        )
        .primitive(
            "supportsScopeTags",
            |m| &m.supports_scope_tags,
            |m| &mut m.supports_scope_tags,
        )
        .primitive("version", |m| &m.version, |m| &mut m.version)
        .object_collection(
            "deviceStatuses",
            DeviceConfigurationDeviceStatus::create_from_discriminator_value,
            |m| &m.device_statuses,
            |m| &mut m.device_statuses,
        )
        .build()
});

impl Schema for DeviceConfiguration {
    fn fields() -> &'static FieldTable<Self> {
        &DEVICE_CONFIGURATION_FIELDS
    }
}

impl DeviceConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn tagged(odata_type: &str) -> Self {
        Self {
            entity: Entity::tagged(odata_type),
            ..Self::default()
        }
    }
}

polymorphic! {
    /// Any device configuration profile, resolved from `@odata.type`.
    pub enum DeviceConfigurationKind {
        /// A profile whose discriminator is missing or not recognised.
        Base(DeviceConfiguration),
        MacOsWiFi(MacOsWiFiConfiguration),
        MacOsEnterpriseWiFi(MacOsEnterpriseWiFiConfiguration),
        IosWiFi(IosWiFiConfiguration),
        IosEnterpriseWiFi(IosEnterpriseWiFiConfiguration),
        MacOsCustom(MacOsCustomConfiguration),
    }
}

static DEVICE_CONFIGURATION_TYPES: Lazy<DiscriminatorRegistry<DeviceConfigurationKind>> =
    Lazy::new(|| {
        DiscriminatorRegistry::<DeviceConfigurationKind>::new("deviceConfiguration", || {
            DeviceConfiguration::new().into()
        })
        .register(MacOsWiFiConfiguration::ODATA_TYPE, || MacOsWiFiConfiguration::new().into())
        .register(MacOsEnterpriseWiFiConfiguration::ODATA_TYPE, || {
            MacOsEnterpriseWiFiConfiguration::new().into()
        })
        .register(IosWiFiConfiguration::ODATA_TYPE, || IosWiFiConfiguration::new().into())
        .register(IosEnterpriseWiFiConfiguration::ODATA_TYPE, || {
            IosEnterpriseWiFiConfiguration::new().into()
        })
        .register(MacOsCustomConfiguration::ODATA_TYPE, || MacOsCustomConfiguration::new().into())
    });

impl DeviceConfigurationKind {
    /// Builds the empty profile matching the node's discriminator.
    pub fn create_from_discriminator_value(node: &JsonParseNode<'_>) -> GraphResult<Self> {
        DEVICE_CONFIGURATION_TYPES.create(node)
    }

    pub fn registry() -> &'static DiscriminatorRegistry<Self> {
        &DEVICE_CONFIGURATION_TYPES
    }

    /// The device configuration fields every profile carries.
    pub fn configuration(&self) -> &DeviceConfiguration {
        match self {
            Self::Base(c) => c,
            Self::MacOsWiFi(c) => &c.configuration,
            Self::MacOsEnterpriseWiFi(c) => &c.wifi.configuration,
            Self::IosWiFi(c) => &c.configuration,
            Self::IosEnterpriseWiFi(c) => &c.wifi.configuration,
            Self::MacOsCustom(c) => &c.configuration,
        }
    }

    pub fn configuration_mut(&mut self) -> &mut DeviceConfiguration {
        match self {
            Self::Base(c) => c,
            Self::MacOsWiFi(c) => &mut c.configuration,
            Self::MacOsEnterpriseWiFi(c) => &mut c.wifi.configuration,
            Self::IosWiFi(c) => &mut c.configuration,
            Self::IosEnterpriseWiFi(c) => &mut c.wifi.configuration,
            Self::MacOsCustom(c) => &mut c.configuration,
        }
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.configuration().entity.odata_type.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.configuration().entity.id.as_deref()
    }
}
