//! Data models for the Graph device-management API.
//!
//! Records are plain structs with public, independently optional fields.
//! Derived types embed their base record as a named field. Every hierarchy
//! root that can hold more than one concrete type has a companion `*Kind`
//! enum, built from the `@odata.type` discriminator.

/// Declares the sum type of a polymorphic hierarchy: the enum itself, its
/// [`Parsable`](crate::serialization::Parsable) implementation delegating to
/// the active variant, and a `From` conversion for each variant.
macro_rules! polymorphic {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($ty:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant($ty),
            )+
        }

        impl $crate::serialization::Parsable for $name {
            fn deserialize(
                &mut self,
                node: &$crate::serialization::JsonParseNode<'_>,
            ) -> $crate::GraphResult<()> {
                match self {
                    $(Self::$variant(inner) => inner.deserialize(node),)+
                }
            }

            fn serialize(
                &self,
                writer: &mut $crate::serialization::JsonSerializationWriter,
            ) -> $crate::GraphResult<()> {
                match self {
                    $(Self::$variant(inner) => inner.serialize(writer),)+
                }
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

mod assignment;
mod collection_response;
mod device_configuration;
mod device_status;
mod entity;
mod enrollment_profile;
mod enums;
mod ios_wifi;
mod mac_os_custom;
mod mac_os_wifi;
mod odata_error;

pub use assignment::{
    AllDevicesAssignmentTarget, AllLicensedUsersAssignmentTarget, AssignmentTargetKind,
    DeviceAndAppManagementAssignmentTarget, DeviceConfigurationAssignment,
    ExclusionGroupAssignmentTarget, GroupAssignmentTarget,
};
pub use collection_response::CollectionResponse;
pub use device_configuration::{DeviceConfiguration, DeviceConfigurationKind};
pub use device_status::DeviceConfigurationDeviceStatus;
pub use entity::Entity;
pub use enrollment_profile::{
    DepEnrollmentBaseProfile, DepEnrollmentBaseProfileKind, DepIosEnrollmentProfile,
    DepMacOsEnrollmentProfile, EnrollmentProfile, EnrollmentProfileKind,
};
pub use enums::{
    ComplianceStatus, DeviceAndAppManagementAssignmentFilterType,
    DeviceAndAppManagementAssignmentSource, DeviceConfigAssignmentIntent, EapFastConfiguration,
    EapType, ITunesPairingMode, NonEapAuthenticationMethodForEapTtlsType,
    WiFiAuthenticationMethod, WiFiProxySetting, WiFiSecurityType,
};
pub use ios_wifi::{IosEnterpriseWiFiConfiguration, IosWiFiConfiguration, IosWiFiConfigurationKind};
pub use mac_os_custom::MacOsCustomConfiguration;
pub use mac_os_wifi::{
    MacOsEnterpriseWiFiConfiguration, MacOsWiFiConfiguration, MacOsWiFiConfigurationKind,
};
pub use odata_error::{ODataError, ODataErrorDetail};
