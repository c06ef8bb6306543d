use once_cell::sync::Lazy;

use super::{Entity, ITunesPairingMode};
use crate::serialization::{DiscriminatorRegistry, FieldTable, JsonParseNode, Schema};
use crate::GraphResult;

/// The enrollment profile schema. Abstract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollmentProfile {
    pub entity: Entity,

    /// Configuration endpoint url to use for Enrollment.
    pub configuration_endpoint_url: Option<String>,

    pub description: Option<String>,

    pub display_name: Option<String>,

    /// Indicates to authenticate with Apple Setup Assistant instead of
    /// Company Portal.
    pub enable_authentication_via_company_portal: Option<bool>,

    /// Indicates that Company Portal is required on setup assistant enrolled
    /// devices.
    pub require_company_portal_on_setup_assistant_enrolled_devices: Option<bool>,

    /// Indicates if the profile requires user authentication.
    pub requires_user_authentication: Option<bool>,
}

static ENROLLMENT_PROFILE_FIELDS: Lazy<FieldTable<EnrollmentProfile>> = Lazy::new(|| {
    FieldTable::<EnrollmentProfile>::builder()
        .inherit(Entity::fields(), |m| &m.entity, |m| &mut m.entity)
        .primitive(
            "configurationEndpointUrl",
            |m| &m.configuration_endpoint_url,
            |m| &mut m.configuration_endpoint_url,
        )
        .primitive("description", |m| &m.description, |m| &mut m.description)
        .primitive("displayName", |m| &m.display_name, |m| &mut m.display_name)
        .primitive(
            "enableAuthenticationViaCompanyPortal",
            |m| &m.enable_authentication_via_company_portal,
            |m| &mut m.enable_authentication_via_company_portal,
        )
        .primitive(
            "requireCompanyPortalOnSetupAssistantEnrolledDevices",
            |m| &m.require_company_portal_on_setup_assistant_enrolled_devices,
            |m| &mut m.require_company_portal_on_setup_assistant_enrolled_devices,
        )
        .primitive(
            "requiresUserAuthentication",
            |m| &m.requires_user_authentication,
            |m| &mut m.requires_user_authentication,
        )
        .build()
});

impl Schema for EnrollmentProfile {
    fn fields() -> &'static FieldTable<Self> {
        &ENROLLMENT_PROFILE_FIELDS
    }
}

impl EnrollmentProfile {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Settings shared by the Apple DEP enrollment profiles.
#[derive(Debug, Clone, PartialEq)]
pub struct DepEnrollmentBaseProfile {
    pub profile: EnrollmentProfile,
    pub apple_id_disabled: Option<bool>,
    pub apple_pay_disabled: Option<bool>,
    /// URL for setup assistant login. A boolean on the wire.
    pub configuration_web_url: Option<bool>,
    /// Sets a literal or name pattern.
    pub device_name_template: Option<String>,
    pub diagnostics_disabled: Option<bool>,
    pub display_tone_setup_disabled: Option<bool>,
    /// All the enabled skip keys as strings.
    pub enabled_skip_keys: Option<Vec<String>>,
    pub is_default: Option<bool>,
    pub is_mandatory: Option<bool>,
    pub location_disabled: Option<bool>,
    pub privacy_pane_disabled: Option<bool>,
    pub profile_removal_disabled: Option<bool>,
    pub restore_blocked: Option<bool>,
    pub screen_time_screen_disabled: Option<bool>,
    pub siri_disabled: Option<bool>,
    pub supervised_mode_enabled: Option<bool>,
    pub support_department: Option<String>,
    pub support_phone_number: Option<String>,
    pub terms_and_conditions_disabled: Option<bool>,
    pub touch_id_disabled: Option<bool>,
}

static DEP_BASE_FIELDS: Lazy<FieldTable<DepEnrollmentBaseProfile>> = Lazy::new(|| {
    FieldTable::<DepEnrollmentBaseProfile>::builder()
        .inherit(EnrollmentProfile::fields(), |m| &m.profile, |m| &mut m.profile)
        .primitive("appleIdDisabled", |m| &m.apple_id_disabled, |m| &mut m.apple_id_disabled)
        .primitive("applePayDisabled", |m| &m.apple_pay_disabled, |m| &mut m.apple_pay_disabled)
        .primitive(
            "configurationWebUrl",
            |m| &m.configuration_web_url,
            |m| &mut m.configuration_web_url,
        )
        .primitive(
            "deviceNameTemplate",
            |m| &m.device_name_template,
            |m| &mut m.device_name_template,
        )
        .primitive(
            "diagnosticsDisabled",
            |m| &m.diagnostics_disabled,
            |m| &mut m.diagnostics_disabled,
        )
        .primitive(
            "displayToneSetupDisabled",
            |m| &m.display_tone_setup_disabled,
            |m| &mut m.display_tone_setup_disabled,
        )
        .primitive_collection(
            "enabledSkipKeys",
            |m| &m.enabled_skip_keys,
            |m| &mut m.enabled_skip_keys,
        )
        .primitive("isDefault", |m| &m.is_default, |m| &mut m.is_default)
        .primitive("isMandatory", |m| &m.is_mandatory, |m| &mut m.is_mandatory)
        .primitive("locationDisabled", |m| &m.location_disabled, |m| &mut m.location_disabled)
        .primitive(
            "privacyPaneDisabled",
            |m| &m.privacy_pane_disabled,
            |m| &mut m.privacy_pane_disabled,
        )
        .primitive(
            "profileRemovalDisabled",
            |m| &m.profile_removal_disabled,
            |m| &mut m.profile_removal_disabled,
        )
        .primitive("restoreBlocked", |m| &m.restore_blocked, |m| &mut m.restore_blocked)
        .primitive(
            "screenTimeScreenDisabled",
            |m| &m.screen_time_screen_disabled,
            |m| &mut m.screen_time_screen_disabled,
        )
        .primitive("siriDisabled", |m| &m.siri_disabled, |m| &mut m.siri_disabled)
        .primitive(
            "supervisedModeEnabled",
            |m| &m.supervised_mode_enabled,
            |m| &mut m.supervised_mode_enabled,
        )
        .primitive("supportDepartment", |m| &m.support_department, |m| &mut m.support_department)
        .primitive(
            "supportPhoneNumber",
            |m| &m.support_phone_number,
            |m| &mut m.support_phone_number,
        )
        .primitive(
            "termsAndConditionsDisabled",
            |m| &m.terms_and_conditions_disabled,
            |m| &mut m.terms_and_conditions_disabled,
        )
        .primitive("touchIdDisabled", |m| &m.touch_id_disabled, |m| &mut m.touch_id_disabled)
        .build()
});

impl Schema for DepEnrollmentBaseProfile {
    fn fields() -> &'static FieldTable<Self> {
        &DEP_BASE_FIELDS
    }
}

impl DepEnrollmentBaseProfile {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.depEnrollmentBaseProfile";

    pub fn new() -> Self {
        Self::tagged(Self::ODATA_TYPE)
    }

    fn tagged(odata_type: &str) -> Self {
        Self {
            profile: EnrollmentProfile {
                entity: Entity::tagged(odata_type),
                ..EnrollmentProfile::default()
            },
            apple_id_disabled: None,
            apple_pay_disabled: None,
            configuration_web_url: None,
            device_name_template: None,
            diagnostics_disabled: None,
            display_tone_setup_disabled: None,
            enabled_skip_keys: None,
            is_default: None,
            is_mandatory: None,
            location_disabled: None,
            privacy_pane_disabled: None,
            profile_removal_disabled: None,
            restore_blocked: None,
            screen_time_screen_disabled: None,
            siri_disabled: None,
            supervised_mode_enabled: None,
            support_department: None,
            support_phone_number: None,
            terms_and_conditions_disabled: None,
            touch_id_disabled: None,
        }
    }
}

impl Default for DepEnrollmentBaseProfile {
    fn default() -> Self {
        Self::new()
    }
}

/// DEP enrollment profile for iOS and iPadOS devices.
#[derive(Debug, Clone, PartialEq)]
pub struct DepIosEnrollmentProfile {
    pub dep_profile: DepEnrollmentBaseProfile,
    pub appearance_screen_disabled: Option<bool>,
    /// Carrier URL for activating device eSIM.
    pub carrier_activation_url: Option<String>,
    /// This indicates whether the device is to be enrolled in a mode which
    /// enables multi user scenarios. Only applicable in shared iPads.
    pub enable_shared_i_pad: Option<bool>,
    pub i_tunes_pairing_mode: Option<ITunesPairingMode>,
    /// Indicates the timeout before which the device is locked with a
    /// passcode.
    pub passcode_lock_grace_period_in_seconds: Option<i32>,
    /// The maximum number of users that can use a shared iPad.
    pub shared_i_pad_maximum_user_count: Option<i32>,
    pub temporary_session_timeout_in_seconds: Option<i32>,
    pub zoom_disabled: Option<bool>,
}

static DEP_IOS_FIELDS: Lazy<FieldTable<DepIosEnrollmentProfile>> = Lazy::new(|| {
    FieldTable::<DepIosEnrollmentProfile>::builder()
        .inherit(DepEnrollmentBaseProfile::fields(), |m| &m.dep_profile, |m| &mut m.dep_profile)
        .primitive(
            "appearanceScreenDisabled",
            |m| &m.appearance_screen_disabled,
            |m| &mut m.appearance_screen_disabled,
        )
        .primitive(
            "carrierActivationUrl",
            |m| &m.carrier_activation_url,
            |m| &mut m.carrier_activation_url,
        )
        .primitive("enableSharedIPad", |m| &m.enable_shared_i_pad, |m| &mut m.enable_shared_i_pad)
        .enumeration(
            "iTunesPairingMode",
            |m| &m.i_tunes_pairing_mode,
            |m| &mut m.i_tunes_pairing_mode,
        )
        .primitive(
            "passcodeLockGracePeriodInSeconds",
            |m| &m.passcode_lock_grace_period_in_seconds,
            |m| &mut m.passcode_lock_grace_period_in_seconds,
        )
        .primitive(
            "sharedIPadMaximumUserCount",
            |m| &m.shared_i_pad_maximum_user_count,
            |m| &mut m.shared_i_pad_maximum_user_count,
        )
        .primitive(
            "temporarySessionTimeoutInSeconds",
            |m| &m.temporary_session_timeout_in_seconds,
            |m| &mut m.temporary_session_timeout_in_seconds,
        )
        .primitive("zoomDisabled", |m| &m.zoom_disabled, |m| &mut m.zoom_disabled)
        .build()
});

impl Schema for DepIosEnrollmentProfile {
    fn fields() -> &'static FieldTable<Self> {
        &DEP_IOS_FIELDS
    }
}

impl DepIosEnrollmentProfile {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.depIOSEnrollmentProfile";

    pub fn new() -> Self {
        Self {
            dep_profile: DepEnrollmentBaseProfile::tagged(Self::ODATA_TYPE),
            appearance_screen_disabled: None,
            carrier_activation_url: None,
            enable_shared_i_pad: None,
            i_tunes_pairing_mode: None,
            passcode_lock_grace_period_in_seconds: None,
            shared_i_pad_maximum_user_count: None,
            temporary_session_timeout_in_seconds: None,
            zoom_disabled: None,
        }
    }
}

impl Default for DepIosEnrollmentProfile {
    fn default() -> Self {
        Self::new()
    }
}

/// DEP enrollment profile for macOS devices.
#[derive(Debug, Clone, PartialEq)]
pub struct DepMacOsEnrollmentProfile {
    pub dep_profile: DepEnrollmentBaseProfile,
    pub accessibility_screen_disabled: Option<bool>,
    pub file_vault_disabled: Option<bool>,
    /// Indicates whether Setup Assistant will auto populate the primary
    /// account information.
    pub is_local_primary_account: Option<bool>,
    pub primary_account_full_name: Option<String>,
    pub primary_account_user_name: Option<String>,
    pub registration_disabled: Option<bool>,
    pub zoom_disabled: Option<bool>,
}

static DEP_MAC_OS_FIELDS: Lazy<FieldTable<DepMacOsEnrollmentProfile>> = Lazy::new(|| {
    FieldTable::<DepMacOsEnrollmentProfile>::builder()
        .inherit(DepEnrollmentBaseProfile::fields(), |m| &m.dep_profile, |m| &mut m.dep_profile)
        .primitive(
            "accessibilityScreenDisabled",
            |m| &m.accessibility_screen_disabled,
            |m| &mut m.accessibility_screen_disabled,
        )
        .primitive("fileVaultDisabled", |m| &m.file_vault_disabled, |m| &mut m.file_vault_disabled)
        .primitive(
            "isLocalPrimaryAccount",
            |m| &m.is_local_primary_account,
            |m| &mut m.is_local_primary_account,
        )
        .primitive(
            "primaryAccountFullName",
            |m| &m.primary_account_full_name,
            |m| &mut m.primary_account_full_name,
        )
        .primitive(
            "primaryAccountUserName",
            |m| &m.primary_account_user_name,
            |m| &mut m.primary_account_user_name,
        )
        .primitive(
            "registrationDisabled",
            |m| &m.registration_disabled,
            |m| &mut m.registration_disabled,
        )
        .primitive("zoomDisabled", |m| &m.zoom_disabled, |m| &mut m.zoom_disabled)
        .build()
});

impl Schema for DepMacOsEnrollmentProfile {
    fn fields() -> &'static FieldTable<Self> {
        &DEP_MAC_OS_FIELDS
    }
}

impl DepMacOsEnrollmentProfile {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.depMacOSEnrollmentProfile";

    pub fn new() -> Self {
        Self {
            dep_profile: DepEnrollmentBaseProfile::tagged(Self::ODATA_TYPE),
            accessibility_screen_disabled: None,
            file_vault_disabled: None,
            is_local_primary_account: None,
            primary_account_full_name: None,
            primary_account_user_name: None,
            registration_disabled: None,
            zoom_disabled: None,
        }
    }
}

impl Default for DepMacOsEnrollmentProfile {
    fn default() -> Self {
        Self::new()
    }
}

polymorphic! {
    /// Any enrollment profile, resolved from `@odata.type`.
    pub enum EnrollmentProfileKind {
        Base(EnrollmentProfile),
        DepBase(DepEnrollmentBaseProfile),
        DepIos(DepIosEnrollmentProfile),
        DepMacOs(DepMacOsEnrollmentProfile),
    }
}

static ENROLLMENT_PROFILE_TYPES: Lazy<DiscriminatorRegistry<EnrollmentProfileKind>> =
    Lazy::new(|| {
        DiscriminatorRegistry::<EnrollmentProfileKind>::new("enrollmentProfile", || {
            EnrollmentProfile::new().into()
        })
        .register(DepEnrollmentBaseProfile::ODATA_TYPE, || DepEnrollmentBaseProfile::new().into())
        .register(DepIosEnrollmentProfile::ODATA_TYPE, || DepIosEnrollmentProfile::new().into())
        .register(DepMacOsEnrollmentProfile::ODATA_TYPE, || DepMacOsEnrollmentProfile::new().into())
    });

impl EnrollmentProfileKind {
    pub fn create_from_discriminator_value(node: &JsonParseNode<'_>) -> GraphResult<Self> {
        ENROLLMENT_PROFILE_TYPES.create(node)
    }

    pub fn registry() -> &'static DiscriminatorRegistry<Self> {
        &ENROLLMENT_PROFILE_TYPES
    }

    pub fn profile(&self) -> &EnrollmentProfile {
        match self {
            Self::Base(p) => p,
            Self::DepBase(p) => &p.profile,
            Self::DepIos(p) => &p.dep_profile.profile,
            Self::DepMacOs(p) => &p.dep_profile.profile,
        }
    }

    pub fn profile_mut(&mut self) -> &mut EnrollmentProfile {
        match self {
            Self::Base(p) => p,
            Self::DepBase(p) => &mut p.profile,
            Self::DepIos(p) => &mut p.dep_profile.profile,
            Self::DepMacOs(p) => &mut p.dep_profile.profile,
        }
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.profile().entity.odata_type.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.profile().entity.id.as_deref()
    }
}

polymorphic! {
    /// A DEP enrollment profile, resolved from `@odata.type`.
    pub enum DepEnrollmentBaseProfileKind {
        Base(DepEnrollmentBaseProfile),
        Ios(DepIosEnrollmentProfile),
        MacOs(DepMacOsEnrollmentProfile),
    }
}

static DEP_PROFILE_TYPES: Lazy<DiscriminatorRegistry<DepEnrollmentBaseProfileKind>> =
    Lazy::new(|| {
        DiscriminatorRegistry::<DepEnrollmentBaseProfileKind>::new("depEnrollmentBaseProfile", || {
            DepEnrollmentBaseProfile::new().into()
        })
        .register(DepIosEnrollmentProfile::ODATA_TYPE, || DepIosEnrollmentProfile::new().into())
        .register(DepMacOsEnrollmentProfile::ODATA_TYPE, || DepMacOsEnrollmentProfile::new().into())
    });

impl DepEnrollmentBaseProfileKind {
    pub fn create_from_discriminator_value(node: &JsonParseNode<'_>) -> GraphResult<Self> {
        DEP_PROFILE_TYPES.create(node)
    }

    pub fn registry() -> &'static DiscriminatorRegistry<Self> {
        &DEP_PROFILE_TYPES
    }

    pub fn dep_profile(&self) -> &DepEnrollmentBaseProfile {
        match self {
            Self::Base(p) => p,
            Self::Ios(p) => &p.dep_profile,
            Self::MacOs(p) => &p.dep_profile,
        }
    }

    pub fn dep_profile_mut(&mut self) -> &mut DepEnrollmentBaseProfile {
        match self {
            Self::Base(p) => p,
            Self::Ios(p) => &mut p.dep_profile,
            Self::MacOs(p) => &mut p.dep_profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::parse_json;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_enrollment_tag_builds_its_variant() {
        let registry = EnrollmentProfileKind::registry();
        assert_eq!(
            registry.tags(),
            vec![
                "#microsoft.graph.depEnrollmentBaseProfile",
                "#microsoft.graph.depIOSEnrollmentProfile",
                "#microsoft.graph.depMacOSEnrollmentProfile",
            ]
        );
        for tag in registry.tags() {
            let kind = registry.resolve(Some(tag));
            assert!(!matches!(kind, EnrollmentProfileKind::Base(_)));
            assert_eq!(kind.odata_type(), Some(tag));
        }
    }

    #[test]
    fn ios_profile_decodes_through_both_roots() {
        let payload = br##"{
            "@odata.type": "#microsoft.graph.depIOSEnrollmentProfile",
            "id": "p-1",
            "displayName": "Shared iPads",
            "isDefault": true,
            "enabledSkipKeys": ["Siri", "Zoom"],
            "iTunesPairingMode": "allow",
            "sharedIPadMaximumUserCount": 8
        }"##;

        let kind = parse_json(payload, EnrollmentProfileKind::create_from_discriminator_value).unwrap();
        assert_eq!(kind.id(), Some("p-1"));
        assert_eq!(kind.profile().display_name.as_deref(), Some("Shared iPads"));

        let dep = parse_json(payload, DepEnrollmentBaseProfileKind::create_from_discriminator_value).unwrap();
        assert_eq!(dep.dep_profile().is_default, Some(true));
        assert_eq!(
            dep.dep_profile().enabled_skip_keys,
            Some(vec!["Siri".to_string(), "Zoom".to_string()])
        );
        match dep {
            DepEnrollmentBaseProfileKind::Ios(profile) => {
                assert_eq!(profile.i_tunes_pairing_mode, Some(ITunesPairingMode::Allow));
                assert_eq!(profile.shared_i_pad_maximum_user_count, Some(8));
            }
            other => panic!("expected an iOS profile, got {other:?}"),
        }
    }

    #[test]
    fn dep_root_falls_back_to_the_tagged_base_profile() {
        let kind = parse_json(br#"{"isMandatory": false}"#, DepEnrollmentBaseProfileKind::create_from_discriminator_value)
            .unwrap();
        match kind {
            DepEnrollmentBaseProfileKind::Base(profile) => {
                assert_eq!(profile.is_mandatory, Some(false));
                assert_eq!(
                    profile.profile.entity.odata_type.as_deref(),
                    Some(DepEnrollmentBaseProfile::ODATA_TYPE)
                );
            }
            other => panic!("expected the base profile, got {other:?}"),
        }
    }
}
