use once_cell::sync::Lazy;

use super::{
    DeviceConfiguration, EapFastConfiguration, EapType, NonEapAuthenticationMethodForEapTtlsType,
    WiFiAuthenticationMethod, WiFiProxySetting, WiFiSecurityType,
};
use crate::serialization::{DiscriminatorRegistry, FieldTable, JsonParseNode, Schema};
use crate::GraphResult;

/// iOS Wi-Fi profile.
#[derive(Debug, Clone, PartialEq)]
pub struct IosWiFiConfiguration {
    pub configuration: DeviceConfiguration,
    pub connect_automatically: Option<bool>,
    pub connect_when_network_name_is_hidden: Option<bool>,
    /// If set to true, forces devices connecting using this Wi-Fi profile to
    /// present their actual Wi-Fi MAC address instead of a random MAC
    /// address. Applies to iOS 14 and later.
    pub disable_mac_address_randomization: Option<bool>,
    pub network_name: Option<String>,
    pub pre_shared_key: Option<String>,
    pub proxy_automatic_configuration_url: Option<String>,
    pub proxy_manual_address: Option<String>,
    pub proxy_manual_port: Option<i32>,
    pub proxy_settings: Option<WiFiProxySetting>,
    pub ssid: Option<String>,
    pub wi_fi_security_type: Option<WiFiSecurityType>,
}

static IOS_WIFI_FIELDS: Lazy<FieldTable<IosWiFiConfiguration>> = Lazy::new(|| {
    FieldTable::<IosWiFiConfiguration>::builder()
        .inherit(DeviceConfiguration::fields(), |m| &m.configuration, |m| &mut m.configuration)
        .primitive(
            "connectAutomatically",
            |m| &m.connect_automatically,
            |m| &mut m.connect_automatically,
        )
        .primitive(
            "connectWhenNetworkNameIsHidden",
            |m| &m.connect_when_network_name_is_hidden,
            |m| &mut m.connect_when_network_name_is_hidden,
        )
        .primitive(
            "disableMacAddressRandomization",
            |m| &m.disable_mac_address_randomization,
            |m| &mut m.disable_mac_address_randomization,
        )
        .primitive("networkName", |m| &m.network_name, |m| &mut m.network_name)
        .primitive("preSharedKey", |m| &m.pre_shared_key, |m| &mut m.pre_shared_key)
        .primitive(
            "proxyAutomaticConfigurationUrl",
            |m| &m.proxy_automatic_configuration_url,
            |m| &mut m.proxy_automatic_configuration_url,
        )
        .primitive("proxyManualAddress", |m| &m.proxy_manual_address, |m| &mut m.proxy_manual_address)
        .primitive("proxyManualPort", |m| &m.proxy_manual_port, |m| &mut m.proxy_manual_port)
        .enumeration("proxySettings", |m| &m.proxy_settings, |m| &mut m.proxy_settings)
        .primitive("ssid", |m| &m.ssid, |m| &mut m.ssid)
        .enumeration("wiFiSecurityType", |m| &m.wi_fi_security_type, |m| &mut m.wi_fi_security_type)
        .build()
});

impl Schema for IosWiFiConfiguration {
    fn fields() -> &'static FieldTable<Self> {
        &IOS_WIFI_FIELDS
    }
}

impl IosWiFiConfiguration {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.iosWiFiConfiguration";

    pub fn new() -> Self {
        Self::tagged(Self::ODATA_TYPE)
    }

    fn tagged(odata_type: &str) -> Self {
        Self {
            configuration: DeviceConfiguration::tagged(odata_type),
            connect_automatically: None,
            connect_when_network_name_is_hidden: None,
            disable_mac_address_randomization: None,
            network_name: None,
            pre_shared_key: None,
            proxy_automatic_configuration_url: None,
            proxy_manual_address: None,
            proxy_manual_port: None,
            proxy_settings: None,
            ssid: None,
            wi_fi_security_type: None,
        }
    }
}

impl Default for IosWiFiConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

/// iOS Wi-Fi profile for networks that authenticate through EAP.
#[derive(Debug, Clone, PartialEq)]
pub struct IosEnterpriseWiFiConfiguration {
    pub wifi: IosWiFiConfiguration,
    pub authentication_method: Option<WiFiAuthenticationMethod>,
    pub eap_fast_configuration: Option<EapFastConfiguration>,
    pub eap_type: Option<EapType>,
    pub inner_authentication_protocol_for_eap_ttls: Option<NonEapAuthenticationMethodForEapTtlsType>,
    pub outer_identity_privacy_temporary_value: Option<String>,
    /// Password format string used to build the password to connect to Wi-Fi.
    pub password_format_string: Option<String>,
    pub trusted_server_certificate_names: Option<Vec<String>>,
    /// Username format string used to build the username to connect to Wi-Fi.
    pub username_format_string: Option<String>,
}

static IOS_ENTERPRISE_WIFI_FIELDS: Lazy<FieldTable<IosEnterpriseWiFiConfiguration>> =
    Lazy::new(|| {
        FieldTable::<IosEnterpriseWiFiConfiguration>::builder()
            .inherit(IosWiFiConfiguration::fields(), |m| &m.wifi, |m| &mut m.wifi)
            .enumeration(
                "authenticationMethod",
                |m| &m.authentication_method,
                |m| &mut m.authentication_method,
            )
            .enumeration(
                "eapFastConfiguration",
                |m| &m.eap_fast_configuration,
                |m| &mut m.eap_fast_configuration,
            )
            .enumeration("eapType", |m| &m.eap_type, |m| &mut m.eap_type)
            .enumeration(
                "innerAuthenticationProtocolForEapTtls",
                |m| &m.inner_authentication_protocol_for_eap_ttls,
                |m| &mut m.inner_authentication_protocol_for_eap_ttls,
            )
            .primitive(
                "outerIdentityPrivacyTemporaryValue",
                |m| &m.outer_identity_privacy_temporary_value,
                |m| &mut m.outer_identity_privacy_temporary_value,
            )
            .primitive(
                "passwordFormatString",
                |m| &m.password_format_string,
                |m| &mut m.password_format_string,
            )
            .primitive_collection(
                "trustedServerCertificateNames",
                |m| &m.trusted_server_certificate_names,
                |m| &mut m.trusted_server_certificate_names,
            )
            .primitive(
                "usernameFormatString",
                |m| &m.username_format_string,
                |m| &mut m.username_format_string,
            )
            .build()
    });

impl Schema for IosEnterpriseWiFiConfiguration {
    fn fields() -> &'static FieldTable<Self> {
        &IOS_ENTERPRISE_WIFI_FIELDS
    }
}

impl IosEnterpriseWiFiConfiguration {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.iosEnterpriseWiFiConfiguration";

    pub fn new() -> Self {
        Self {
            wifi: IosWiFiConfiguration::tagged(Self::ODATA_TYPE),
            authentication_method: None,
            eap_fast_configuration: None,
            eap_type: None,
            inner_authentication_protocol_for_eap_ttls: None,
            outer_identity_privacy_temporary_value: None,
            password_format_string: None,
            trusted_server_certificate_names: None,
            username_format_string: None,
        }
    }
}

impl Default for IosEnterpriseWiFiConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

polymorphic! {
    /// An iOS Wi-Fi profile, plain or enterprise.
    pub enum IosWiFiConfigurationKind {
        Base(IosWiFiConfiguration),
        Enterprise(IosEnterpriseWiFiConfiguration),
    }
}

static IOS_WIFI_TYPES: Lazy<DiscriminatorRegistry<IosWiFiConfigurationKind>> = Lazy::new(|| {
    DiscriminatorRegistry::<IosWiFiConfigurationKind>::new("iosWiFiConfiguration", || {
        IosWiFiConfiguration::new().into()
    })
    .register(IosEnterpriseWiFiConfiguration::ODATA_TYPE, || {
        IosEnterpriseWiFiConfiguration::new().into()
    })
});

impl IosWiFiConfigurationKind {
    pub fn create_from_discriminator_value(node: &JsonParseNode<'_>) -> GraphResult<Self> {
        IOS_WIFI_TYPES.create(node)
    }

    pub fn registry() -> &'static DiscriminatorRegistry<Self> {
        &IOS_WIFI_TYPES
    }

    pub fn wifi(&self) -> &IosWiFiConfiguration {
        match self {
            Self::Base(w) => w,
            Self::Enterprise(w) => &w.wifi,
        }
    }

    pub fn wifi_mut(&mut self) -> &mut IosWiFiConfiguration {
        match self {
            Self::Base(w) => w,
            Self::Enterprise(w) => &mut w.wifi,
        }
    }
}
