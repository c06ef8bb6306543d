use once_cell::sync::Lazy;

use super::{
    DeviceConfiguration, EapFastConfiguration, EapType, NonEapAuthenticationMethodForEapTtlsType,
    WiFiAuthenticationMethod, WiFiProxySetting, WiFiSecurityType,
};
use crate::serialization::{DiscriminatorRegistry, FieldTable, JsonParseNode, Schema};
use crate::GraphResult;

/// macOS Wi-Fi profile.
#[derive(Debug, Clone, PartialEq)]
pub struct MacOsWiFiConfiguration {
    pub configuration: DeviceConfiguration,

    /// Connect automatically when this network is in range. Setting this to
    /// true will skip the user prompt and automatically connect the device to
    /// the Wi-Fi network.
    pub connect_automatically: Option<bool>,

    /// Connect when the network is not broadcasting its name (SSID). When set
    /// to true, this profile forces the device to connect to a network that
    /// doesn't broadcast its SSID to all devices.
    pub connect_when_network_name_is_hidden: Option<bool>,

    /// Network name.
    pub network_name: Option<String>,

    /// This is the pre-shared key for WPA Personal Wi-Fi network.
    pub pre_shared_key: Option<String>,

    /// URL of the proxy server automatic configuration script when automatic
    /// configuration is selected.
    pub proxy_automatic_configuration_url: Option<String>,

    /// IP Address or DNS hostname of the proxy server when manual
    /// configuration is selected.
    pub proxy_manual_address: Option<String>,

    /// Port of the proxy server when manual configuration is selected.
    pub proxy_manual_port: Option<i32>,

    pub proxy_settings: Option<WiFiProxySetting>,

    /// This is the name of the Wi-Fi network that is broadcast to all
    /// devices.
    pub ssid: Option<String>,

    pub wi_fi_security_type: Option<WiFiSecurityType>,
}

static MAC_OS_WIFI_FIELDS: Lazy<FieldTable<MacOsWiFiConfiguration>> = Lazy::new(|| {
    FieldTable::<MacOsWiFiConfiguration>::builder()
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

impl Schema for MacOsWiFiConfiguration {
    fn fields() -> &'static FieldTable<Self> {
        &MAC_OS_WIFI_FIELDS
    }
}

impl MacOsWiFiConfiguration {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.macOSWiFiConfiguration";

    pub fn new() -> Self {
        Self::tagged(Self::ODATA_TYPE)
    }

    fn tagged(odata_type: &str) -> Self {
        Self {
            configuration: DeviceConfiguration::tagged(odata_type),
            connect_automatically: None,
            connect_when_network_name_is_hidden: None,
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

impl Default for MacOsWiFiConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

/// macOS Wi-Fi profile for networks that authenticate through EAP.
#[derive(Debug, Clone, PartialEq)]
pub struct MacOsEnterpriseWiFiConfiguration {
    pub wifi: MacOsWiFiConfiguration,

    /// Authentication Method when EAP Type is configured to PEAP or EAP-TTLS.
    pub authentication_method: Option<WiFiAuthenticationMethod>,

    /// EAP-FAST Configuration Option when EAP-FAST is the selected EAP Type.
    pub eap_fast_configuration: Option<EapFastConfiguration>,

    pub eap_type: Option<EapType>,

    /// Non-EAP Method for Authentication (Inner Identity) when EAP Type is
    /// EAP-TTLS and Authenticationmethod is Username and Password.
    pub inner_authentication_protocol_for_eap_ttls: Option<NonEapAuthenticationMethodForEapTtlsType>,

    /// Enable identity privacy (Outer Identity) when EAP Type is configured to
    /// EAP-TTLS, EAP-FAST or PEAP.
    pub outer_identity_privacy_temporary_value: Option<String>,

    /// Trusted server certificate names when EAP Type is configured to
    /// EAP-TLS/TTLS/FAST or PEAP.
    pub trusted_server_certificate_names: Option<Vec<String>>,
}

static MAC_OS_ENTERPRISE_WIFI_FIELDS: Lazy<FieldTable<MacOsEnterpriseWiFiConfiguration>> =
    Lazy::new(|| {
        FieldTable::<MacOsEnterpriseWiFiConfiguration>::builder()
            .inherit(MacOsWiFiConfiguration::fields(), |m| &m.wifi, |m| &mut m.wifi)
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
            .primitive_collection(
                "trustedServerCertificateNames",
                |m| &m.trusted_server_certificate_names,
                |m| &mut m.trusted_server_certificate_names,
            )
            .build()
    });

impl Schema for MacOsEnterpriseWiFiConfiguration {
    fn fields() -> &'static FieldTable<Self> {
        &MAC_OS_ENTERPRISE_WIFI_FIELDS
    }
}

impl MacOsEnterpriseWiFiConfiguration {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.macOSEnterpriseWiFiConfiguration";

    pub fn new() -> Self {
        Self {
            wifi: MacOsWiFiConfiguration::tagged(Self::ODATA_TYPE),
            authentication_method: None,
            eap_fast_configuration: None,
            eap_type: None,
            inner_authentication_protocol_for_eap_ttls: None,
            outer_identity_privacy_temporary_value: None,
            trusted_server_certificate_names: None,
        }
    }
}

impl Default for MacOsEnterpriseWiFiConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

polymorphic! {
    /// A macOS Wi-Fi profile, plain or enterprise.
    pub enum MacOsWiFiConfigurationKind {
        Base(MacOsWiFiConfiguration),
        Enterprise(MacOsEnterpriseWiFiConfiguration),
    }
}

static MAC_OS_WIFI_TYPES: Lazy<DiscriminatorRegistry<MacOsWiFiConfigurationKind>> =
    Lazy::new(|| {
        DiscriminatorRegistry::<MacOsWiFiConfigurationKind>::new("macOSWiFiConfiguration", || {
            MacOsWiFiConfiguration::new().into()
        })
        .register(MacOsEnterpriseWiFiConfiguration::ODATA_TYPE, || {
            MacOsEnterpriseWiFiConfiguration::new().into()
        })
    });

impl MacOsWiFiConfigurationKind {
    pub fn create_from_discriminator_value(node: &JsonParseNode<'_>) -> GraphResult<Self> {
        MAC_OS_WIFI_TYPES.create(node)
    }

    pub fn registry() -> &'static DiscriminatorRegistry<Self> {
        &MAC_OS_WIFI_TYPES
    }

    pub fn wifi(&self) -> &MacOsWiFiConfiguration {
        match self {
            Self::Base(w) => w,
            Self::Enterprise(w) => &w.wifi,
        }
    }

    pub fn wifi_mut(&mut self) -> &mut MacOsWiFiConfiguration {
        match self {
            Self::Base(w) => w,
            Self::Enterprise(w) => &mut w.wifi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{parse_json, serialize_to_json};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    #[test]
    fn constructors_preset_their_own_tag() {
        assert_eq!(
            MacOsWiFiConfiguration::new().configuration.entity.odata_type.as_deref(),
            Some("#microsoft.graph.macOSWiFiConfiguration")
        );
        assert_eq!(
            MacOsEnterpriseWiFiConfiguration::default().wifi.configuration.entity.odata_type.as_deref(),
            Some("#microsoft.graph.macOSEnterpriseWiFiConfiguration")
        );
    }

    #[test]
    fn enterprise_table_extends_the_wifi_table() {
        let names: Vec<_> = MacOsEnterpriseWiFiConfiguration::fields().field_names().collect();
        let inherited: Vec<_> = MacOsWiFiConfiguration::fields().field_names().collect();

        assert_eq!(&names[..inherited.len()], &inherited[..]);
        assert_eq!(names.last(), Some(&"trustedServerCertificateNames"));
    }

    #[test]
    fn enterprise_fields_round_trip() {
        let mut profile = MacOsEnterpriseWiFiConfiguration::new();
        profile.wifi.ssid = Some("Corp".to_string());
        profile.wifi.proxy_settings = Some(WiFiProxySetting::Manual);
        profile.wifi.proxy_manual_port = Some(8080);
        profile.eap_type = Some(EapType::Peap);
        profile.inner_authentication_protocol_for_eap_ttls =
            Some(NonEapAuthenticationMethodForEapTtlsType::MicrosoftChapVersionTwo);
        profile.trusted_server_certificate_names = Some(vec!["radius.corp".to_string()]);

        let bytes = serialize_to_json(&profile).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value,
            json!({
                "@odata.type": "#microsoft.graph.macOSEnterpriseWiFiConfiguration",
                "ssid": "Corp",
                "proxySettings": "manual",
                "proxyManualPort": 8080,
                "eapType": "peap",
                "innerAuthenticationProtocolForEapTtls": "microsoftChapVersionTwo",
                "trustedServerCertificateNames": ["radius.corp"]
            })
        );

        let decoded = parse_json(&bytes, MacOsWiFiConfigurationKind::create_from_discriminator_value).unwrap();
        assert_eq!(decoded, MacOsWiFiConfigurationKind::Enterprise(profile));
    }
}
