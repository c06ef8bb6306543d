use crate::serialization::graph_enum;

graph_enum! {
    /// Wi-Fi security types.
    pub enum WiFiSecurityType {
        /// Open (No Authentication).
        Open => "open",
        /// WPA-Personal.
        WpaPersonal => "wpaPersonal",
        /// WPA-Enterprise. Must use IOSEnterpriseWifiConfiguration type to
        /// configure enterprise options.
        WpaEnterprise => "wpaEnterprise",
        /// WEP Encryption.
        Wep => "wep",
        /// WPA2-Personal.
        Wpa2Personal => "wpa2Personal",
        /// WPA2-Enterprise. Must use WindowsWifiEnterpriseEAPConfiguration
        /// type to configure enterprise options.
        Wpa2Enterprise => "wpa2Enterprise",
    }
}

graph_enum! {
    /// Wi-Fi proxy setting.
    pub enum WiFiProxySetting {
        None => "none",
        Manual => "manual",
        Automatic => "automatic",
    }
}

graph_enum! {
    /// How a client authenticates to an enterprise Wi-Fi network.
    pub enum WiFiAuthenticationMethod {
        Certificate => "certificate",
        UsernameAndPassword => "usernameAndPassword",
        DerivedCredential => "derivedCredential",
    }
}

graph_enum! {
    /// Extensible Authentication Protocol (EAP) types.
    pub enum EapType {
        EapTls => "eapTls",
        Leap => "leap",
        EapSim => "eapSim",
        EapTtls => "eapTtls",
        Peap => "peap",
        EapFast => "eapFast",
        Teap => "teap",
    }
}

graph_enum! {
    /// EAP-FAST protected access credential (PAC) handling.
    pub enum EapFastConfiguration {
        NoProtectedAccessCredential => "noProtectedAccessCredential",
        UseProtectedAccessCredential => "useProtectedAccessCredential",
        UseProtectedAccessCredentialAndProvision => "useProtectedAccessCredentialAndProvision",
        UseProtectedAccessCredentialAndProvisionAnonymously =>
            "useProtectedAccessCredentialAndProvisionAnonymously",
    }
}

graph_enum! {
    /// Inner authentication protocol used with EAP-TTLS.
    pub enum NonEapAuthenticationMethodForEapTtlsType {
        UnencryptedPassword => "unencryptedPassword",
        ChallengeHandshakeAuthenticationProtocol => "challengeHandshakeAuthenticationProtocol",
        MicrosoftChap => "microsoftChap",
        MicrosoftChapVersionTwo => "microsoftChapVersionTwo",
    }
}

graph_enum! {
    pub enum DeviceConfigAssignmentIntent {
        Apply => "apply",
        Remove => "remove",
    }
}

graph_enum! {
    /// Where an assignment came from.
    pub enum DeviceAndAppManagementAssignmentSource {
        Direct => "direct",
        PolicySets => "policySets",
    }
}

graph_enum! {
    pub enum DeviceAndAppManagementAssignmentFilterType {
        None => "none",
        Include => "include",
        Exclude => "exclude",
    }
}

graph_enum! {
    pub enum ComplianceStatus {
        Unknown => "unknown",
        NotApplicable => "notApplicable",
        Compliant => "compliant",
        Remediated => "remediated",
        NonCompliant => "nonCompliant",
        Error => "error",
        Conflict => "conflict",
        NotAssigned => "notAssigned",
    }
}

graph_enum! {
    /// iTunes pairing mode of a DEP-enrolled iOS device.
    pub enum ITunesPairingMode {
        Disallow => "disallow",
        Allow => "allow",
        RequiresCertificate => "requiresCertificate",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::GraphEnum;
    use crate::GraphError;

    #[test]
    fn wire_names_follow_the_schema() {
        assert_eq!(WiFiSecurityType::Wpa2Enterprise.as_str(), "wpa2Enterprise");
        assert_eq!(
            EapFastConfiguration::UseProtectedAccessCredentialAndProvisionAnonymously.as_str(),
            "useProtectedAccessCredentialAndProvisionAnonymously"
        );
        assert_eq!(ITunesPairingMode::parse("requiresCertificate").unwrap(), ITunesPairingMode::RequiresCertificate);
    }

    #[test]
    fn members_are_listed_in_ordinal_order() {
        for (i, member) in ComplianceStatus::MEMBERS.iter().enumerate() {
            assert_eq!(member.ordinal(), i);
        }
        assert_eq!(ComplianceStatus::name_of_ordinal(7).unwrap(), "notAssigned");
        assert!(matches!(
            ComplianceStatus::name_of_ordinal(8),
            Err(GraphError::EnumOrdinalOutOfRange { enum_name: "ComplianceStatus", ordinal: 8 })
        ));
    }

    #[test]
    fn parsing_rejects_other_casings() {
        assert!(EapType::parse("EAPTLS").is_err());
        assert!(EapType::parse("eaptls").is_err());
        assert_eq!(EapType::parse("eapTls").unwrap(), EapType::EapTls);
    }
}
