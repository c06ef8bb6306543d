use once_cell::sync::Lazy;

use super::DeviceConfiguration;
use crate::serialization::{FieldTable, Schema};

/// A macOS profile carrying a raw `.mobileconfig` payload.
#[derive(Debug, Clone, PartialEq)]
pub struct MacOsCustomConfiguration {
    pub configuration: DeviceConfiguration,

    /// Payload. Base64 on the wire.
    pub payload: Option<Vec<u8>>,

    /// Payload file name (*.mobileconfig | *.xml).
    pub payload_file_name: Option<String>,

    /// Name that is displayed to the user.
    pub payload_name: Option<String>,
}

static MAC_OS_CUSTOM_FIELDS: Lazy<FieldTable<MacOsCustomConfiguration>> = Lazy::new(|| {
    FieldTable::<MacOsCustomConfiguration>::builder()
        .inherit(DeviceConfiguration::fields(), |m| &m.configuration, |m| &mut m.configuration)
        .primitive("payload", |m| &m.payload, |m| &mut m.payload)
        .primitive("payloadFileName", |m| &m.payload_file_name, |m| &mut m.payload_file_name)
        .primitive("payloadName", |m| &m.payload_name, |m| &mut m.payload_name)
        .build()
});

impl Schema for MacOsCustomConfiguration {
    fn fields() -> &'static FieldTable<Self> {
        &MAC_OS_CUSTOM_FIELDS
    }
}

impl MacOsCustomConfiguration {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.macOSCustomConfiguration";

    pub fn new() -> Self {
        Self {
            configuration: DeviceConfiguration::tagged(Self::ODATA_TYPE),
            payload: None,
            payload_file_name: None,
            payload_name: None,
        }
    }
}

impl Default for MacOsCustomConfiguration {
    fn default() -> Self {
        Self::new()
    }
}
