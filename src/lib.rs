//! # graph-models
//!
//! Typed Microsoft Graph (beta) device-management models, with the JSON codec
//! that moves them on and off the wire and a thin async client to fetch and
//! store them.
//!
//! ## Features
//!
//! - 🧩 Records with independently optional fields, built on one declarative
//!   field table per type
//! - 🏷️ Polymorphic decoding keyed by `@odata.type`, with base-type fallback
//!   for tags this crate does not know
//! - 🔁 Forward compatible: unknown members are kept and written back out
//! - 🔄 Async API with Tokio runtime support
//! - 🛡️ Comprehensive error handling
//!
//! ## Example
//!
//! ```rust,no_run
//! use graph_models::{
//!     DeviceConfigurationKind, GraphClient, MacOsWiFiConfiguration, QueryParameters,
//!     WiFiSecurityType,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GraphClient::builder().access_token("eyJ0eXAi...").build()?;
//!
//!     // Create a macOS Wi-Fi profile
//!     let mut profile = MacOsWiFiConfiguration::new();
//!     profile.configuration.display_name = Some("Corp Wi-Fi".to_string());
//!     profile.ssid = Some("Corp".to_string());
//!     profile.wi_fi_security_type = Some(WiFiSecurityType::Wpa2Personal);
//!     let created = client.device_configurations().create(&profile).await?;
//!     println!("Created {:?}", created.id());
//!
//!     // List every profile, whatever its concrete type
//!     for profile in client.device_configurations().list_all(&QueryParameters::new()).await? {
//!         match profile {
//!             DeviceConfigurationKind::MacOsWiFi(wifi) => println!("macOS Wi-Fi: {:?}", wifi.ssid),
//!             other => println!("{:?}", other.configuration().display_name),
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod error;
mod models;
pub mod serialization;

pub use api::device_configurations::DeviceConfigurationsApi;
pub use api::enrollment_profiles::EnrollmentProfilesApi;
pub use api::QueryParameters;
#[cfg(feature = "default-client")]
pub use client::{initialize, instance};
pub use client::{GraphClient, GraphClientBuilder, DEFAULT_BASE_URL};
pub use error::{GraphError, GraphResult, UrlParseError};
pub use models::*;
pub use serialization::{parse_json, serialize_to_json, Parsable};
