//! Emulator configuration file schema.
//!
//! ```toml
//! [camera]
//! device = "back"
//! port = 5556
//! facing_policy = "lenient"
//!
//! [host]
//! address = "127.0.0.1"
//! connect_timeout_ms = 5000
//!
//! [properties]
//! "aicVM.vbox_graph_mode" = "480x640-16"
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::camera::{FACING_BACK, FacingPolicy};
use crate::device::ConnectionOptions;
use crate::error::{CameraError, Result};
use crate::properties::{ChainedProperties, EnvProperties, StaticProperties};

/// Default host port of the camera service.
pub const DEFAULT_PORT: u16 = 5556;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmulatorConfig {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub host: HostConfig,
    /// Host property fixtures, consulted before the environment.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraConfig {
    /// Logical device name ("front" or "back")
    #[serde(default = "default_device")]
    pub device: String,

    /// Port of the host-side video source
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub facing_policy: FacingPolicy,
}

fn default_device() -> String {
    FACING_BACK.to_string()
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: default_device(),
            port: default_port(),
            facing_policy: FacingPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Address of the emulator host
    #[serde(default = "default_address")]
    pub address: String,

    /// Connect timeout in milliseconds
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_address() -> String {
    ConnectionOptions::default().address
}

const fn default_connect_timeout_ms() -> u64 {
    5000
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

impl EmulatorConfig {
    /// Reject values that parse but cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.host.connect_timeout_ms == 0 {
            return Err(CameraError::ConfigParse(
                "host.connect_timeout_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Connection options for the host link.
    #[must_use]
    pub fn connection_options(&self) -> ConnectionOptions {
        ConnectionOptions {
            address: self.host.address.clone(),
            connect_timeout: Duration::from_millis(self.host.connect_timeout_ms),
        }
    }

    /// Configured property fixtures, falling back to the environment.
    #[must_use]
    pub fn host_properties(&self) -> ChainedProperties {
        let fixtures: StaticProperties = self
            .properties
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        ChainedProperties::new().then(fixtures).then(EnvProperties)
    }
}
