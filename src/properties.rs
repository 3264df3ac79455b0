//! Host property lookup and the signals derived from it.
//!
//! The emulation host publishes loosely formatted key/value properties. They
//! are read through the [`HostProperties`] seam so callers decide where they
//! come from (configuration, process environment, test fixtures).

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::size::FrameSize;

/// Property describing the host display, formatted `WIDTHxHEIGHT-DEPTH`.
pub const GRAPH_MODE_PROPERTY: &str = "aicVM.vbox_graph_mode";

/// Prefix for environment variables backing host properties.
pub const ENV_PREFIX: &str = "EMUCAM_PROP_";

/// Best-effort key/value lookup of host properties.
pub trait HostProperties {
    /// Returns the property value, or `None` when it is not set.
    fn get(&self, name: &str) -> Option<String>;
}

/// Map-backed properties, used for configuration files and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticProperties {
    values: HashMap<String, String>,
}

impl StaticProperties {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl HostProperties for StaticProperties {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Properties read from `EMUCAM_PROP_*` environment variables.
///
/// `aicVM.vbox_graph_mode` is read from `EMUCAM_PROP_AICVM_VBOX_GRAPH_MODE`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvProperties;

impl EnvProperties {
    /// Environment variable name for a property.
    #[must_use]
    pub fn var_name(name: &str) -> String {
        let suffix: String = name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        format!("{ENV_PREFIX}{suffix}")
    }
}

impl HostProperties for EnvProperties {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(Self::var_name(name)).ok()
    }
}

/// Consults each source in order and returns the first hit.
#[derive(Default)]
pub struct ChainedProperties {
    sources: Vec<Box<dyn HostProperties>>,
}

impl ChainedProperties {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn then(mut self, source: impl HostProperties + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }
}

impl HostProperties for ChainedProperties {
    fn get(&self, name: &str) -> Option<String> {
        self.sources.iter().find_map(|source| source.get(name))
    }
}

/// Host display mode parsed from [`GRAPH_MODE_PROPERTY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphMode {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl GraphMode {
    /// Parse `WIDTHxHEIGHT-DEPTH`.
    ///
    /// All three fields must be plain decimal digits; surrounding whitespace
    /// is allowed, anything else is rejected.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let (width, rest) = value.trim().split_once('x')?;
        let (height, depth) = rest.split_once('-')?;
        Some(Self {
            width: parse_digits(width)?,
            height: parse_digits(height)?,
            depth: parse_digits(depth)?,
        })
    }
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Sensor mounting orientation, in degrees clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Orientation {
    #[must_use]
    pub const fn degrees(self) -> u32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Orientation for a host display mode: portrait hosts rotate by 90.
    #[must_use]
    pub const fn for_graph_mode(mode: GraphMode) -> Self {
        if FrameSize::new(mode.width, mode.height).is_portrait() {
            Self::Deg90
        } else {
            Self::Deg0
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

impl Serialize for Orientation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.degrees())
    }
}

/// Orientation derived from a raw graph-mode value.
///
/// Absent or malformed values fall back to 0 degrees.
#[must_use]
pub fn orientation_from_graph_mode(value: Option<&str>) -> Orientation {
    let Some(value) = value else {
        debug!(property = GRAPH_MODE_PROPERTY, "Host graph mode not set, orientation 0");
        return Orientation::Deg0;
    };

    match GraphMode::parse(value) {
        Some(mode) => {
            let orientation = Orientation::for_graph_mode(mode);
            debug!(
                width = mode.width,
                height = mode.height,
                depth = mode.depth,
                %orientation,
                "Derived orientation from host graph mode"
            );
            orientation
        }
        None => {
            debug!(value, "Malformed host graph mode, orientation 0");
            Orientation::Deg0
        }
    }
}

/// Camera orientation for the host display described by `props`.
#[must_use]
pub fn camera_orientation(props: &dyn HostProperties) -> Orientation {
    orientation_from_graph_mode(props.get(GRAPH_MODE_PROPERTY).as_deref())
}
