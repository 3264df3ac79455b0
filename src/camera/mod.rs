//! Emulated camera endpoint and its startup handshake.
//!
//! [`EmulatedCamera::initialize`] brings the device connection and the
//! parameter store into a consistent state:
//!
//! 1. connect the device, stopping on failure;
//! 2. run the base configuration, stopping on failure;
//! 3. derive facing and orientation, merge them with the static tables and
//!    commit the whole snapshot as one batch.
//!
//! No capability key is written unless steps 1 and 2 succeed, and a failed
//! commit leaves none of its keys behind.

mod base;
mod capability;

pub use base::{BaseConfiguration, DefaultBaseConfiguration};
pub use capability::{
    CapabilitySnapshot, DEFAULT_FRAME_SIZE, DEFAULT_PREVIEW_FRAME_RATE, FACING_BACK, FACING_FRONT,
    Facing, FacingPolicy, FpsRange, PREFERRED_PREVIEW_SIZE_FOR_VIDEO, PREVIEW_FPS_RANGE,
    SUPPORTED_FRAME_SIZES, SUPPORTED_PREVIEW_FRAME_RATES, SUPPORTED_PREVIEW_SIZES,
};

use std::fmt;

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::device::{BoxedConnection, DeviceConnection};
use crate::error::{CameraError, Result};
use crate::params::{CameraParameters, ParameterStore};
use crate::properties::{EnvProperties, HostProperties, camera_orientation};

/// Step of the handshake that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureStage {
    Device,
    Base,
    Store,
}

/// Endpoint lifecycle as seen by the handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "stage", rename_all = "lowercase")]
pub enum EndpointState {
    Uninitialized,
    Ready,
    Failed(FailureStage),
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Device => "device",
            Self::Base => "base",
            Self::Store => "store",
        })
    }
}

impl fmt::Display for EndpointState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => f.write_str("uninitialized"),
            Self::Ready => f.write_str("ready"),
            Self::Failed(stage) => write!(f, "failed ({stage})"),
        }
    }
}

/// A single emulated camera backed by a host video source.
pub struct EmulatedCamera<P: ParameterStore = CameraParameters> {
    camera_id: u32,
    device: BoxedConnection,
    base: Box<dyn BaseConfiguration>,
    host: Box<dyn HostProperties>,
    params: P,
    facing_policy: FacingPolicy,
    state: EndpointState,
    snapshot: Option<CapabilitySnapshot>,
}

impl EmulatedCamera<CameraParameters> {
    /// Create a camera with default base configuration, environment host
    /// properties and an empty in-memory parameter store.
    #[must_use]
    pub fn new(camera_id: u32, device: impl DeviceConnection + 'static) -> Self {
        Self {
            camera_id,
            device: Box::new(device),
            base: Box::new(DefaultBaseConfiguration),
            host: Box::new(EnvProperties),
            params: CameraParameters::new(),
            facing_policy: FacingPolicy::default(),
            state: EndpointState::Uninitialized,
            snapshot: None,
        }
    }
}

impl<P: ParameterStore> EmulatedCamera<P> {
    #[must_use]
    pub fn with_base_configuration(mut self, base: impl BaseConfiguration + 'static) -> Self {
        self.base = Box::new(base);
        self
    }

    #[must_use]
    pub fn with_host_properties(mut self, host: impl HostProperties + 'static) -> Self {
        self.host = Box::new(host);
        self
    }

    #[must_use]
    pub fn with_facing_policy(mut self, policy: FacingPolicy) -> Self {
        self.facing_policy = policy;
        self
    }

    /// Replace the parameter store.
    #[must_use]
    pub fn with_parameter_store<Q: ParameterStore>(self, params: Q) -> EmulatedCamera<Q> {
        EmulatedCamera {
            camera_id: self.camera_id,
            device: self.device,
            base: self.base,
            host: self.host,
            params,
            facing_policy: self.facing_policy,
            state: self.state,
            snapshot: self.snapshot,
        }
    }

    /// Run the startup handshake.
    ///
    /// Device and base-configuration errors are returned unchanged. On
    /// success the store holds the full capability snapshot and the endpoint
    /// is [`EndpointState::Ready`].
    ///
    /// # Errors
    ///
    /// - [`CameraError::AlreadyInitialized`] if called more than once
    /// - [`CameraError::UnknownFacing`] under [`FacingPolicy::Strict`]
    /// - whatever the device connection, base configuration or parameter
    ///   store returned
    #[instrument(skip(self), fields(camera_id = self.camera_id))]
    pub fn initialize(&mut self, device_name: &str, port: u16) -> Result<()> {
        if self.state != EndpointState::Uninitialized {
            return Err(CameraError::AlreadyInitialized {
                state: self.state.to_string(),
            });
        }

        let facing = self.facing_policy.resolve(device_name)?;

        if let Err(err) = self.device.initialize(device_name, port) {
            warn!(error = %err, "Camera device failed to initialize");
            self.state = EndpointState::Failed(FailureStage::Device);
            return Err(err);
        }

        if let Err(err) = self.base.initialize(&mut self.params) {
            warn!(error = %err, "Base camera configuration failed");
            self.state = EndpointState::Failed(FailureStage::Base);
            return Err(err);
        }

        let orientation = camera_orientation(self.host.as_ref());
        let snapshot = CapabilitySnapshot::negotiate(facing, orientation);

        if let Err(err) = self.params.apply(&snapshot.to_batch()) {
            warn!(error = %err, "Failed to publish camera capabilities");
            self.state = EndpointState::Failed(FailureStage::Store);
            return Err(err);
        }

        info!(
            device_name,
            %facing,
            %orientation,
            current_size = %snapshot.current_preview_size,
            "Emulated camera initialized"
        );
        self.snapshot = Some(snapshot);
        self.state = EndpointState::Ready;
        Ok(())
    }

    #[must_use]
    pub const fn camera_id(&self) -> u32 {
        self.camera_id
    }

    #[must_use]
    pub const fn state(&self) -> EndpointState {
        self.state
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state == EndpointState::Ready
    }

    /// The committed snapshot, once ready.
    #[must_use]
    pub fn snapshot(&self) -> Option<&CapabilitySnapshot> {
        self.snapshot.as_ref()
    }

    #[must_use]
    pub fn params(&self) -> &P {
        &self.params
    }

    #[must_use]
    pub fn device(&self) -> &dyn DeviceConnection {
        self.device.as_ref()
    }
}
