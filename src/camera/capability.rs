//! Static capability tables and the snapshot advertised to camera clients.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CameraError, Result};
use crate::params::{ParameterBatch, keys};
use crate::properties::Orientation;
use crate::size::{FrameSize, format_size_list};

/// Device name of the front-facing camera.
pub const FACING_FRONT: &str = "front";
/// Device name of the back-facing camera.
pub const FACING_BACK: &str = "back";

pub const SUPPORTED_PREVIEW_FRAME_RATES: &[u32] = &[5, 10, 15, 20, 25, 30];
pub const DEFAULT_PREVIEW_FRAME_RATE: u32 = 24;
pub const PREVIEW_FPS_RANGE: FpsRange = FpsRange {
    min: 5000,
    max: 30000,
};

/// Picture and video sizes the emulated sensor advertises.
pub const SUPPORTED_FRAME_SIZES: &[FrameSize] = &[
    FrameSize::new(640, 480),
    FrameSize::new(320, 240),
    FrameSize::new(176, 144),
];
pub const SUPPORTED_PREVIEW_SIZES: &[FrameSize] =
    &[FrameSize::new(320, 240), FrameSize::new(176, 144)];
pub const PREFERRED_PREVIEW_SIZE_FOR_VIDEO: FrameSize = FrameSize::new(320, 240);

/// Current preview and picture size after startup.
pub const DEFAULT_FRAME_SIZE: FrameSize = FrameSize::new(640, 480);

/// Which way the camera faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Front,
    Back,
}

impl Facing {
    /// Classify a device name: exactly `front` is front-facing, anything
    /// else is back-facing.
    #[must_use]
    pub fn from_device_name(name: &str) -> Self {
        if name == FACING_FRONT {
            Self::Front
        } else {
            Self::Back
        }
    }

    /// Accept only `front` or `back`.
    pub fn parse_strict(name: &str) -> Result<Self> {
        match name {
            FACING_FRONT => Ok(Self::Front),
            FACING_BACK => Ok(Self::Back),
            other => Err(CameraError::UnknownFacing {
                name: other.to_string(),
            }),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Front => FACING_FRONT,
            Self::Back => FACING_BACK,
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How device names map to a facing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacingPolicy {
    /// Unrecognized names are back-facing.
    #[default]
    Lenient,
    /// Unrecognized names are rejected.
    Strict,
}

impl FacingPolicy {
    pub fn resolve(self, device_name: &str) -> Result<Facing> {
        match self {
            Self::Lenient => Ok(Facing::from_device_name(device_name)),
            Self::Strict => Facing::parse_strict(device_name),
        }
    }
}

/// Preview frame rate range in milli-fps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FpsRange {
    pub min: u32,
    pub max: u32,
}

impl fmt::Display for FpsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.min, self.max)
    }
}

/// Capability values committed to the parameter store at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilitySnapshot {
    pub supported_preview_frame_rates: Vec<u32>,
    pub facing: Facing,
    pub orientation: Orientation,
    pub preview_frame_rate: u32,
    pub preview_fps_range: FpsRange,
    pub supported_picture_sizes: Vec<FrameSize>,
    pub supported_video_sizes: Vec<FrameSize>,
    pub supported_preview_sizes: Vec<FrameSize>,
    pub preferred_preview_size_for_video: FrameSize,
    pub current_preview_size: FrameSize,
    pub current_picture_size: FrameSize,
}

impl CapabilitySnapshot {
    /// Merge the static tables with the derived facing and orientation.
    #[must_use]
    pub fn negotiate(facing: Facing, orientation: Orientation) -> Self {
        Self {
            supported_preview_frame_rates: SUPPORTED_PREVIEW_FRAME_RATES.to_vec(),
            facing,
            orientation,
            preview_frame_rate: DEFAULT_PREVIEW_FRAME_RATE,
            preview_fps_range: PREVIEW_FPS_RANGE,
            supported_picture_sizes: SUPPORTED_FRAME_SIZES.to_vec(),
            supported_video_sizes: SUPPORTED_FRAME_SIZES.to_vec(),
            supported_preview_sizes: SUPPORTED_PREVIEW_SIZES.to_vec(),
            preferred_preview_size_for_video: PREFERRED_PREVIEW_SIZE_FOR_VIDEO,
            current_preview_size: DEFAULT_FRAME_SIZE,
            current_picture_size: DEFAULT_FRAME_SIZE,
        }
    }

    /// Parameter writes for this snapshot, in advertisement order.
    #[must_use]
    pub fn to_batch(&self) -> ParameterBatch {
        let rates = self
            .supported_preview_frame_rates
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let mut batch = ParameterBatch::new();
        batch
            .set(keys::SUPPORTED_PREVIEW_FRAME_RATES, rates)
            .set(keys::FACING, self.facing.as_str())
            .set(keys::ORIENTATION, self.orientation.to_string())
            .set(keys::PREVIEW_FRAME_RATE, self.preview_frame_rate.to_string())
            .set(keys::PREVIEW_FPS_RANGE, self.preview_fps_range.to_string())
            .set(
                keys::SUPPORTED_PICTURE_SIZES,
                format_size_list(&self.supported_picture_sizes),
            )
            .set(
                keys::SUPPORTED_VIDEO_SIZES,
                format_size_list(&self.supported_video_sizes),
            )
            .set(
                keys::SUPPORTED_PREVIEW_SIZES,
                format_size_list(&self.supported_preview_sizes),
            )
            .set(
                keys::PREFERRED_PREVIEW_SIZE_FOR_VIDEO,
                self.preferred_preview_size_for_video.to_string(),
            )
            .set_preview_size(self.current_preview_size)
            .set_picture_size(self.current_picture_size);
        batch
    }
}
