//! Controller-wide default parameters written before capabilities.

use tracing::debug;

use crate::error::{CameraError, Result};
use crate::params::{ParameterBatch, ParameterStore, keys};

/// Base configuration step run after the device connects.
pub trait BaseConfiguration {
    /// Write the controller defaults into `store`.
    fn initialize(&mut self, store: &mut dyn ParameterStore) -> Result<()>;
}

/// Defaults for formats, JPEG encoding, optics, focus, white balance and
/// exposure compensation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBaseConfiguration;

impl DefaultBaseConfiguration {
    #[must_use]
    pub fn defaults() -> ParameterBatch {
        let mut batch = ParameterBatch::new();
        batch
            .set(keys::SUPPORTED_PREVIEW_FORMATS, "yuv420sp,yuv420p,rgba8888")
            .set(keys::PREVIEW_FORMAT, "yuv420p")
            .set(keys::SUPPORTED_PICTURE_FORMATS, "jpeg")
            .set(keys::PICTURE_FORMAT, "jpeg")
            .set(keys::VIDEO_FRAME_FORMAT, "yuv420p")
            .set(keys::JPEG_QUALITY, "90")
            .set(keys::JPEG_THUMBNAIL_QUALITY, "75")
            .set(keys::SUPPORTED_JPEG_THUMBNAIL_SIZES, "320x240,0x0")
            .set(keys::JPEG_THUMBNAIL_WIDTH, "320")
            .set(keys::JPEG_THUMBNAIL_HEIGHT, "240")
            .set(keys::FOCAL_LENGTH, "4.31")
            .set(keys::HORIZONTAL_VIEW_ANGLE, "54.8")
            .set(keys::VERTICAL_VIEW_ANGLE, "42.5")
            .set(keys::SUPPORTED_FOCUS_MODES, "fixed")
            .set(keys::FOCUS_MODE, "fixed")
            .set(
                keys::SUPPORTED_WHITE_BALANCE,
                "auto,incandescent,fluorescent,daylight,cloudy-daylight",
            )
            .set(keys::WHITE_BALANCE, "auto")
            .set(keys::MAX_EXPOSURE_COMPENSATION, "6")
            .set(keys::MIN_EXPOSURE_COMPENSATION, "-6")
            .set(keys::EXPOSURE_COMPENSATION_STEP, "0.5")
            .set(keys::EXPOSURE_COMPENSATION, "0");
        batch
    }
}

impl BaseConfiguration for DefaultBaseConfiguration {
    fn initialize(&mut self, store: &mut dyn ParameterStore) -> Result<()> {
        let defaults = Self::defaults();
        debug!(count = defaults.len(), "Writing base camera defaults");
        store
            .apply(&defaults)
            .map_err(|e| CameraError::BaseInit(e.to_string()))
    }
}
