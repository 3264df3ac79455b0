//! Well-known camera parameter keys.
//!
//! These strings are read by camera clients and must not change.

pub const SUPPORTED_PREVIEW_FRAME_RATES: &str = "preview-frame-rate-values";
pub const PREVIEW_FRAME_RATE: &str = "preview-frame-rate";
pub const PREVIEW_FPS_RANGE: &str = "preview-fps-range";
pub const SUPPORTED_PICTURE_SIZES: &str = "picture-size-values";
pub const SUPPORTED_VIDEO_SIZES: &str = "video-size-values";
pub const SUPPORTED_PREVIEW_SIZES: &str = "preview-size-values";
pub const PREFERRED_PREVIEW_SIZE_FOR_VIDEO: &str = "preferred-preview-size-for-video";
pub const PREVIEW_SIZE: &str = "preview-size";
pub const PICTURE_SIZE: &str = "picture-size";

pub const FACING: &str = "prop-facing";
pub const ORIENTATION: &str = "prop-orientation";

// Written by the base configuration.
pub const PREVIEW_FORMAT: &str = "preview-format";
pub const SUPPORTED_PREVIEW_FORMATS: &str = "preview-format-values";
pub const PICTURE_FORMAT: &str = "picture-format";
pub const SUPPORTED_PICTURE_FORMATS: &str = "picture-format-values";
pub const VIDEO_FRAME_FORMAT: &str = "video-frame-format";
pub const JPEG_QUALITY: &str = "jpeg-quality";
pub const JPEG_THUMBNAIL_QUALITY: &str = "jpeg-thumbnail-quality";
pub const JPEG_THUMBNAIL_WIDTH: &str = "jpeg-thumbnail-width";
pub const JPEG_THUMBNAIL_HEIGHT: &str = "jpeg-thumbnail-height";
pub const SUPPORTED_JPEG_THUMBNAIL_SIZES: &str = "jpeg-thumbnail-size-values";
pub const FOCAL_LENGTH: &str = "focal-length";
pub const HORIZONTAL_VIEW_ANGLE: &str = "horizontal-view-angle";
pub const VERTICAL_VIEW_ANGLE: &str = "vertical-view-angle";
pub const FOCUS_MODE: &str = "focus-mode";
pub const SUPPORTED_FOCUS_MODES: &str = "focus-mode-values";
pub const WHITE_BALANCE: &str = "whitebalance";
pub const SUPPORTED_WHITE_BALANCE: &str = "whitebalance-values";
pub const EXPOSURE_COMPENSATION: &str = "exposure-compensation";
pub const MAX_EXPOSURE_COMPENSATION: &str = "max-exposure-compensation";
pub const MIN_EXPOSURE_COMPENSATION: &str = "min-exposure-compensation";
pub const EXPOSURE_COMPENSATION_STEP: &str = "exposure-compensation-step";

/// Every key the capability snapshot owns, including the current sizes.
pub const CAPABILITY_KEYS: &[&str] = &[
    SUPPORTED_PREVIEW_FRAME_RATES,
    FACING,
    ORIENTATION,
    PREVIEW_FRAME_RATE,
    PREVIEW_FPS_RANGE,
    SUPPORTED_PICTURE_SIZES,
    SUPPORTED_VIDEO_SIZES,
    SUPPORTED_PREVIEW_SIZES,
    PREFERRED_PREVIEW_SIZE_FOR_VIDEO,
    PREVIEW_SIZE,
    PICTURE_SIZE,
];
