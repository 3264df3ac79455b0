//! Error types for emulated camera initialization.

use thiserror::Error;

/// Primary error type for camera endpoint operations.
#[derive(Error, Debug)]
pub enum CameraError {
    // Startup errors
    #[error("Failed to initialize camera device '{device}' on port {port}: {reason}")]
    DeviceInit {
        device: String,
        port: u16,
        reason: String,
    },

    #[error("Base camera configuration failed: {0}")]
    BaseInit(String),

    #[error("Camera already initialized (state: {state})")]
    AlreadyInitialized { state: String },

    #[error("Unknown camera facing '{name}': expected 'front' or 'back'")]
    UnknownFacing { name: String },

    // Parameter errors
    #[error("Invalid camera parameter '{key}': {reason}")]
    InvalidParameter { key: String, reason: String },

    #[error("Invalid frame size: {0}")]
    InvalidSize(String),

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl CameraError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::DeviceInit { .. }
                | Self::UnknownFacing { .. }
                | Self::InvalidSize(_)
                | Self::ConfigNotFound { .. }
                | Self::ConfigParse(_)
        )
    }

    /// Returns true if the error came from the device connection.
    pub const fn is_device_error(&self) -> bool {
        matches!(self, Self::DeviceInit { .. })
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::DeviceInit { .. } => {
                Some("Ensure the emulator host is running and the camera port is reachable")
            }
            Self::UnknownFacing { .. } => Some("Use --device front or --device back"),
            Self::InvalidSize(_) => Some("Sizes are written as WIDTHxHEIGHT, e.g. 640x480"),
            Self::ConfigNotFound { .. } => Some("Run: emucam config to see the effective defaults"),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using CameraError.
pub type Result<T> = std::result::Result<T, CameraError>;
