//! Frame dimensions and their `WxH` text form.
//!
//! Camera parameters carry sizes as `640x480` and size lists as
//! comma-separated tokens (`640x480,320x240`).

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{CameraError, Result};

/// A frame width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when the frame is taller than it is wide.
    #[must_use]
    pub const fn is_portrait(self) -> bool {
        self.height > self.width
    }
}

impl fmt::Display for FrameSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for FrameSize {
    type Err = CameraError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        let (w, h) = token
            .split_once('x')
            .ok_or_else(|| CameraError::InvalidSize(format!("'{token}' has no 'x' separator")))?;

        let width = w
            .parse()
            .map_err(|_| CameraError::InvalidSize(format!("bad width in '{token}'")))?;
        let height = h
            .parse()
            .map_err(|_| CameraError::InvalidSize(format!("bad height in '{token}'")))?;

        Ok(Self { width, height })
    }
}

impl Serialize for FrameSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Format sizes as a comma-separated list of `WxH` tokens.
#[must_use]
pub fn format_size_list(sizes: &[FrameSize]) -> String {
    sizes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse a comma-separated list of `WxH` tokens, preserving order.
///
/// An empty string yields an empty list.
pub fn parse_size_list(s: &str) -> Result<Vec<FrameSize>> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split(',').map(str::parse).collect()
}
