//! Device connection layer for the emulated camera.
//!
//! This module provides a trait-based abstraction over the link to the
//! host-side video source, with a TCP implementation, an offline stand-in for
//! dry runs, and a recording mock for tests.

mod info;
pub mod mock;
mod socket;

pub use info::{ConnectionInfo, ConnectionOptions};
pub use socket::HostConnection;

use tracing::debug;

use crate::error::Result;

/// Link to the host-side video source.
///
/// `initialize` must succeed before any capability is advertised. It may
/// block on host I/O.
pub trait DeviceConnection {
    /// Bring up the connection for `device_name` through `port`.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::DeviceInit`](crate::error::CameraError::DeviceInit)
    /// when the host cannot be reached.
    fn initialize(&mut self, device_name: &str, port: u16) -> Result<()>;

    /// Check if the connection is up.
    fn is_connected(&self) -> bool;

    /// Details of the established connection.
    fn info(&self) -> Option<&ConnectionInfo>;
}

/// Type alias for boxed trait object.
pub type BoxedConnection = Box<dyn DeviceConnection>;

/// Connection that succeeds without touching the network.
///
/// Used by `negotiate --dry-run` to inspect the derived parameters when no
/// host is available.
#[derive(Debug, Default)]
pub struct OfflineConnection {
    info: Option<ConnectionInfo>,
}

impl OfflineConnection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeviceConnection for OfflineConnection {
    fn initialize(&mut self, device_name: &str, port: u16) -> Result<()> {
        debug!(device_name, port, "Offline connection, skipping host link");
        self.info = Some(ConnectionInfo {
            device_name: device_name.to_string(),
            port,
            peer: None,
        });
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.info.is_some()
    }

    fn info(&self) -> Option<&ConnectionInfo> {
        self.info.as_ref()
    }
}
