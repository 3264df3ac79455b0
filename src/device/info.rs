//! Connection information and options.

use std::net::SocketAddr;
use std::time::Duration;

use serde::Serialize;

/// Details of an established device connection.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionInfo {
    /// Logical device name passed to `initialize`
    pub device_name: String,
    /// Port the connection was made through
    pub port: u16,
    /// Resolved host address, if a socket was opened
    pub peer: Option<SocketAddr>,
}

/// Options for opening the host connection.
#[derive(Debug, Clone)]
pub struct ConnectionOptions {
    /// Host address of the video source (default: 127.0.0.1).
    pub address: String,
    /// Connect timeout per resolved address (default: 5000ms, zero waits
    /// for the OS).
    pub connect_timeout: Duration,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            connect_timeout: Duration::from_millis(5000),
        }
    }
}
