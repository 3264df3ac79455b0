//! TCP connection to the host-side video source.

use std::net::{SocketAddr, TcpStream, ToSocketAddrs};

use tracing::{debug, info, trace, warn};

use super::DeviceConnection;
use super::info::{ConnectionInfo, ConnectionOptions};
use crate::error::{CameraError, Result};

/// Host camera link over TCP.
pub struct HostConnection {
    options: ConnectionOptions,
    stream: Option<TcpStream>,
    info: Option<ConnectionInfo>,
}

impl HostConnection {
    #[must_use]
    pub fn new(options: ConnectionOptions) -> Self {
        Self {
            options,
            stream: None,
            info: None,
        }
    }

    fn connect(&self, device_name: &str, port: u16) -> Result<(TcpStream, SocketAddr)> {
        let device_error = |reason: String| CameraError::DeviceInit {
            device: device_name.to_string(),
            port,
            reason,
        };

        let addrs: Vec<SocketAddr> = (self.options.address.as_str(), port)
            .to_socket_addrs()
            .map_err(|e| device_error(format!("cannot resolve {}: {e}", self.options.address)))?
            .collect();

        if addrs.is_empty() {
            return Err(device_error(format!(
                "{} resolved to no addresses",
                self.options.address
            )));
        }

        let mut last_error = None;
        for addr in addrs {
            trace!(%addr, "Connecting to host camera");
            let attempt = if self.options.connect_timeout.is_zero() {
                TcpStream::connect(addr)
            } else {
                TcpStream::connect_timeout(&addr, self.options.connect_timeout)
            };
            match attempt {
                Ok(stream) => return Ok((stream, addr)),
                Err(e) => {
                    warn!(%addr, error = %e, "Host camera connect attempt failed");
                    last_error = Some(e);
                }
            }
        }

        Err(device_error(
            last_error.map_or_else(|| "no address attempted".to_string(), |e| e.to_string()),
        ))
    }
}

impl Default for HostConnection {
    fn default() -> Self {
        Self::new(ConnectionOptions::default())
    }
}

impl DeviceConnection for HostConnection {
    fn initialize(&mut self, device_name: &str, port: u16) -> Result<()> {
        debug!(
            device_name,
            port,
            address = %self.options.address,
            timeout_ms = self.options.connect_timeout.as_millis(),
            "Opening host camera connection"
        );

        let (stream, peer) = self.connect(device_name, port)?;
        if let Err(e) = stream.set_nodelay(true) {
            debug!(error = %e, "Could not disable Nagle on host camera socket");
        }

        info!(device_name, %peer, "Host camera connected");
        self.stream = Some(stream);
        self.info = Some(ConnectionInfo {
            device_name: device_name.to_string(),
            port,
            peer: Some(peer),
        });
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    fn info(&self) -> Option<&ConnectionInfo> {
        self.info.as_ref()
    }
}
