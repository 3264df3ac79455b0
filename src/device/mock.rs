//! Mock device connection for unit testing.
//!
//! This module provides a mock connection that records every call and
//! supports error injection, so the startup handshake can be exercised
//! without a host.
//!
//! # Example
//!
//! ```rust,ignore
//! use emucam::device::mock::{MockConnection, Operation};
//! use emucam::device::DeviceConnection;
//!
//! let mut mock = MockConnection::new();
//! let handle = mock.clone();
//!
//! mock.initialize("front", 5556).unwrap();
//!
//! handle.assert_operations(&[Operation::Initialize {
//!     device_name: "front".to_string(),
//!     port: 5556,
//! }]);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, trace};

use super::DeviceConnection;
use super::info::ConnectionInfo;
use crate::error::{CameraError, Result};

/// Recorded operation for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Initialize { device_name: String, port: u16 },
}

/// Configuration for mock behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Every `initialize` call fails.
    pub refuse_connections: bool,
    /// Device names whose `initialize` fails.
    pub failing_devices: Vec<String>,
}

#[derive(Debug, Default)]
struct MockState {
    operation_log: Mutex<Vec<Operation>>,
    error_injection: Mutex<Option<CameraError>>,
    connected: AtomicBool,
}

/// Mock connection for testing without a host.
///
/// Clones share state, so a test can keep a handle for assertions after
/// handing a clone to the camera.
#[derive(Debug, Clone, Default)]
pub struct MockConnection {
    state: Arc<MockState>,
    config: MockConfig,
    info: Option<ConnectionInfo>,
}

impl MockConnection {
    /// Create a mock that accepts every connection.
    #[must_use]
    pub fn new() -> Self {
        debug!("Creating mock connection");
        Self::default()
    }

    /// Create a mock that refuses every connection.
    #[must_use]
    pub fn refusing() -> Self {
        MockConnectionBuilder::new().refuse_connections().build()
    }

    /// Configure mock behavior.
    #[must_use]
    pub fn with_config(mut self, config: MockConfig) -> Self {
        self.config = config;
        self
    }

    /// Inject an error for the next `initialize`.
    pub fn inject_error(&self, error: CameraError) {
        *self.state.error_injection.lock().unwrap() = Some(error);
    }

    /// Clear injected error.
    pub fn clear_error(&self) {
        *self.state.error_injection.lock().unwrap() = None;
    }

    // === Assertions ===

    /// Get all recorded operations.
    #[must_use]
    pub fn operations(&self) -> Vec<Operation> {
        self.state.operation_log.lock().unwrap().clone()
    }

    /// Get the number of operations performed.
    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.state.operation_log.lock().unwrap().len()
    }

    /// Assert specific operations were performed.
    ///
    /// # Panics
    ///
    /// Panics if the operations don't match.
    pub fn assert_operations(&self, expected: &[Operation]) {
        let actual = self.operations();
        assert_eq!(
            actual, expected,
            "Operation mismatch.\nExpected: {expected:#?}\nActual: {actual:#?}",
        );
    }

    /// Assert no operations were performed.
    ///
    /// # Panics
    ///
    /// Panics if any operations were recorded.
    pub fn assert_no_operations(&self) {
        let ops = self.operations();
        assert!(
            ops.is_empty(),
            "Expected no operations, but found: {ops:#?}",
        );
    }

    /// True once any clone has initialized successfully.
    #[must_use]
    pub fn was_connected(&self) -> bool {
        self.state.connected.load(Ordering::SeqCst)
    }

    // === Internal Helpers ===

    fn record_op(&self, op: Operation) {
        trace!(?op, "Recording operation");
        self.state.operation_log.lock().unwrap().push(op);
    }

    fn check_error(&self, device_name: &str, port: u16) -> Result<()> {
        if let Some(error) = self.state.error_injection.lock().unwrap().take() {
            return Err(error);
        }

        let refused = self.config.refuse_connections
            || self.config.failing_devices.iter().any(|d| d == device_name);
        if refused {
            return Err(CameraError::DeviceInit {
                device: device_name.to_string(),
                port,
                reason: "Mock connection refused".to_string(),
            });
        }

        Ok(())
    }
}

impl DeviceConnection for MockConnection {
    fn initialize(&mut self, device_name: &str, port: u16) -> Result<()> {
        self.record_op(Operation::Initialize {
            device_name: device_name.to_string(),
            port,
        });
        self.check_error(device_name, port)?;

        self.state.connected.store(true, Ordering::SeqCst);
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

/// Builder for creating `MockConnection` with common configurations.
#[derive(Debug, Default)]
pub struct MockConnectionBuilder {
    config: MockConfig,
}

impl MockConnectionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse every connection.
    #[must_use]
    pub fn refuse_connections(mut self) -> Self {
        self.config.refuse_connections = true;
        self
    }

    /// Refuse connections for specific device names.
    #[must_use]
    pub fn with_failing_devices(mut self, devices: &[&str]) -> Self {
        self.config.failing_devices = devices.iter().map(|d| (*d).to_string()).collect();
        self
    }

    /// Build the mock connection.
    #[must_use]
    pub fn build(self) -> MockConnection {
        MockConnection::new().with_config(self.config)
    }
}
