//! Recording parameter store for tests.
//!
//! Wraps [`CameraParameters`] and records every write, with optional
//! failure injection on a chosen key or after a number of writes.
//!
//! # Example
//!
//! ```rust,ignore
//! use emucam::params::mock::MockStore;
//!
//! let store = MockStore::new().fail_on_key("picture-size");
//! ```

use std::sync::{Arc, Mutex};

use tracing::trace;

use super::{CameraParameters, ParameterStore};
use crate::error::{CameraError, Result};

/// Recorded store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    Set { key: String, value: String },
    Remove { key: String },
}

/// Parameter store that records writes and can be told to fail.
///
/// Clones share the same log, so a test can keep a handle after moving the
/// store into a camera.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    inner: CameraParameters,
    log: Arc<Mutex<Vec<StoreOp>>>,
    fail_key: Option<String>,
    fail_after_sets: Option<usize>,
}

impl MockStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any write to `key`.
    #[must_use]
    pub fn fail_on_key(mut self, key: &str) -> Self {
        self.fail_key = Some(key.to_string());
        self
    }

    /// Fail every write after `count` successful ones.
    #[must_use]
    pub fn fail_after(mut self, count: usize) -> Self {
        self.fail_after_sets = Some(count);
        self
    }

    /// Handle to the operation log.
    #[must_use]
    pub fn log_handle(&self) -> Arc<Mutex<Vec<StoreOp>>> {
        Arc::clone(&self.log)
    }

    #[must_use]
    pub fn operations(&self) -> Vec<StoreOp> {
        self.log.lock().unwrap().clone()
    }

    #[must_use]
    pub fn params(&self) -> &CameraParameters {
        &self.inner
    }

    fn set_count(&self) -> usize {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|op| matches!(op, StoreOp::Set { .. }))
            .count()
    }
}

impl ParameterStore for MockStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_key.as_deref() == Some(key) {
            return Err(CameraError::InvalidParameter {
                key: key.to_string(),
                reason: "mock store configured to fail".to_string(),
            });
        }
        if let Some(limit) = self.fail_after_sets {
            if self.set_count() >= limit {
                return Err(CameraError::InvalidParameter {
                    key: key.to_string(),
                    reason: "mock store write limit reached".to_string(),
                });
            }
        }

        self.inner.set(key, value)?;
        trace!(key, value, "Recording store write");
        self.log.lock().unwrap().push(StoreOp::Set {
            key: key.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        self.log.lock().unwrap().push(StoreOp::Remove {
            key: key.to_string(),
        });
        self.inner.remove(key)
    }
}
