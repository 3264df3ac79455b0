//! Camera parameter store.
//!
//! The store is a flat string key/value map read by camera clients. This
//! module defines the [`ParameterStore`] seam, the in-memory
//! [`CameraParameters`] implementation with its `key=value;key=value` wire
//! form, and [`ParameterBatch`] for all-or-nothing commits.

pub mod keys;
pub mod mock;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{trace, warn};

use crate::error::{CameraError, Result};
use crate::size::FrameSize;

/// Key/value store of camera parameters.
///
/// Implementations only need `get`, `set` and `remove`; the size helpers and
/// the batch commit are provided on top of them.
pub trait ParameterStore {
    /// Look up a parameter value.
    fn get(&self, key: &str) -> Option<&str>;

    /// Set a parameter, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a parameter, returning its previous value.
    fn remove(&mut self, key: &str) -> Option<String>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set the current preview size.
    fn set_preview_size(&mut self, size: FrameSize) -> Result<()> {
        self.set(keys::PREVIEW_SIZE, &size.to_string())
    }

    /// Set the current picture size.
    fn set_picture_size(&mut self, size: FrameSize) -> Result<()> {
        self.set(keys::PICTURE_SIZE, &size.to_string())
    }

    /// Current preview size, if set and well-formed.
    fn preview_size(&self) -> Option<FrameSize> {
        self.get(keys::PREVIEW_SIZE)?.parse().ok()
    }

    /// Current picture size, if set and well-formed.
    fn picture_size(&self) -> Option<FrameSize> {
        self.get(keys::PICTURE_SIZE)?.parse().ok()
    }

    /// Write every entry of `batch`, or none of them.
    ///
    /// If any write fails, keys already written by this batch are restored
    /// to their previous values (or removed) before the error is returned.
    fn apply(&mut self, batch: &ParameterBatch) -> Result<()> {
        let mut undo: Vec<(&str, Option<String>)> = Vec::with_capacity(batch.len());

        for (key, value) in batch.iter() {
            let previous = self.get(key).map(str::to_owned);
            if let Err(err) = self.set(key, value) {
                warn!(key, error = %err, "Parameter write failed, rolling back batch");
                for (key, previous) in undo.into_iter().rev() {
                    match previous {
                        Some(value) => {
                            if let Err(restore_err) = self.set(key, &value) {
                                warn!(key, error = %restore_err, "Failed to restore parameter");
                            }
                        }
                        None => {
                            self.remove(key);
                        }
                    }
                }
                return Err(err);
            }
            undo.push((key, previous));
        }

        Ok(())
    }
}

/// Ordered set of parameter writes committed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterBatch {
    entries: Vec<(String, String)>,
}

impl ParameterBatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a write. A later write to the same key wins.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key.to_string(), value));
        }
        self
    }

    pub fn set_preview_size(&mut self, size: FrameSize) -> &mut Self {
        self.set(keys::PREVIEW_SIZE, size.to_string())
    }

    pub fn set_picture_size(&mut self, size: FrameSize) -> &mut Self {
        self.set(keys::PICTURE_SIZE, size.to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// In-memory camera parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CameraParameters {
    values: BTreeMap<String, String>,
}

impl CameraParameters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the `key=value;key=value` form.
    ///
    /// Empty segments and segments without `=` are skipped. Values keep any
    /// `=` after the first one.
    #[must_use]
    pub fn unflatten(flattened: &str) -> Self {
        let values = flattened
            .split(';')
            .filter_map(|pair| pair.split_once('='))
            .filter(|(key, _)| !key.is_empty())
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self { values }
    }

    /// Render as `key=value;key=value` in key order.
    #[must_use]
    pub fn flatten(&self) -> String {
        self.values
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(";")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl ParameterStore for CameraParameters {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_entry(key, value)?;
        trace!(key, value, "Setting camera parameter");
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }
}

/// Reject entries that would corrupt the flattened form.
fn validate_entry(key: &str, value: &str) -> Result<()> {
    let invalid = |reason: &str| CameraError::InvalidParameter {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    if key.is_empty() {
        return Err(invalid("key is empty"));
    }
    if key.contains(['=', ';']) {
        return Err(invalid("key contains '=' or ';'"));
    }
    if value.contains(';') {
        return Err(invalid("value contains ';'"));
    }
    Ok(())
}
