//! emucam - capability negotiation for an emulated host-backed camera.
//!
//! This library exposes the startup handshake used by the `emucam` CLI so it
//! can be embedded in a larger camera subsystem and exercised in tests.
//!
//! # Modules
//!
//! - `camera`: the endpoint, its handshake and the capability snapshot
//! - `device`: connection to the host-side video source (TCP and mock)
//! - `params`: the camera parameter store
//! - `properties`: host property lookup and orientation derivation
//! - `size`: `WxH` frame sizes
//! - `config`: configuration file handling
//! - `error`: error types with user-recoverable hints
#![forbid(unsafe_code)]

pub mod camera;
pub mod cli;
pub mod config;
pub mod device;
pub mod error;
pub mod logging;
pub mod params;
pub mod properties;
pub mod size;
