//! Common test utilities for emucam.
//!
//! - `cli`: runner for the `emucam` binary
//! - `env`: serialized environment variable guards
//! - `fixtures`: temporary config files and a fake host listener
#![allow(dead_code)]

pub mod cli;
pub mod env;
pub mod fixtures;

use tracing_subscriber::EnvFilter;

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
