//! Emulator configuration.
//!
//! Configuration comes from a TOML file (explicit `--config` path or the
//! per-user default) and is overridden by command-line flags.

mod loader;
mod schema;

pub use loader::{
    CONFIG_FILE_NAME, default_config_path, load_config, load_config_file, parse_config,
};
pub use schema::{CameraConfig, DEFAULT_PORT, EmulatorConfig, HostConfig};
