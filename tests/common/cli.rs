//! Runner for the `emucam` binary.
//!
//! Every command starts from a scrubbed environment so host variables and the
//! per-user config file cannot leak into assertions.

use std::path::PathBuf;

use assert_cmd::Command;
use serde_json::Value;

/// Variables the binary reads that must not come from the test host.
const SCRUBBED_VARS: &[&str] = &[
    "EMUCAM_PROP_AICVM_VBOX_GRAPH_MODE",
    "EMUCAM_DEVICE",
    "EMUCAM_PORT",
    "EMUCAM_HOST",
    "EMUCAM_FORMAT",
    "EMUCAM_CONFIG",
    "NO_COLOR",
];

fn empty_config_home() -> PathBuf {
    std::env::temp_dir().join("emucam-e2e-none")
}

/// The `emucam` binary with logging off and a clean environment.
pub fn emucam() -> Command {
    let mut cmd = Command::cargo_bin("emucam").expect("emucam binary not built");
    cmd.env("RUST_LOG", "off")
        .env("XDG_CONFIG_HOME", empty_config_home())
        .env("HOME", empty_config_home());
    for var in SCRUBBED_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Parse a command's stdout or stderr as a single JSON document.
pub fn parse_json(text: &[u8]) -> Value {
    let text = String::from_utf8_lossy(text);
    serde_json::from_str(text.trim()).unwrap_or_else(|_| panic!("Failed to parse JSON:\n{text}"))
}
