//! Test fixture helpers.
//!
//! Temporary configuration files and a local listener standing in for the
//! host-side video source.

use std::io::Write;
use std::net::TcpListener;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A configuration file in a temporary directory.
pub struct TestConfig {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestConfig {
    /// Write `contents` to `config.toml` in a fresh temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn write(contents: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).expect("Failed to create config file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write config file");
        Self { dir, path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A bound local port that accepts camera connections.
pub struct FakeHost {
    pub listener: TcpListener,
}

impl FakeHost {
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    #[must_use]
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind fake host");
        Self { listener }
    }

    #[must_use]
    pub fn port(&self) -> u16 {
        self.listener
            .local_addr()
            .expect("listener has no address")
            .port()
    }
}

/// A local port with nothing listening on it.
#[must_use]
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    listener.local_addr().expect("listener has no address").port()
}
