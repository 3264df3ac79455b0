//! Integration tests for configuration loading.

use emucam::camera::{EmulatedCamera, FacingPolicy};
use emucam::config::{DEFAULT_PORT, load_config};
use emucam::device::mock::MockConnection;
use emucam::error::CameraError;
use emucam::params::{ParameterStore, keys};

use crate::common::fixtures::TestConfig;
use crate::common::init_test_logging;

#[test]
fn test_partial_file_keeps_defaults() {
    init_test_logging();
    let fixture = TestConfig::write("[camera]\ndevice = \"front\"\n");

    let config = load_config(Some(fixture.path())).unwrap();

    assert_eq!(config.camera.device, "front");
    assert_eq!(config.camera.port, DEFAULT_PORT);
    assert_eq!(config.host.address, "127.0.0.1");
    assert!(config.properties.is_empty());
}

#[test]
fn test_invalid_policy_is_parse_error() {
    init_test_logging();
    let fixture = TestConfig::write("[camera]\nfacing_policy = \"sideways\"\n");

    let err = load_config(Some(fixture.path())).unwrap_err();
    assert!(matches!(err, CameraError::ConfigParse(_)));
}

#[test]
fn test_config_properties_drive_orientation() {
    init_test_logging();
    let fixture = TestConfig::write(
        r#"
[camera]
device = "front"
facing_policy = "strict"

[properties]
"aicVM.vbox_graph_mode" = "480x640-16"
"#,
    );
    let config = load_config(Some(fixture.path())).unwrap();
    assert_eq!(config.camera.facing_policy, FacingPolicy::Strict);

    let mut cam = EmulatedCamera::new(0, MockConnection::new())
        .with_host_properties(config.host_properties())
        .with_facing_policy(config.camera.facing_policy);
    cam.initialize(&config.camera.device, config.camera.port).unwrap();

    assert_eq!(cam.params().get(keys::ORIENTATION), Some("90"));
    assert_eq!(cam.params().get(keys::FACING), Some("front"));
}
