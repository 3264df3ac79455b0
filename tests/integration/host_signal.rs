//! Integration tests for orientation derived from host properties.

use emucam::camera::EmulatedCamera;
use emucam::device::mock::MockConnection;
use emucam::params::{ParameterStore, keys};
use emucam::properties::{
    ChainedProperties, EnvProperties, GRAPH_MODE_PROPERTY, HostProperties, Orientation,
    StaticProperties, camera_orientation, orientation_from_graph_mode,
};

use crate::common::env::{with_graph_mode, without_graph_mode};
use crate::common::init_test_logging;

#[test]
fn test_height_greater_than_width_is_90() {
    for value in ["480x640-16", "1x2-0", "720x1280-32", "1080x1920-24"] {
        assert_eq!(
            orientation_from_graph_mode(Some(value)),
            Orientation::Deg90,
            "{value}"
        );
    }
}

#[test]
fn test_height_not_greater_than_width_is_0() {
    for value in ["640x480-16", "1280x800-32", "800x800-24", "0x0-0"] {
        assert_eq!(
            orientation_from_graph_mode(Some(value)),
            Orientation::Deg0,
            "{value}"
        );
    }
}

#[test]
fn test_malformed_values_fall_back_to_0() {
    for value in ["garbage", "", "480x640", "480-640-16", "axb-c", "480x640-16 extra"] {
        assert_eq!(
            orientation_from_graph_mode(Some(value)),
            Orientation::Deg0,
            "{value}"
        );
    }
}

#[test]
fn test_environment_property() {
    init_test_logging();
    let _guard = with_graph_mode("480x640-16");

    assert_eq!(
        EnvProperties.get(GRAPH_MODE_PROPERTY).as_deref(),
        Some("480x640-16")
    );
    assert_eq!(camera_orientation(&EnvProperties), Orientation::Deg90);
}

#[test]
fn test_environment_property_absent() {
    init_test_logging();
    let _guard = without_graph_mode();

    assert_eq!(EnvProperties.get(GRAPH_MODE_PROPERTY), None);
    assert_eq!(camera_orientation(&EnvProperties), Orientation::Deg0);
}

#[test]
fn test_default_camera_reads_environment() {
    init_test_logging();
    let _guard = with_graph_mode("720x1280-32");

    let mut cam = EmulatedCamera::new(0, MockConnection::new());
    cam.initialize("back", 1).unwrap();

    assert_eq!(cam.params().get(keys::ORIENTATION), Some("90"));
}

#[test]
fn test_fixture_overrides_environment() {
    init_test_logging();
    let _guard = with_graph_mode("480x640-16");

    let props = ChainedProperties::new()
        .then(StaticProperties::new().with(GRAPH_MODE_PROPERTY, "1280x800-32"))
        .then(EnvProperties);

    assert_eq!(camera_orientation(&props), Orientation::Deg0);
}
