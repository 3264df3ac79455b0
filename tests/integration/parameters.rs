//! Integration tests for the parameter store wire form and size lists.

use emucam::camera::{
    CapabilitySnapshot, Facing, SUPPORTED_FRAME_SIZES, SUPPORTED_PREVIEW_SIZES,
};
use emucam::params::{CameraParameters, ParameterStore, keys};
use emucam::properties::Orientation;
use emucam::size::{FrameSize, format_size_list, parse_size_list};

fn committed() -> CameraParameters {
    let mut params = CameraParameters::new();
    let snapshot = CapabilitySnapshot::negotiate(Facing::Front, Orientation::Deg0);
    params.apply(&snapshot.to_batch()).unwrap();
    params
}

#[test]
fn test_size_lists_round_trip() {
    let params = committed();

    let pictures = parse_size_list(params.get(keys::SUPPORTED_PICTURE_SIZES).unwrap()).unwrap();
    let videos = parse_size_list(params.get(keys::SUPPORTED_VIDEO_SIZES).unwrap()).unwrap();
    let previews = parse_size_list(params.get(keys::SUPPORTED_PREVIEW_SIZES).unwrap()).unwrap();

    assert_eq!(pictures, SUPPORTED_FRAME_SIZES);
    assert_eq!(videos, SUPPORTED_FRAME_SIZES);
    assert_eq!(previews, SUPPORTED_PREVIEW_SIZES);
}

#[test]
fn test_single_size_list() {
    let sizes = [FrameSize::new(1920, 1080)];
    let text = format_size_list(&sizes);
    assert_eq!(text, "1920x1080");
    assert_eq!(parse_size_list(&text).unwrap(), sizes);
}

#[test]
fn test_bad_token_fails_whole_list() {
    assert!(parse_size_list("640x480,bogus,176x144").is_err());
    assert!(parse_size_list("640x480,").is_err());
}

#[test]
fn test_flatten_unflatten_preserves_snapshot() {
    let params = committed();
    let flattened = params.flatten();

    assert!(flattened.contains("prop-facing=front"));
    assert!(flattened.contains("preview-size=640x480"));

    let restored = CameraParameters::unflatten(&flattened);
    assert_eq!(restored, params);
    assert_eq!(restored.preview_size(), Some(FrameSize::new(640, 480)));
}

#[test]
fn test_snapshot_serializes_sizes_as_strings() {
    let snapshot = CapabilitySnapshot::negotiate(Facing::Back, Orientation::Deg90);
    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json["facing"], "back");
    assert_eq!(json["orientation"], 90);
    assert_eq!(json["current_picture_size"], "640x480");
    assert_eq!(json["supported_preview_sizes"][1], "176x144");
    assert_eq!(json["preview_fps_range"]["max"], 30000);
}
