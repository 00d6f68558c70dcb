use super::*;

#[test]
fn test_facing_mode_strings() {
    let tests = vec![
        ("user", FacingMode::User),
        ("environment", FacingMode::Environment),
        ("left", FacingMode::Left),
        ("right", FacingMode::Right),
        ("none", FacingMode::None),
        ("sideways", FacingMode::None),
    ];

    for (raw, expected) in tests {
        assert_eq!(FacingMode::from(raw), expected, "{raw}");
    }

    assert_eq!(FacingMode::None.to_string(), "none");
    assert_eq!(FacingMode::None.constraint_value(), "");
    assert_eq!(FacingMode::Left.constraint_value(), "left");
    assert_eq!(FacingMode::Right.to_string(), "right");
}

#[test]
fn test_pixel_format_strings() {
    let tests = vec![
        (PixelFormat::I420, "i420"),
        (PixelFormat::Nv12, "nv12"),
        (PixelFormat::Nv21, "nv21"),
        (PixelFormat::Rgba, "rgba"),
        (PixelFormat::Unsupported, "unsupported"),
    ];

    for (format, expected) in tests {
        assert_eq!(format.to_string(), expected);
        assert_eq!(PixelFormat::from(expected), format);
    }
}

#[test]
fn test_catalog_json_shape() -> Result<(), serde_json::Error> {
    let raw = r#"[
        {
            "deviceId": "cam0",
            "groupId": "g0",
            "facingMode": "user",
            "profiles": [
                {"width": 640, "height": 480, "frameRateMin": 15, "frameRateMax": 30, "pixelFormat": "nv12"}
            ]
        },
        {"deviceId": "cam1"}
    ]"#;

    let devices: Vec<CameraDeviceInfo> = serde_json::from_str(raw)?;
    assert_eq!(devices.len(), 2);

    let cam0 = &devices[0];
    assert_eq!(cam0.facing_mode, FacingMode::User);
    assert_eq!(
        cam0.profiles[0],
        VideoProfile::new(640, 480, FrameRateRange::new(15.0, 30.0), PixelFormat::Nv12)
    );

    let cam1 = &devices[1];
    assert_eq!(cam1.group_id, "");
    assert_eq!(cam1.facing_mode, FacingMode::None);
    assert!(cam1.profiles.is_empty());

    let value = serde_json::to_value(&cam0.profiles[0])?;
    assert_eq!(value["frameRateMax"], 30.0);
    assert_eq!(value["pixelFormat"], "nv12");

    Ok(())
}

#[test]
fn test_catalog_unknown_strings_fall_back() -> Result<(), serde_json::Error> {
    let raw = r#"[
        {
            "deviceId": "c",
            "facingMode": "sideways",
            "profiles": [
                {"width": 640, "height": 480, "frameRateMin": 15, "frameRateMax": 30, "pixelFormat": "yuyv"},
                {"width": 1280, "height": 720, "frameRateMin": 15, "frameRateMax": 30, "pixelFormat": "i420"}
            ]
        }
    ]"#;

    let devices: Vec<CameraDeviceInfo> = serde_json::from_str(raw)?;
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].facing_mode, FacingMode::None);
    assert_eq!(devices[0].profiles[0].format, PixelFormat::Unsupported);
    assert_eq!(devices[0].profiles[1].format, PixelFormat::I420);

    let format: PixelFormat = serde_json::from_str(r#""unsupported""#)?;
    assert_eq!(format, PixelFormat::Unsupported);
    let facing: FacingMode = serde_json::from_str(r#""environment""#)?;
    assert_eq!(facing, FacingMode::Environment);

    Ok(())
}

#[test]
fn test_profile_aspect_ratio() {
    let p = VideoProfile::new(1280, 720, FrameRateRange::new(30.0, 30.0), PixelFormat::I420);
    assert!((p.aspect_ratio() - 16.0 / 9.0).abs() < 1e-12);

    let degenerate = VideoProfile::new(1280, 0, FrameRateRange::default(), PixelFormat::I420);
    assert_eq!(degenerate.aspect_ratio(), 0.0);
}
