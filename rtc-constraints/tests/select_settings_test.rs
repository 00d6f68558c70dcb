//! End to end selection over a JSON catalog and JSON constraints.
//!
//! Covers the decoding of both inputs, the selector ranking, the failure path
//! and the capabilities/settings views of the outcome.

use anyhow::Result;

use rtc_constraints::constraint_set::MediaTrackConstraints;
use rtc_constraints::device::{CameraDeviceInfo, FrameRateRange, PixelFormat};
use rtc_constraints::selector::{SelectorConfig, select_settings_for_video};
use rtc_constraints::shared::error::Error;
use rtc_constraints::track_capabilities::MediaTrackCapabilities;
use rtc_constraints::track_settings::MediaTrackSettings;

const CATALOG: &str = r#"[
    {
        "deviceId": "front-0",
        "groupId": "front",
        "facingMode": "user",
        "profiles": [
            {"width": 640, "height": 480, "frameRateMin": 15, "frameRateMax": 30, "pixelFormat": "nv21"},
            {"width": 1280, "height": 720, "frameRateMin": 15, "frameRateMax": 30, "pixelFormat": "nv21"}
        ]
    },
    {
        "deviceId": "back-0",
        "groupId": "back",
        "facingMode": "environment",
        "profiles": [
            {"width": 1280, "height": 720, "frameRateMin": 1, "frameRateMax": 60, "pixelFormat": "nv12"},
            {"width": 1920, "height": 1080, "frameRateMin": 1, "frameRateMax": 30, "pixelFormat": "nv12"}
        ]
    }
]"#;

fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

fn catalog() -> Result<Vec<CameraDeviceInfo>> {
    Ok(serde_json::from_str(CATALOG)?)
}

#[test]
fn test_unconstrained_picks_default_resolution() -> Result<()> {
    init_logger();

    let devices = catalog()?;
    let constraints = MediaTrackConstraints::from_json_str("true")?;
    let setting = SelectorConfig::default().select(&devices, &constraints)?;

    assert_eq!(setting.device_id, "front-0");
    assert_eq!((setting.profile.width, setting.profile.height), (640, 480));
    assert_eq!(setting.profile.frame_rate_range, FrameRateRange::new(15.0, 30.0));

    Ok(())
}

#[test]
fn test_advanced_facing_mode_and_frame_rate() -> Result<()> {
    init_logger();

    let devices = catalog()?;
    let constraints = MediaTrackConstraints::from_json_str(
        r#"{
            "width": {"ideal": 1280},
            "height": {"ideal": 720},
            "advanced": [{"facingMode": "environment"}, {"frameRate": {"min": 50}}]
        }"#,
    )?;
    let setting = SelectorConfig::default().select(&devices, &constraints)?;

    assert_eq!(setting.device_id, "back-0");
    assert_eq!((setting.profile.width, setting.profile.height), (1280, 720));
    assert_eq!(setting.profile.frame_rate_range, FrameRateRange::new(50.0, 60.0));
    assert_eq!(setting.profile.format, PixelFormat::Nv12);

    let back = &devices[1];
    let settings = MediaTrackSettings::from_selection(back, &setting);
    assert_eq!(settings.facing_mode, "environment");
    assert_eq!(settings.frame_rate, 60.0);
    assert_eq!(settings.group_id, "back");

    Ok(())
}

#[test]
fn test_basic_exact_device_id() -> Result<()> {
    init_logger();

    let devices = catalog()?;
    let constraints = MediaTrackConstraints::from_json_str(
        r#"{"deviceId": {"exact": "back-0"}, "frameRate": 24}"#,
    )?;
    let setting = select_settings_for_video(&devices, &constraints, 1920, 1080, 30.0)?;

    assert_eq!(setting.device_id, "back-0");
    assert_eq!(setting.profile.width, 1920);
    assert_eq!(setting.profile.frame_rate_range, FrameRateRange::new(1.0, 30.0));

    Ok(())
}

#[test]
fn test_overconstrained() -> Result<()> {
    init_logger();

    let devices = catalog()?;
    let constraints = MediaTrackConstraints::from_json_str(r#"{"width": {"min": 3840}}"#)?;
    let result = SelectorConfig::default().select(&devices, &constraints);

    assert_eq!(result, Err(Error::ErrOverconstrained("width".to_owned())));

    Ok(())
}

#[test]
fn test_capabilities_of_catalog() -> Result<()> {
    let devices = catalog()?;
    let caps = MediaTrackCapabilities::from_device(&devices[1]);

    assert_eq!((caps.width.min, caps.width.max), (1280, 1920));
    assert_eq!((caps.frame_rate.min, caps.frame_rate.max), (1.0, 60.0));
    assert_eq!(caps.facing_mode, vec!["environment".to_owned()]);

    Ok(())
}
