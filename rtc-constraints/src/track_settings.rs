//! MediaStreamTrack settings of a selected camera capture.
//!
//! Settings report the values actually in effect, which may differ from the
//! requested constraints.
//!
//! # Specification
//!
//! See [MediaStreamTrack.getSettings()](https://www.w3.org/TR/mediacapture-streams/#dom-mediastreamtrack-getsettings).

use serde::{Deserialize, Serialize};

use crate::device::{CameraDeviceInfo, FacingMode};
use crate::selector::CameraCaptureSettings;

const RESIZE_MODE_NONE: &str = "none";

/// Represents the actual settings of a video track.
///
/// # Specification
///
/// See [MediaTrackSettings](https://www.w3.org/TR/mediacapture-streams/#dom-mediatracksettings)
/// in the W3C Media Capture and Streams specification.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTrackSettings {
    /// Actual video width in pixels.
    pub width: u32,

    /// Actual video height in pixels.
    pub height: u32,

    /// Actual aspect ratio (width/height).
    pub aspect_ratio: f64,

    /// Actual frame rate in frames per second.
    pub frame_rate: f64,

    /// Actual camera facing mode, empty when the device does not report one.
    ///
    /// Values: "user", "environment", "left", "right".
    pub facing_mode: String,

    /// Actual resize mode. Selection never rescales, so this is always "none".
    pub resize_mode: String,

    /// Device identifier.
    pub device_id: String,

    /// Group identifier.
    pub group_id: String,
}

impl MediaTrackSettings {
    /// Settings of `device` capturing with `setting`. The frame rate is the
    /// upper end of the selected range.
    pub fn from_selection(device: &CameraDeviceInfo, setting: &CameraCaptureSettings) -> Self {
        let facing_mode = match device.facing_mode {
            FacingMode::None => String::new(),
            facing_mode => facing_mode.to_string(),
        };

        Self {
            width: setting.profile.width,
            height: setting.profile.height,
            aspect_ratio: setting.profile.aspect_ratio(),
            frame_rate: setting.profile.frame_rate_range.max,
            facing_mode,
            resize_mode: RESIZE_MODE_NONE.to_owned(),
            device_id: setting.device_id.clone(),
            group_id: device.group_id.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::device::{FrameRateRange, PixelFormat, VideoProfile};

    #[test]
    fn test_settings_from_selection() {
        let device = CameraDeviceInfo::new("cam0", "g0", FacingMode::User);
        let setting = CameraCaptureSettings {
            device_id: "cam0".to_owned(),
            profile: VideoProfile::new(1280, 720, FrameRateRange::new(15.0, 30.0), PixelFormat::I420),
        };

        let settings = MediaTrackSettings::from_selection(&device, &setting);
        assert_eq!(settings.width, 1280);
        assert_eq!(settings.height, 720);
        assert!((settings.aspect_ratio - 16.0 / 9.0).abs() < 1e-12);
        assert_eq!(settings.frame_rate, 30.0);
        assert_eq!(settings.facing_mode, "user");
        assert_eq!(settings.resize_mode, "none");
        assert_eq!(settings.device_id, "cam0");
        assert_eq!(settings.group_id, "g0");
    }

    #[test]
    fn test_settings_without_facing_mode() {
        let device = CameraDeviceInfo::new("ext", "", FacingMode::None);
        let setting = CameraCaptureSettings {
            device_id: "ext".to_owned(),
            profile: VideoProfile::new(640, 480, FrameRateRange::new(30.0, 30.0), PixelFormat::Nv12),
        };

        let settings = MediaTrackSettings::from_selection(&device, &setting);
        assert_eq!(settings.facing_mode, "");
    }
}
