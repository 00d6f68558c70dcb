//! Capture device catalog.
//!
//! A catalog is a static snapshot of the cameras an enumerator found, each with
//! the list of natively offered profiles. The selector only ever picks among
//! these profiles; it never synthesizes a resolution a device does not report.

#[cfg(test)]
mod device_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction a camera is facing.
///
/// # Specification
///
/// See [VideoFacingModeEnum](https://www.w3.org/TR/mediacapture-streams/#dom-videofacingmodeenum).
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum FacingMode {
    /// Facing is unknown or not applicable, e.g. an external camera.
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "user")]
    User,
    #[serde(rename = "environment")]
    Environment,
    #[serde(rename = "left")]
    Left,
    #[serde(rename = "right")]
    Right,
}

const FACING_MODE_NONE_STR: &str = "none";
const FACING_MODE_USER_STR: &str = "user";
const FACING_MODE_ENVIRONMENT_STR: &str = "environment";
const FACING_MODE_LEFT_STR: &str = "left";
const FACING_MODE_RIGHT_STR: &str = "right";

impl FacingMode {
    /// Value compared against a `facingMode` constraint. A device without a
    /// known facing reports the empty string, which no non-empty `exact` accepts.
    pub fn constraint_value(&self) -> &'static str {
        match self {
            FacingMode::None => "",
            FacingMode::User => FACING_MODE_USER_STR,
            FacingMode::Environment => FACING_MODE_ENVIRONMENT_STR,
            FacingMode::Left => FACING_MODE_LEFT_STR,
            FacingMode::Right => FACING_MODE_RIGHT_STR,
        }
    }
}

impl From<&str> for FacingMode {
    fn from(raw: &str) -> Self {
        match raw {
            FACING_MODE_USER_STR => FacingMode::User,
            FACING_MODE_ENVIRONMENT_STR => FacingMode::Environment,
            FACING_MODE_LEFT_STR => FacingMode::Left,
            FACING_MODE_RIGHT_STR => FacingMode::Right,
            _ => FacingMode::None,
        }
    }
}

impl From<String> for FacingMode {
    fn from(raw: String) -> Self {
        FacingMode::from(raw.as_str())
    }
}

impl fmt::Display for FacingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FacingMode::None => FACING_MODE_NONE_STR,
            other => other.constraint_value(),
        };
        write!(f, "{s}")
    }
}

/// Frame layout produced by a capture profile.
/// Unknown formats decode as [`PixelFormat::Unsupported`].
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum PixelFormat {
    #[default]
    #[serde(rename = "unsupported")]
    Unsupported,
    #[serde(rename = "i420")]
    I420,
    #[serde(rename = "nv12")]
    Nv12,
    #[serde(rename = "nv21")]
    Nv21,
    #[serde(rename = "rgba")]
    Rgba,
}

const PIXEL_FORMAT_UNSUPPORTED_STR: &str = "unsupported";
const PIXEL_FORMAT_I420_STR: &str = "i420";
const PIXEL_FORMAT_NV12_STR: &str = "nv12";
const PIXEL_FORMAT_NV21_STR: &str = "nv21";
const PIXEL_FORMAT_RGBA_STR: &str = "rgba";

impl From<&str> for PixelFormat {
    fn from(raw: &str) -> Self {
        match raw {
            PIXEL_FORMAT_UNSUPPORTED_STR => PixelFormat::Unsupported,
            PIXEL_FORMAT_I420_STR => PixelFormat::I420,
            PIXEL_FORMAT_NV12_STR => PixelFormat::Nv12,
            PIXEL_FORMAT_NV21_STR => PixelFormat::Nv21,
            PIXEL_FORMAT_RGBA_STR => PixelFormat::Rgba,
            _ => {
                log::warn!("unknown pixel format {raw}");
                PixelFormat::Unsupported
            }
        }
    }
}

impl From<String> for PixelFormat {
    fn from(raw: String) -> Self {
        PixelFormat::from(raw.as_str())
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PixelFormat::Unsupported => PIXEL_FORMAT_UNSUPPORTED_STR,
            PixelFormat::I420 => PIXEL_FORMAT_I420_STR,
            PixelFormat::Nv12 => PIXEL_FORMAT_NV12_STR,
            PixelFormat::Nv21 => PIXEL_FORMAT_NV21_STR,
            PixelFormat::Rgba => PIXEL_FORMAT_RGBA_STR,
        };
        write!(f, "{s}")
    }
}

/// Inclusive frame rate interval in frames per second.
#[derive(Default, Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct FrameRateRange {
    #[serde(rename = "frameRateMin")]
    pub min: f64,
    #[serde(rename = "frameRateMax")]
    pub max: f64,
}

impl FrameRateRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, frame_rate: f64) -> bool {
        self.min <= frame_rate && frame_rate <= self.max
    }
}

impl fmt::Display for FrameRateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// A natively supported capture configuration of a device.
#[derive(Default, Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct VideoProfile {
    pub width: u32,
    pub height: u32,
    #[serde(flatten)]
    pub frame_rate_range: FrameRateRange,
    #[serde(rename = "pixelFormat", default)]
    pub format: PixelFormat,
}

impl VideoProfile {
    pub fn new(width: u32, height: u32, frame_rate_range: FrameRateRange, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            frame_rate_range,
            format,
        }
    }

    /// Width over height, `0.0` for a degenerate zero-height profile.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            0.0
        } else {
            f64::from(self.width) / f64::from(self.height)
        }
    }
}

impl fmt::Display for VideoProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}@{} {}",
            self.width, self.height, self.frame_rate_range, self.format
        )
    }
}

/// One entry of the camera catalog.
#[derive(Default, Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraDeviceInfo {
    pub device_id: String,
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub facing_mode: FacingMode,
    #[serde(default)]
    pub profiles: Vec<VideoProfile>,
}

impl CameraDeviceInfo {
    pub fn new(device_id: impl Into<String>, group_id: impl Into<String>, facing_mode: FacingMode) -> Self {
        Self {
            device_id: device_id.into(),
            group_id: group_id.into(),
            facing_mode,
            ..Default::default()
        }
    }

    pub fn with_profile(mut self, profile: VideoProfile) -> Self {
        self.profiles.push(profile);
        self
    }
}
