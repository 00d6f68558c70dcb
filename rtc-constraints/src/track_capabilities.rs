//! MediaStreamTrack capabilities of a catalog camera.
//!
//! # Specification
//!
//! See [MediaStreamTrack.getCapabilities()](https://www.w3.org/TR/mediacapture-streams/#dom-mediastreamtrack-getcapabilities).

use serde::{Deserialize, Serialize};

use crate::device::{CameraDeviceInfo, FacingMode};

const RESIZE_MODE_NONE: &str = "none";

/// Inclusive span of values a device can produce.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range<T> {
    pub max: T,
    pub min: T,
}

impl<T: Copy + PartialOrd> Range<T> {
    fn spanning(mut values: impl Iterator<Item = T>) -> Option<Self> {
        let first = values.next()?;
        Some(values.fold(Range { max: first, min: first }, |r, v| Range {
            max: if v > r.max { v } else { r.max },
            min: if v < r.min { v } else { r.min },
        }))
    }
}

/// Capabilities of a camera, derived from its native profiles.
///
/// # Specification
///
/// See [MediaTrackCapabilities](https://www.w3.org/TR/mediacapture-streams/#dom-mediatrackcapabilities).
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTrackCapabilities {
    pub width: Range<u32>,
    pub height: Range<u32>,
    pub aspect_ratio: Range<f64>,
    pub frame_rate: Range<f64>,
    pub facing_mode: Vec<String>,
    pub resize_mode: Vec<String>,
    pub device_id: String,
    pub group_id: String,
}

impl MediaTrackCapabilities {
    /// Ranges span every profile of `device`. A device without profiles
    /// reports zero ranges.
    pub fn from_device(device: &CameraDeviceInfo) -> Self {
        let profiles = &device.profiles;

        let facing_mode = match device.facing_mode {
            FacingMode::None => vec![],
            facing_mode => vec![facing_mode.to_string()],
        };

        Self {
            width: Range::spanning(profiles.iter().map(|p| p.width)).unwrap_or_default(),
            height: Range::spanning(profiles.iter().map(|p| p.height)).unwrap_or_default(),
            aspect_ratio: Range::spanning(profiles.iter().map(|p| p.aspect_ratio()))
                .unwrap_or_default(),
            frame_rate: Range::spanning(
                profiles
                    .iter()
                    .flat_map(|p| [p.frame_rate_range.min, p.frame_rate_range.max]),
            )
            .unwrap_or_default(),
            facing_mode,
            resize_mode: vec![RESIZE_MODE_NONE.to_owned()],
            device_id: device.device_id.clone(),
            group_id: device.group_id.clone(),
        }
    }
}
