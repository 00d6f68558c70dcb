//! Constraint names advertised to callers.
//!
//! Unsupported names are dropped while decoding constraints, so asking for them
//! has no effect on selection.
//!
//! # Specification
//!
//! See [MediaTrackSupportedConstraints](https://www.w3.org/TR/mediacapture-streams/#dom-mediatracksupportedconstraints).


use serde::{Deserialize, Serialize};

use crate::constraint_set::*;

/// Every known constraint name and whether it is supported.
pub const SUPPORTED_CONSTRAINTS: &[(&str, bool)] = &[
    (CONSTRAINT_WIDTH, true),
    (CONSTRAINT_HEIGHT, true),
    (CONSTRAINT_ASPECT_RATIO, true),
    (CONSTRAINT_FRAME_RATE, true),
    (CONSTRAINT_FACING_MODE, true),
    (CONSTRAINT_RESIZE_MODE, false),
    (CONSTRAINT_SAMPLE_RATE, false),
    (CONSTRAINT_SAMPLE_SIZE, false),
    (CONSTRAINT_ECHO_CANCELLATION, true),
    (CONSTRAINT_AUTO_GAIN_CONTROL, true),
    (CONSTRAINT_NOISE_SUPPRESSION, true),
    (CONSTRAINT_LATENCY, false),
    (CONSTRAINT_CHANNEL_COUNT, false),
    (CONSTRAINT_DEVICE_ID, true),
    (CONSTRAINT_GROUP_ID, true),
    (CONSTRAINT_DISPLAY_SURFACE, false),
    (CONSTRAINT_BACKGROUND_BLUR, false),
    (CONSTRAINT_GOOG_ECHO_CANCELLATION, false),
    (CONSTRAINT_GOOG_AUTO_GAIN_CONTROL, false),
    (CONSTRAINT_GOOG_NOISE_SUPPRESSION, false),
    (CONSTRAINT_GOOG_HIGHPASS_FILTER, false),
    (CONSTRAINT_GOOG_AUDIO_MIRRORING, false),
    (CONSTRAINT_SCREEN_CAPTURE_MODE, true),
    (CONSTRAINT_SCREEN_CAPTURE_DISPLAY_ID, true),
    (CONSTRAINT_SCREEN_CAPTURE_MISSION_ID, true),
    (CONSTRAINT_SCREEN_CAPTURE_AUDIO_FILTER, true),
    (CONSTRAINT_SCREEN_CAPTURE_WINDOW_FILTER, true),
    (CONSTRAINT_SCREEN_CAPTURE_SKIP_PRIVACY_MODE, true),
    (CONSTRAINT_SCREEN_CAPTURE_AUTO_ROTATION, true),
];

/// Names absent from [`SUPPORTED_CONSTRAINTS`] are treated as supported.
pub fn is_constraint_supported(name: &str) -> bool {
    SUPPORTED_CONSTRAINTS
        .iter()
        .find(|(n, _)| *n == name)
        .is_none_or(|(_, supported)| *supported)
}

/// Supported names, in table order.
pub fn supported_constraints() -> Vec<&'static str> {
    SUPPORTED_CONSTRAINTS
        .iter()
        .filter(|(_, supported)| *supported)
        .map(|(name, _)| *name)
        .collect()
}

/// The W3C dictionary view of [`SUPPORTED_CONSTRAINTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTrackSupportedConstraints {
    pub width: bool,
    pub height: bool,
    pub aspect_ratio: bool,
    pub frame_rate: bool,
    pub facing_mode: bool,
    pub resize_mode: bool,
    pub sample_rate: bool,
    pub sample_size: bool,
    pub echo_cancellation: bool,
    pub auto_gain_control: bool,
    pub noise_suppression: bool,
    pub latency: bool,
    pub channel_count: bool,
    pub device_id: bool,
    pub group_id: bool,
}

impl Default for MediaTrackSupportedConstraints {
    fn default() -> Self {
        Self {
            width: is_constraint_supported(CONSTRAINT_WIDTH),
            height: is_constraint_supported(CONSTRAINT_HEIGHT),
            aspect_ratio: is_constraint_supported(CONSTRAINT_ASPECT_RATIO),
            frame_rate: is_constraint_supported(CONSTRAINT_FRAME_RATE),
            facing_mode: is_constraint_supported(CONSTRAINT_FACING_MODE),
            resize_mode: is_constraint_supported(CONSTRAINT_RESIZE_MODE),
            sample_rate: is_constraint_supported(CONSTRAINT_SAMPLE_RATE),
            sample_size: is_constraint_supported(CONSTRAINT_SAMPLE_SIZE),
            echo_cancellation: is_constraint_supported(CONSTRAINT_ECHO_CANCELLATION),
            auto_gain_control: is_constraint_supported(CONSTRAINT_AUTO_GAIN_CONTROL),
            noise_suppression: is_constraint_supported(CONSTRAINT_NOISE_SUPPRESSION),
            latency: is_constraint_supported(CONSTRAINT_LATENCY),
            channel_count: is_constraint_supported(CONSTRAINT_CHANNEL_COUNT),
            device_id: is_constraint_supported(CONSTRAINT_DEVICE_ID),
            group_id: is_constraint_supported(CONSTRAINT_GROUP_ID),
        }
    }
}
