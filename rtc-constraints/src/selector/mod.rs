
use std::fmt;

use serde::{Deserialize, Serialize};
use shared::error::{Error, Result};

use crate::candidate::{CandidateSettings, device_satisfies_constraint_set, numeric_distance};
use crate::constraint_set::MediaTrackConstraints;
use crate::device::{CameraDeviceInfo, VideoProfile};

/// Width preferred when no constraint decides between candidates.
pub const DEFAULT_WIDTH: i32 = 640;
/// Height preferred when no constraint decides between candidates.
pub const DEFAULT_HEIGHT: i32 = 480;
/// Frame rate preferred when no constraint decides between candidates.
pub const DEFAULT_FRAME_RATE: f64 = 30.0;

/// Trailing distance entries after the per advanced set slots: basic fitness,
/// default resolution and default frame rate. The device index follows them.
pub const NUM_DEFAULT_DISTANCE_ENTRIES: usize = 3;

/// The outcome of a successful selection: a catalog device and one of its
/// native profiles, with the frame rate range narrowed by the constraints.
#[derive(Default, Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraCaptureSettings {
    pub device_id: String,
    #[serde(flatten)]
    pub profile: VideoProfile,
}

impl fmt::Display for CameraCaptureSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.device_id, self.profile)
    }
}

/// Defaults used to break ties between candidates that the constraints rank
/// equally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectorConfig {
    /// Defaults to 640 pixels.
    pub default_width: i32,
    /// Defaults to 480 pixels.
    pub default_height: i32,
    /// Defaults to 30 frames per second.
    pub default_frame_rate: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_WIDTH,
            default_height: DEFAULT_HEIGHT,
            default_frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl SelectorConfig {
    pub fn select(
        &self,
        devices: &[CameraDeviceInfo],
        constraints: &MediaTrackConstraints,
    ) -> Result<CameraCaptureSettings> {
        select_settings_for_video(
            devices,
            constraints,
            self.default_width,
            self.default_height,
            self.default_frame_rate,
        )
    }
}

fn default_frame_rate_distance(candidate: &CandidateSettings<'_>, default_frame_rate: f64) -> f64 {
    let min = candidate.min_frame_rate();
    let max = candidate.max_frame_rate();
    if default_frame_rate < min {
        numeric_distance(min, default_frame_rate)
    } else if default_frame_rate > max {
        numeric_distance(max, default_frame_rate)
    } else {
        0.0
    }
}

fn squared_euclidean_distance(width: i32, height: i32, default_width: i32, default_height: i32) -> f64 {
    let dw = f64::from(width) - f64::from(default_width);
    let dh = f64::from(height) - f64::from(default_height);
    dw * dw + dh * dh
}

/// Picks the best (device, native profile) pair for `constraints`.
///
/// Candidates must satisfy the basic set. Among those, a distance vector ranks
/// them lexicographically by, in order: each advanced set (satisfied or not),
/// fitness to the basic ideals, distance to the default resolution, distance to
/// the default frame rate, and position in `devices`. The first candidate with
/// the smallest vector wins.
///
/// Fails with [`Error::ErrOverconstrained`] naming the last basic constraint
/// that rejected a candidate when none is left.
pub fn select_settings_for_video(
    devices: &[CameraDeviceInfo],
    constraints: &MediaTrackConstraints,
    default_width: i32,
    default_height: i32,
    default_frame_rate: f64,
) -> Result<CameraCaptureSettings> {
    let basic = constraints.basic();
    let advanced = constraints.advanced();

    let num_entries = advanced.len() + NUM_DEFAULT_DISTANCE_ENTRIES + 1;
    let mut best_distance = vec![f64::INFINITY; num_entries];
    let mut best_setting: Option<CameraCaptureSettings> = None;
    let mut failed_constraint_name = "";

    log::debug!(
        "selecting among {} devices with {} advanced sets",
        devices.len(),
        advanced.len()
    );

    for (device_index, device) in devices.iter().enumerate() {
        if let Err(rejection) = device_satisfies_constraint_set(device, basic) {
            log::trace!("device {} {}", device.device_id, rejection);
            failed_constraint_name = rejection.constraint_name();
            continue;
        }

        for profile in &device.profiles {
            let candidate = match CandidateSettings::new(device, profile).apply_constraint_set(basic) {
                Ok(candidate) => candidate,
                Err(rejection) => {
                    log::trace!("profile {} of {} {}", profile, device.device_id, rejection);
                    failed_constraint_name = rejection.constraint_name();
                    continue;
                }
            };

            let mut distance = Vec::with_capacity(num_entries);

            let mut current = candidate;
            for set in advanced {
                let applied = device_satisfies_constraint_set(device, set)
                    .and_then(|_| current.apply_constraint_set(set));
                match applied {
                    Ok(next) => {
                        current = next;
                        distance.push(0.0);
                    }
                    Err(rejection) => {
                        log::trace!("advanced set on {} {}", current, rejection);
                        distance.push(f64::INFINITY);
                    }
                }
            }

            distance.push(current.fitness(basic));
            distance.push(squared_euclidean_distance(
                current.native_width(),
                current.native_height(),
                default_width,
                default_height,
            ));
            distance.push(default_frame_rate_distance(&current, default_frame_rate));
            distance.push(device_index as f64);

            log::trace!("candidate {current} distance {distance:?}");

            if distance.as_slice() < best_distance.as_slice() {
                log::debug!("new best candidate {current} distance {distance:?}");
                best_distance = distance;
                best_setting = Some(current.get_setting());
            }
        }
    }

    match best_setting {
        Some(setting) => {
            log::debug!("selected {setting}");
            Ok(setting)
        }
        None => {
            log::warn!("no candidate satisfies constraints, failed on {failed_constraint_name:?}");
            Err(Error::ErrOverconstrained(failed_constraint_name.to_owned()))
        }
    }
}
