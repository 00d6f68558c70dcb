
use std::fmt;

use crate::constraint::{CONSTRAINT_EPSILON, NumericConstraint, StringConstraint};
use crate::constraint_set::MediaTrackConstraintSet;
use crate::device::{CameraDeviceInfo, FrameRateRange, VideoProfile};
use crate::range::NumericRangeSet;
use crate::selector::CameraCaptureSettings;

/// Largest width or height a constraint may meaningfully ask for.
pub const MAX_DIMENSION: i32 = i32::MAX;
/// Frame rates above this are treated as unbounded.
pub const MAX_FRAME_RATE: f64 = 1000.0;

/// A candidate was ruled out by the named constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection(pub &'static str);

impl Rejection {
    pub fn constraint_name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rejected by {}", self.0)
    }
}

/// Relative distance between two numbers, zero when they agree within
/// [`CONSTRAINT_EPSILON`].
pub fn numeric_distance(a: f64, b: f64) -> f64 {
    let delta = (a - b).abs();
    if delta <= CONSTRAINT_EPSILON {
        0.0
    } else {
        delta / a.abs().max(b.abs())
    }
}

/// Fitness of a fixed `value` against the ideal of `c`.
pub fn numeric_value_fitness<C: NumericConstraint>(c: &C, value: f64) -> f64 {
    c.ideal()
        .map_or(0.0, |ideal| numeric_distance(value, ideal.into()))
}

/// Fitness of the interval `[min, max]` against the ideal of `c`: zero when the
/// ideal falls inside, else the distance to the nearer bound.
pub fn numeric_range_fitness<C: NumericConstraint>(c: &C, min: f64, max: f64) -> f64 {
    let Some(ideal): Option<f64> = c.ideal().map(Into::into) else {
        return 0.0;
    };
    if ideal < min {
        numeric_distance(min, ideal)
    } else if ideal > max {
        numeric_distance(max, ideal)
    } else {
        0.0
    }
}

/// Zero unless `c` has ideal values and `value` is none of them.
pub fn string_fitness(value: &str, c: &StringConstraint) -> f64 {
    if !c.has_ideal() || c.ideal().iter().any(|ideal| ideal == value) {
        0.0
    } else {
        1.0
    }
}

/// Checks the identity constraints (`deviceId`, `groupId`, `facingMode`) of
/// `set` against `device`. Profiles play no part.
pub fn device_satisfies_constraint_set(
    device: &CameraDeviceInfo,
    set: &MediaTrackConstraintSet,
) -> Result<(), Rejection> {
    if !set.device_id.matches(&device.device_id) {
        return Err(Rejection(set.device_id.name()));
    }
    if !set.group_id.matches(&device.group_id) {
        return Err(Rejection(set.group_id.name()));
    }
    if !set.facing_mode.matches(device.facing_mode.constraint_value()) {
        return Err(Rejection(set.facing_mode.name()));
    }
    Ok(())
}

/// Evaluation state of one (device, native profile) pairing.
///
/// The resolution is fixed by the profile. Only the frame rate range narrows,
/// and each applied constraint set yields a new state rather than mutating this
/// one, so the basic set and every advanced set can be folded in order.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSettings<'a> {
    device: &'a CameraDeviceInfo,
    profile: &'a VideoProfile,

    target_width: i32,
    target_height: i32,
    target_aspect_ratio: f64,
    frame_rate_range: FrameRateRange,

    constrained_width: NumericRangeSet<i32>,
    constrained_height: NumericRangeSet<i32>,
    constrained_aspect_ratio: NumericRangeSet<f64>,
    constrained_frame_rate: NumericRangeSet<f64>,
}

impl<'a> CandidateSettings<'a> {
    pub fn new(device: &'a CameraDeviceInfo, profile: &'a VideoProfile) -> Self {
        Self {
            device,
            profile,
            target_width: i32::try_from(profile.width).unwrap_or(MAX_DIMENSION),
            target_height: i32::try_from(profile.height).unwrap_or(MAX_DIMENSION),
            target_aspect_ratio: profile.aspect_ratio(),
            frame_rate_range: profile.frame_rate_range,
            constrained_width: NumericRangeSet::Unbounded,
            constrained_height: NumericRangeSet::Unbounded,
            constrained_aspect_ratio: NumericRangeSet::Unbounded,
            constrained_frame_rate: NumericRangeSet::Unbounded,
        }
    }

    pub fn device(&self) -> &'a CameraDeviceInfo {
        self.device
    }

    pub fn native_profile(&self) -> &'a VideoProfile {
        self.profile
    }

    pub fn native_width(&self) -> i32 {
        self.target_width
    }

    pub fn native_height(&self) -> i32 {
        self.target_height
    }

    pub fn frame_rate_range(&self) -> FrameRateRange {
        self.frame_rate_range
    }

    /// Lowest frame rate still reachable after every applied constraint set.
    pub fn min_frame_rate(&self) -> f64 {
        match self.constrained_frame_rate.min() {
            Some(min) => min.max(self.frame_rate_range.min),
            None => self.frame_rate_range.min,
        }
    }

    /// Highest frame rate still reachable after every applied constraint set.
    pub fn max_frame_rate(&self) -> f64 {
        match self.constrained_frame_rate.max() {
            Some(max) => max.min(self.frame_rate_range.max),
            None => self.frame_rate_range.max,
        }
    }

    /// Applies `set` on top of the current state.
    ///
    /// Width, height and aspect ratio only filter against the native profile.
    /// The frame rate range is narrowed to what `set` still allows. On rejection
    /// the first failing constraint is reported and `self` is unaffected.
    pub fn apply_constraint_set(
        &self,
        set: &MediaTrackConstraintSet,
    ) -> Result<CandidateSettings<'a>, Rejection> {
        if !NumericRangeSet::from_constraint(&set.width).contains(self.target_width) {
            return Err(Rejection(set.width.name()));
        }
        if !NumericRangeSet::from_constraint(&set.height).contains(self.target_height) {
            return Err(Rejection(set.height.name()));
        }
        if !NumericRangeSet::from_constraint(&set.aspect_ratio).contains(self.target_aspect_ratio) {
            return Err(Rejection(set.aspect_ratio.name()));
        }

        let current = NumericRangeSet::new(Some(self.min_frame_rate()), Some(self.max_frame_rate()));
        let feasible = NumericRangeSet::from_constraint_clamped(&set.frame_rate, 0.0, MAX_FRAME_RATE)
            .intersection(&current);
        if feasible.is_empty() {
            return Err(Rejection(set.frame_rate.name()));
        }

        let frame_rate_range = FrameRateRange::new(
            feasible.min().unwrap_or(self.frame_rate_range.min),
            feasible.max().unwrap_or(self.frame_rate_range.max),
        );

        Ok(CandidateSettings {
            frame_rate_range,
            constrained_width: self
                .constrained_width
                .intersection(&NumericRangeSet::from_constraint_clamped(
                    &set.width,
                    1,
                    MAX_DIMENSION,
                )),
            constrained_height: self
                .constrained_height
                .intersection(&NumericRangeSet::from_constraint_clamped(
                    &set.height,
                    1,
                    MAX_DIMENSION,
                )),
            constrained_aspect_ratio: self.constrained_aspect_ratio.intersection(
                &NumericRangeSet::from_constraint_clamped(&set.aspect_ratio, 0.0, f64::INFINITY),
            ),
            constrained_frame_rate: self.constrained_frame_rate.intersection(
                &NumericRangeSet::from_constraint_clamped(&set.frame_rate, 0.0, MAX_FRAME_RATE),
            ),
            ..self.clone()
        })
    }

    /// Fitness distance of this candidate to the ideals of `set`. Zero is a
    /// perfect match or no preference at all.
    pub fn fitness(&self, set: &MediaTrackConstraintSet) -> f64 {
        self.device_fitness(set) + self.profile_fitness(set)
    }

    fn device_fitness(&self, set: &MediaTrackConstraintSet) -> f64 {
        string_fitness(&self.device.device_id, &set.device_id)
            + string_fitness(&self.device.group_id, &set.group_id)
            + string_fitness(self.device.facing_mode.constraint_value(), &set.facing_mode)
    }

    fn profile_fitness(&self, set: &MediaTrackConstraintSet) -> f64 {
        numeric_value_fitness(&set.width, f64::from(self.target_width))
            + numeric_value_fitness(&set.height, f64::from(self.target_height))
            + numeric_value_fitness(&set.aspect_ratio, self.target_aspect_ratio)
            + numeric_range_fitness(&set.frame_rate, self.min_frame_rate(), self.max_frame_rate())
    }

    /// The native resolution and format together with the narrowed frame rate
    /// range.
    pub fn get_setting(&self) -> CameraCaptureSettings {
        CameraCaptureSettings {
            device_id: self.device.device_id.clone(),
            profile: VideoProfile {
                width: self.profile.width,
                height: self.profile.height,
                frame_rate_range: self.frame_rate_range,
                format: self.profile.format,
            },
        }
    }
}

impl fmt::Display for CandidateSettings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}x{}@{} {}",
            self.device.device_id,
            self.target_width,
            self.target_height,
            self.frame_rate_range,
            self.profile.format
        )
    }
}
