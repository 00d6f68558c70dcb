//! MediaStreamTrack constraint sets.
//!
//! A [`MediaTrackConstraintSet`] aggregates one named constraint per
//! constrainable property. [`MediaTrackConstraints`] pairs the basic set with an
//! ordered list of advanced sets.
//!
//! # Specification
//!
//! See [MediaStreamTrack.applyConstraints()](https://www.w3.org/TR/mediacapture-streams/#dom-mediastreamtrack-applyconstraints).

#[cfg(test)]
mod constraint_set_test;

use std::fmt;

use crate::constraint::{
    BaseConstraint, BooleanConstraint, DoubleConstraint, LongConstraint, StringConstraint,
};

pub const CONSTRAINT_WIDTH: &str = "width";
pub const CONSTRAINT_HEIGHT: &str = "height";
pub const CONSTRAINT_ASPECT_RATIO: &str = "aspectRatio";
pub const CONSTRAINT_FRAME_RATE: &str = "frameRate";
pub const CONSTRAINT_FACING_MODE: &str = "facingMode";
pub const CONSTRAINT_RESIZE_MODE: &str = "resizeMode";
pub const CONSTRAINT_SAMPLE_RATE: &str = "sampleRate";
pub const CONSTRAINT_SAMPLE_SIZE: &str = "sampleSize";
pub const CONSTRAINT_ECHO_CANCELLATION: &str = "echoCancellation";
pub const CONSTRAINT_AUTO_GAIN_CONTROL: &str = "autoGainControl";
pub const CONSTRAINT_NOISE_SUPPRESSION: &str = "noiseSuppression";
pub const CONSTRAINT_LATENCY: &str = "latency";
pub const CONSTRAINT_CHANNEL_COUNT: &str = "channelCount";
pub const CONSTRAINT_DEVICE_ID: &str = "deviceId";
pub const CONSTRAINT_GROUP_ID: &str = "groupId";
pub const CONSTRAINT_BACKGROUND_BLUR: &str = "backgroundBlur";
pub const CONSTRAINT_DISPLAY_SURFACE: &str = "displaySurface";
pub const CONSTRAINT_GOOG_ECHO_CANCELLATION: &str = "googEchoCancellation";
pub const CONSTRAINT_GOOG_AUTO_GAIN_CONTROL: &str = "googAutoGainControl";
pub const CONSTRAINT_GOOG_NOISE_SUPPRESSION: &str = "googNoiseSuppression";
pub const CONSTRAINT_GOOG_HIGHPASS_FILTER: &str = "googHighpassFilter";
pub const CONSTRAINT_GOOG_AUDIO_MIRRORING: &str = "googAudioMirroring";
pub const CONSTRAINT_SCREEN_CAPTURE_MODE: &str = "screenCaptureMode";
pub const CONSTRAINT_SCREEN_CAPTURE_DISPLAY_ID: &str = "screenCaptureDisplayId";
pub const CONSTRAINT_SCREEN_CAPTURE_MISSION_ID: &str = "screenCaptureMissionId";
pub const CONSTRAINT_SCREEN_CAPTURE_WINDOW_FILTER: &str = "screenCaptureWindowFilter";
pub const CONSTRAINT_SCREEN_CAPTURE_AUDIO_FILTER: &str = "screenCaptureAudioFilter";
pub const CONSTRAINT_SCREEN_CAPTURE_SKIP_PRIVACY_MODE: &str = "screenCaptureSkipPrivacyMode";
pub const CONSTRAINT_SCREEN_CAPTURE_AUTO_ROTATION: &str = "screenCaptureAutoRotation";

/// Number of constrainable properties in a [`MediaTrackConstraintSet`].
pub const NUM_CONSTRAINTS: usize = 29;

/// A set of constraints for a media track.
///
/// Every field is always present; an unconstrained field simply carries no
/// `min`/`max`/`exact`/`ideal`. The `screen_capture_*` fields are platform
/// extensions that the selector passes through untouched.
///
/// # Specification
///
/// See [MediaTrackConstraintSet](https://www.w3.org/TR/mediacapture-streams/#dom-mediatrackconstraintset)
/// in the W3C Media Capture and Streams specification.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaTrackConstraintSet {
    /// Video width constraint in pixels.
    ///
    /// # Specification
    ///
    /// See [width](https://www.w3.org/TR/mediacapture-streams/#def-constraint-width).
    pub width: LongConstraint,

    /// Video height constraint in pixels.
    ///
    /// # Specification
    ///
    /// See [height](https://www.w3.org/TR/mediacapture-streams/#def-constraint-height).
    pub height: LongConstraint,

    /// Aspect ratio constraint (width/height).
    ///
    /// # Specification
    ///
    /// See [aspectRatio](https://www.w3.org/TR/mediacapture-streams/#def-constraint-aspectRatio).
    pub aspect_ratio: DoubleConstraint,

    /// Frame rate constraint in frames per second.
    ///
    /// # Specification
    ///
    /// See [frameRate](https://www.w3.org/TR/mediacapture-streams/#def-constraint-frameRate).
    pub frame_rate: DoubleConstraint,

    /// Camera facing mode constraint.
    ///
    /// Values: "user" (front), "environment" (back), "left", "right".
    ///
    /// # Specification
    ///
    /// See [facingMode](https://www.w3.org/TR/mediacapture-streams/#def-constraint-facingMode).
    pub facing_mode: StringConstraint,

    /// Resize mode constraint for video processing.
    ///
    /// Values: "none", "crop-and-scale".
    pub resize_mode: StringConstraint,

    /// Audio sample rate constraint in Hz.
    pub sample_rate: LongConstraint,

    /// Audio sample size constraint in bits.
    pub sample_size: LongConstraint,

    /// Echo cancellation constraint.
    ///
    /// # Specification
    ///
    /// See [echoCancellation](https://www.w3.org/TR/mediacapture-streams/#def-constraint-echoCancellation).
    pub echo_cancellation: BooleanConstraint,

    /// Automatic gain control constraint.
    ///
    /// # Specification
    ///
    /// See [autoGainControl](https://www.w3.org/TR/mediacapture-streams/#def-constraint-autoGainControl).
    pub auto_gain_control: BooleanConstraint,

    /// Noise suppression constraint.
    ///
    /// # Specification
    ///
    /// See [noiseSuppression](https://www.w3.org/TR/mediacapture-streams/#def-constraint-noiseSuppression).
    pub noise_suppression: BooleanConstraint,

    /// Latency constraint in seconds.
    pub latency: DoubleConstraint,

    /// Audio channel count constraint.
    pub channel_count: LongConstraint,

    /// Device identifier constraint.
    ///
    /// # Specification
    ///
    /// See [deviceId](https://www.w3.org/TR/mediacapture-streams/#def-constraint-deviceId).
    pub device_id: StringConstraint,

    /// Group identifier constraint.
    ///
    /// # Specification
    ///
    /// See [groupId](https://www.w3.org/TR/mediacapture-streams/#def-constraint-groupId).
    pub group_id: StringConstraint,

    /// Background blur constraint.
    pub background_blur: BooleanConstraint,

    /// Display surface constraint for screen capture.
    pub display_surface: StringConstraint,

    // Legacy audio processing names.
    pub goog_echo_cancellation: BooleanConstraint,
    pub goog_auto_gain_control: BooleanConstraint,
    pub goog_noise_suppression: BooleanConstraint,
    pub goog_highpass_filter: BooleanConstraint,
    pub goog_audio_mirroring: BooleanConstraint,

    // Screen capture extensions.
    pub screen_capture_mode: StringConstraint,
    pub screen_capture_display_id: LongConstraint,
    pub screen_capture_mission_id: StringConstraint,
    pub screen_capture_window_filter: StringConstraint,
    pub screen_capture_audio_filter: StringConstraint,
    pub screen_capture_skip_privacy_mode: StringConstraint,
    pub screen_capture_auto_rotation: BooleanConstraint,
}

impl Default for MediaTrackConstraintSet {
    fn default() -> Self {
        Self {
            width: LongConstraint::new(CONSTRAINT_WIDTH),
            height: LongConstraint::new(CONSTRAINT_HEIGHT),
            aspect_ratio: DoubleConstraint::new(CONSTRAINT_ASPECT_RATIO),
            frame_rate: DoubleConstraint::new(CONSTRAINT_FRAME_RATE),
            facing_mode: StringConstraint::new(CONSTRAINT_FACING_MODE),
            resize_mode: StringConstraint::new(CONSTRAINT_RESIZE_MODE),
            sample_rate: LongConstraint::new(CONSTRAINT_SAMPLE_RATE),
            sample_size: LongConstraint::new(CONSTRAINT_SAMPLE_SIZE),
            echo_cancellation: BooleanConstraint::new(CONSTRAINT_ECHO_CANCELLATION),
            auto_gain_control: BooleanConstraint::new(CONSTRAINT_AUTO_GAIN_CONTROL),
            noise_suppression: BooleanConstraint::new(CONSTRAINT_NOISE_SUPPRESSION),
            latency: DoubleConstraint::new(CONSTRAINT_LATENCY),
            channel_count: LongConstraint::new(CONSTRAINT_CHANNEL_COUNT),
            device_id: StringConstraint::new(CONSTRAINT_DEVICE_ID),
            group_id: StringConstraint::new(CONSTRAINT_GROUP_ID),
            background_blur: BooleanConstraint::new(CONSTRAINT_BACKGROUND_BLUR),
            display_surface: StringConstraint::new(CONSTRAINT_DISPLAY_SURFACE),
            goog_echo_cancellation: BooleanConstraint::new(CONSTRAINT_GOOG_ECHO_CANCELLATION),
            goog_auto_gain_control: BooleanConstraint::new(CONSTRAINT_GOOG_AUTO_GAIN_CONTROL),
            goog_noise_suppression: BooleanConstraint::new(CONSTRAINT_GOOG_NOISE_SUPPRESSION),
            goog_highpass_filter: BooleanConstraint::new(CONSTRAINT_GOOG_HIGHPASS_FILTER),
            goog_audio_mirroring: BooleanConstraint::new(CONSTRAINT_GOOG_AUDIO_MIRRORING),
            screen_capture_mode: StringConstraint::new(CONSTRAINT_SCREEN_CAPTURE_MODE),
            screen_capture_display_id: LongConstraint::new(CONSTRAINT_SCREEN_CAPTURE_DISPLAY_ID),
            screen_capture_mission_id: StringConstraint::new(CONSTRAINT_SCREEN_CAPTURE_MISSION_ID),
            screen_capture_window_filter: StringConstraint::new(
                CONSTRAINT_SCREEN_CAPTURE_WINDOW_FILTER,
            ),
            screen_capture_audio_filter: StringConstraint::new(
                CONSTRAINT_SCREEN_CAPTURE_AUDIO_FILTER,
            ),
            screen_capture_skip_privacy_mode: StringConstraint::new(
                CONSTRAINT_SCREEN_CAPTURE_SKIP_PRIVACY_MODE,
            ),
            screen_capture_auto_rotation: BooleanConstraint::new(
                CONSTRAINT_SCREEN_CAPTURE_AUTO_ROTATION,
            ),
        }
    }
}

impl MediaTrackConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every constrainable property, in declaration order.
    pub fn all_constraints(&self) -> [BaseConstraint<'_>; NUM_CONSTRAINTS] {
        [
            BaseConstraint::Long(&self.width),
            BaseConstraint::Long(&self.height),
            BaseConstraint::Double(&self.aspect_ratio),
            BaseConstraint::Double(&self.frame_rate),
            BaseConstraint::String(&self.facing_mode),
            BaseConstraint::String(&self.resize_mode),
            BaseConstraint::Long(&self.sample_rate),
            BaseConstraint::Long(&self.sample_size),
            BaseConstraint::Boolean(&self.echo_cancellation),
            BaseConstraint::Boolean(&self.auto_gain_control),
            BaseConstraint::Boolean(&self.noise_suppression),
            BaseConstraint::Double(&self.latency),
            BaseConstraint::Long(&self.channel_count),
            BaseConstraint::String(&self.device_id),
            BaseConstraint::String(&self.group_id),
            BaseConstraint::Boolean(&self.background_blur),
            BaseConstraint::String(&self.display_surface),
            BaseConstraint::Boolean(&self.goog_echo_cancellation),
            BaseConstraint::Boolean(&self.goog_auto_gain_control),
            BaseConstraint::Boolean(&self.goog_noise_suppression),
            BaseConstraint::Boolean(&self.goog_highpass_filter),
            BaseConstraint::Boolean(&self.goog_audio_mirroring),
            BaseConstraint::String(&self.screen_capture_mode),
            BaseConstraint::Long(&self.screen_capture_display_id),
            BaseConstraint::String(&self.screen_capture_mission_id),
            BaseConstraint::String(&self.screen_capture_window_filter),
            BaseConstraint::String(&self.screen_capture_audio_filter),
            BaseConstraint::String(&self.screen_capture_skip_privacy_mode),
            BaseConstraint::Boolean(&self.screen_capture_auto_rotation),
        ]
    }

    /// Looks a property up by its declared name, e.g. `"frameRate"`.
    pub fn constraint(&self, name: &str) -> Option<BaseConstraint<'_>> {
        self.all_constraints().into_iter().find(|c| c.name() == name)
    }

    pub fn is_constrained(&self) -> bool {
        self.all_constraints().iter().any(|c| c.is_constrained())
    }

    pub fn has_min(&self) -> bool {
        self.all_constraints().iter().any(|c| c.has_min())
    }

    pub fn has_exact(&self) -> bool {
        self.all_constraints().iter().any(|c| c.has_exact())
    }

    /// Name of the first property carrying a hard requirement, if any.
    pub fn first_mandatory(&self) -> Option<&'static str> {
        self.all_constraints()
            .iter()
            .find(|c| c.has_mandatory())
            .map(|c| c.name())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for MediaTrackConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for c in self.all_constraints().iter().filter(|c| c.is_constrained()) {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{}: {}", c.name(), c)?;
        }
        Ok(())
    }
}

/// Constraints to apply to a media track.
///
/// `MediaTrackConstraints` consists of a basic constraint set and an optional
/// list of advanced constraint sets. The basic set must be satisfied; the
/// advanced sets are satisfied in order as far as possible.
///
/// # Specification
///
/// See [MediaTrackConstraints](https://www.w3.org/TR/mediacapture-streams/#dom-mediatrackconstraints)
/// in the W3C Media Capture and Streams specification.
///
/// # Examples
///
/// ```
/// use rtc_constraints::constraint_set::{MediaTrackConstraintSet, MediaTrackConstraints};
///
/// let mut basic = MediaTrackConstraintSet::new();
/// basic.width.set_ideal(1280);
/// let constraints = MediaTrackConstraints::new(basic, vec![]);
/// assert!(!constraints.is_unconstrained());
/// ```
#[derive(Default, Debug, Clone, PartialEq)]
pub struct MediaTrackConstraints {
    basic: MediaTrackConstraintSet,
    advanced: Vec<MediaTrackConstraintSet>,
}

impl MediaTrackConstraints {
    pub fn new(basic: MediaTrackConstraintSet, advanced: Vec<MediaTrackConstraintSet>) -> Self {
        Self { basic, advanced }
    }

    pub fn basic(&self) -> &MediaTrackConstraintSet {
        &self.basic
    }

    pub fn basic_mut(&mut self) -> &mut MediaTrackConstraintSet {
        &mut self.basic
    }

    pub fn advanced(&self) -> &[MediaTrackConstraintSet] {
        &self.advanced
    }

    pub fn push_advanced(&mut self, set: MediaTrackConstraintSet) {
        self.advanced.push(set);
    }

    /// True when neither the basic set nor any advanced set asks for anything.
    pub fn is_unconstrained(&self) -> bool {
        !self.basic.is_constrained() && self.advanced.iter().all(|set| !set.is_constrained())
    }
}

impl fmt::Display for MediaTrackConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}", self.basic)?;
        if !self.advanced.is_empty() {
            if self.basic.is_constrained() {
                write!(f, ", ")?;
            }
            write!(f, "advanced: [")?;
            for (i, set) in self.advanced.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{{{set}}}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "}}")
    }
}
