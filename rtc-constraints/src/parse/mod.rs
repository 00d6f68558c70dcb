//! Decoding of `MediaTrackConstraints` from their JSON shape.
//!
//! A property value is either naked (`1280`, `"user"`, `["a", "b"]`, `true`)
//! or a dictionary (`{"min": 640, "ideal": 1280}`). Naked values are ideals in
//! the basic set and exact requirements inside an `advanced` element.

#[cfg(test)]
mod parse_test;

use serde_json::{Map, Value};
use shared::error::{Error, Result};

use crate::constraint::{BooleanConstraint, DoubleConstraint, LongConstraint, StringConstraint};
use crate::constraint_set::*;
use crate::supported_constraints::is_constraint_supported;

/// Longest accepted string in a string constraint, in bytes.
pub const MAX_CONSTRAINT_STRING_LENGTH: usize = 500;
/// Most strings accepted in one string constraint sequence.
pub const MAX_CONSTRAINT_STRING_SEQ_LENGTH: usize = 100;

const KEY_ADVANCED: &str = "advanced";
const KEY_MIN: &str = "min";
const KEY_MAX: &str = "max";
const KEY_EXACT: &str = "exact";
const KEY_IDEAL: &str = "ideal";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NakedValueDisposition {
    TreatAsIdeal,
    TreatAsExact,
}

enum ConstraintMut<'a> {
    Long(&'a mut LongConstraint),
    Double(&'a mut DoubleConstraint),
    String(&'a mut StringConstraint),
    Boolean(&'a mut BooleanConstraint),
}

fn constraint_mut<'a>(set: &'a mut MediaTrackConstraintSet, name: &str) -> Option<ConstraintMut<'a>> {
    let c = match name {
        CONSTRAINT_WIDTH => ConstraintMut::Long(&mut set.width),
        CONSTRAINT_HEIGHT => ConstraintMut::Long(&mut set.height),
        CONSTRAINT_ASPECT_RATIO => ConstraintMut::Double(&mut set.aspect_ratio),
        CONSTRAINT_FRAME_RATE => ConstraintMut::Double(&mut set.frame_rate),
        CONSTRAINT_FACING_MODE => ConstraintMut::String(&mut set.facing_mode),
        CONSTRAINT_RESIZE_MODE => ConstraintMut::String(&mut set.resize_mode),
        CONSTRAINT_SAMPLE_RATE => ConstraintMut::Long(&mut set.sample_rate),
        CONSTRAINT_SAMPLE_SIZE => ConstraintMut::Long(&mut set.sample_size),
        CONSTRAINT_ECHO_CANCELLATION => ConstraintMut::Boolean(&mut set.echo_cancellation),
        CONSTRAINT_AUTO_GAIN_CONTROL => ConstraintMut::Boolean(&mut set.auto_gain_control),
        CONSTRAINT_NOISE_SUPPRESSION => ConstraintMut::Boolean(&mut set.noise_suppression),
        CONSTRAINT_LATENCY => ConstraintMut::Double(&mut set.latency),
        CONSTRAINT_CHANNEL_COUNT => ConstraintMut::Long(&mut set.channel_count),
        CONSTRAINT_DEVICE_ID => ConstraintMut::String(&mut set.device_id),
        CONSTRAINT_GROUP_ID => ConstraintMut::String(&mut set.group_id),
        CONSTRAINT_BACKGROUND_BLUR => ConstraintMut::Boolean(&mut set.background_blur),
        CONSTRAINT_DISPLAY_SURFACE => ConstraintMut::String(&mut set.display_surface),
        CONSTRAINT_GOOG_ECHO_CANCELLATION => ConstraintMut::Boolean(&mut set.goog_echo_cancellation),
        CONSTRAINT_GOOG_AUTO_GAIN_CONTROL => ConstraintMut::Boolean(&mut set.goog_auto_gain_control),
        CONSTRAINT_GOOG_NOISE_SUPPRESSION => ConstraintMut::Boolean(&mut set.goog_noise_suppression),
        CONSTRAINT_GOOG_HIGHPASS_FILTER => ConstraintMut::Boolean(&mut set.goog_highpass_filter),
        CONSTRAINT_GOOG_AUDIO_MIRRORING => ConstraintMut::Boolean(&mut set.goog_audio_mirroring),
        CONSTRAINT_SCREEN_CAPTURE_MODE => ConstraintMut::String(&mut set.screen_capture_mode),
        CONSTRAINT_SCREEN_CAPTURE_DISPLAY_ID => ConstraintMut::Long(&mut set.screen_capture_display_id),
        CONSTRAINT_SCREEN_CAPTURE_MISSION_ID => ConstraintMut::String(&mut set.screen_capture_mission_id),
        CONSTRAINT_SCREEN_CAPTURE_WINDOW_FILTER => {
            ConstraintMut::String(&mut set.screen_capture_window_filter)
        }
        CONSTRAINT_SCREEN_CAPTURE_AUDIO_FILTER => {
            ConstraintMut::String(&mut set.screen_capture_audio_filter)
        }
        CONSTRAINT_SCREEN_CAPTURE_SKIP_PRIVACY_MODE => {
            ConstraintMut::String(&mut set.screen_capture_skip_privacy_mode)
        }
        CONSTRAINT_SCREEN_CAPTURE_AUTO_ROTATION => {
            ConstraintMut::Boolean(&mut set.screen_capture_auto_rotation)
        }
        _ => return None,
    };
    Some(c)
}

/// Decodes a `getUserMedia` style track constraint value.
///
/// `true` requests an unconstrained track, `false`, `null` and other scalars
/// request no track at all and yield `None`.
pub fn parse_track_constraints(value: &Value) -> Result<Option<MediaTrackConstraints>> {
    match value {
        Value::Bool(true) => Ok(Some(MediaTrackConstraints::default())),
        Value::Object(map) => parse_constraints_object(map).map(Some),
        _ => Ok(None),
    }
}

fn parse_constraints_object(map: &Map<String, Value>) -> Result<MediaTrackConstraints> {
    let basic = parse_constraint_set(map, NakedValueDisposition::TreatAsIdeal)?;

    let mut advanced = vec![];
    if let Some(value) = map.get(KEY_ADVANCED) {
        let Value::Array(elements) = value else {
            return Err(Error::ErrAdvancedNotArray);
        };
        for element in elements {
            let Value::Object(element) = element else {
                return Err(Error::ErrAdvancedElementNotObject);
            };
            advanced.push(parse_constraint_set(
                element,
                NakedValueDisposition::TreatAsExact,
            )?);
        }
    }

    Ok(MediaTrackConstraints::new(basic, advanced))
}

fn parse_constraint_set(
    map: &Map<String, Value>,
    naked: NakedValueDisposition,
) -> Result<MediaTrackConstraintSet> {
    let mut set = MediaTrackConstraintSet::new();

    for (name, value) in map {
        if name == KEY_ADVANCED {
            continue;
        }
        if !is_constraint_supported(name) {
            log::trace!("ignore unsupported constraint {name}");
            continue;
        }
        match constraint_mut(&mut set, name) {
            Some(ConstraintMut::Long(c)) => parse_long(value, c, naked),
            Some(ConstraintMut::Double(c)) => parse_double(value, c, naked),
            Some(ConstraintMut::String(c)) => parse_string(value, c, naked)?,
            Some(ConstraintMut::Boolean(c)) => parse_boolean(value, c, naked),
            None => log::trace!("ignore unknown constraint {name}"),
        }
    }

    Ok(set)
}

// Truncates toward zero and saturates at the i32 bounds.
fn as_long(value: &Value) -> Option<i32> {
    value.as_f64().map(|v| v as i32)
}

fn parse_long(value: &Value, c: &mut LongConstraint, naked: NakedValueDisposition) {
    match value {
        Value::Number(_) => {
            if let Some(v) = as_long(value) {
                match naked {
                    NakedValueDisposition::TreatAsIdeal => c.set_ideal(v),
                    NakedValueDisposition::TreatAsExact => c.set_exact(v),
                }
            }
        }
        Value::Object(map) => {
            if let Some(v) = map.get(KEY_MIN).and_then(as_long) {
                c.set_min(v);
            }
            if let Some(v) = map.get(KEY_MAX).and_then(as_long) {
                c.set_max(v);
            }
            if let Some(v) = map.get(KEY_EXACT).and_then(as_long) {
                c.set_exact(v);
            }
            if let Some(v) = map.get(KEY_IDEAL).and_then(as_long) {
                c.set_ideal(v);
            }
        }
        _ => log::trace!("ignore {} value {value}", c.name()),
    }
}

fn parse_double(value: &Value, c: &mut DoubleConstraint, naked: NakedValueDisposition) {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_f64() {
                match naked {
                    NakedValueDisposition::TreatAsIdeal => c.set_ideal(v),
                    NakedValueDisposition::TreatAsExact => c.set_exact(v),
                }
            }
        }
        Value::Object(map) => {
            if let Some(v) = map.get(KEY_MIN).and_then(Value::as_f64) {
                c.set_min(v);
            }
            if let Some(v) = map.get(KEY_MAX).and_then(Value::as_f64) {
                c.set_max(v);
            }
            if let Some(v) = map.get(KEY_EXACT).and_then(Value::as_f64) {
                c.set_exact(v);
            }
            if let Some(v) = map.get(KEY_IDEAL).and_then(Value::as_f64) {
                c.set_ideal(v);
            }
        }
        _ => log::trace!("ignore {} value {value}", c.name()),
    }
}

fn validated_string(s: &str) -> Result<String> {
    if s.len() > MAX_CONSTRAINT_STRING_LENGTH {
        return Err(Error::ErrConstraintStringTooLong);
    }
    Ok(s.to_owned())
}

/// A string or a sequence of strings. `Ok(None)` for any other shape.
fn parse_string_or_sequence(value: &Value) -> Result<Option<Vec<String>>> {
    match value {
        Value::String(s) => Ok(Some(vec![validated_string(s)?])),
        Value::Array(items) => {
            if items.len() > MAX_CONSTRAINT_STRING_SEQ_LENGTH {
                return Err(Error::ErrConstraintStringSeqTooLong);
            }
            let mut strings = Vec::with_capacity(items.len());
            for item in items {
                let Value::String(s) = item else {
                    return Ok(None);
                };
                strings.push(validated_string(s)?);
            }
            Ok(Some(strings))
        }
        _ => Ok(None),
    }
}

fn parse_string(
    value: &Value,
    c: &mut StringConstraint,
    naked: NakedValueDisposition,
) -> Result<()> {
    if let Value::Object(map) = value {
        if let Some(ideal) = map.get(KEY_IDEAL) {
            if let Some(strings) = parse_string_or_sequence(ideal)? {
                c.set_ideal(strings);
            }
        }
        if let Some(exact) = map.get(KEY_EXACT) {
            if let Some(strings) = parse_string_or_sequence(exact)? {
                c.set_exact(strings);
            }
        }
        return Ok(());
    }

    match parse_string_or_sequence(value)? {
        Some(strings) => match naked {
            NakedValueDisposition::TreatAsIdeal => c.set_ideal(strings),
            NakedValueDisposition::TreatAsExact => c.set_exact(strings),
        },
        None => log::trace!("ignore {} value {value}", c.name()),
    }
    Ok(())
}

fn parse_boolean(value: &Value, c: &mut BooleanConstraint, naked: NakedValueDisposition) {
    match value {
        Value::Bool(v) => match naked {
            NakedValueDisposition::TreatAsIdeal => c.set_ideal(*v),
            NakedValueDisposition::TreatAsExact => c.set_exact(*v),
        },
        Value::Object(map) => {
            if let Some(v) = map.get(KEY_IDEAL).and_then(Value::as_bool) {
                c.set_ideal(v);
            }
            if let Some(v) = map.get(KEY_EXACT).and_then(Value::as_bool) {
                c.set_exact(v);
            }
        }
        _ => log::trace!("ignore {} value {value}", c.name()),
    }
}

impl MediaTrackConstraints {
    /// Parses constraints from JSON text. Only an object or `true` describe a
    /// track.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        parse_track_constraints(&value)?.ok_or(Error::ErrConstraintsNotObject)
    }
}
