
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constraint_set::MediaTrackConstraints;

/// Audio processing switches requested through track constraints. `None`
/// leaves the audio source's own default in place.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioProcessingOptions {
    pub echo_cancellation: Option<bool>,
    pub auto_gain_control: Option<bool>,
    pub noise_suppression: Option<bool>,
}

impl AudioProcessingOptions {
    /// Reads the switches from the basic set, `exact` winning over `ideal`.
    /// Advanced sets are not consulted.
    pub fn from_constraints(constraints: Option<&MediaTrackConstraints>) -> Self {
        let Some(constraints) = constraints else {
            return Self::default();
        };

        let basic = constraints.basic();
        Self {
            echo_cancellation: basic.echo_cancellation.exact_or_ideal(),
            auto_gain_control: basic.auto_gain_control.exact_or_ideal(),
            noise_suppression: basic.noise_suppression.exact_or_ideal(),
        }
    }
}

impl fmt::Display for AudioProcessingOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = [
            ("echo_cancellation", self.echo_cancellation),
            ("auto_gain_control", self.auto_gain_control),
            ("noise_suppression", self.noise_suppression),
        ];

        write!(f, "AudioProcessingOptions {{")?;
        let mut first = true;
        for (name, value) in options {
            if let Some(value) = value {
                write!(f, "{}{name}: {value}", if first { " " } else { ", " })?;
                first = false;
            }
        }
        write!(f, " }}")
    }
}
