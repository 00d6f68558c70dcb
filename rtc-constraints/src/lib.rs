//! # RTC Constraints - capture settings selection
//!
//! Picks a camera and one of its native capture profiles for a set of
//! [MediaTrackConstraints](https://www.w3.org/TR/mediacapture-streams/#dom-mediatrackconstraints).
//! The catalog of cameras is supplied by the caller; selection is a pure,
//! synchronous computation with no I/O.
//!
//! ## Quick Start
//!
//! ```
//! use rtc_constraints::constraint_set::MediaTrackConstraints;
//! use rtc_constraints::device::{CameraDeviceInfo, FacingMode, FrameRateRange, PixelFormat, VideoProfile};
//! use rtc_constraints::selector::SelectorConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let devices = vec![
//!     CameraDeviceInfo::new("cam0", "g0", FacingMode::User).with_profile(VideoProfile::new(
//!         1280,
//!         720,
//!         FrameRateRange::new(15.0, 30.0),
//!         PixelFormat::Nv12,
//!     )),
//! ];
//!
//! let constraints = MediaTrackConstraints::from_json_str(
//!     r#"{"width": {"ideal": 1280}, "frameRate": {"max": 24}}"#,
//! )?;
//!
//! let setting = SelectorConfig::default().select(&devices, &constraints)?;
//! assert_eq!(setting.device_id, "cam0");
//! assert_eq!(setting.profile.frame_rate_range, FrameRateRange::new(15.0, 24.0));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Selection
//!
//! Every (device, profile) pair that satisfies the basic constraint set is a
//! candidate. Candidates are ranked lexicographically by advanced set
//! satisfaction, fitness to the basic ideals, closeness to the default
//! resolution, closeness to the default frame rate and catalog order. A failed
//! selection reports the constraint that ruled out the last candidate, like
//! [OverconstrainedError](https://www.w3.org/TR/mediacapture-streams/#overconstrainederror-interface).

#![warn(rust_2018_idioms)]

pub use shared;

pub mod audio_options;
pub mod candidate;
pub mod constraint;
pub mod constraint_set;
pub mod device;
pub mod parse;
pub mod range;
pub mod selector;
pub mod supported_constraints;
pub mod track_capabilities;
pub mod track_settings;
