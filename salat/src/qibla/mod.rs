//! Qibla compass mathematics.
//!
//! - [`bearing`]: initial great-circle bearing from an observer to a target
//! - [`heading`]: shortest-arc smoothing of the compass needle
//!
//! # Angle Conventions
//!
//! - Bearings: degrees clockwise from true north, normalized to [0, 360)
//! - Device heading: the direction the top of the device points, same scale
//! - Display angle: continuous (unwrapped) needle rotation in degrees

pub mod bearing;
pub mod heading;

pub use bearing::{compute_bearing, distance_km, qibla_bearing};
pub use heading::{
    needle_target, normalize_degrees, HeadingError, HeadingState, SmoothingFactor,
    DEFAULT_SMOOTHING_FACTOR,
};
