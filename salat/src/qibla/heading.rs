//! Compass needle smoothing.
//!
//! Raw device headings arrive at sensor rate and jitter by several degrees.
//! The needle is moved toward its target with an exponential moving average
//! that always takes the shorter arc, so a target crossing north never makes
//! the needle spin the long way round.

use thiserror::Error;

/// Smoothing factor used by the mosque display compass.
pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.05;

/// Errors from heading configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeadingError {
    /// Smoothing factor outside (0, 1]
    #[error("Invalid smoothing factor: {0} (must be greater than 0 and at most 1)")]
    InvalidSmoothing(f64),
}

/// Fraction of the remaining arc covered on each tick, in (0, 1].
///
/// 1.0 snaps the needle straight to the target; small values glide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingFactor(f64);

impl SmoothingFactor {
    /// Validates and wraps a smoothing factor.
    pub fn new(value: f64) -> Result<Self, HeadingError> {
        if value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(HeadingError::InvalidSmoothing(value))
        }
    }

    /// The raw factor.
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for SmoothingFactor {
    fn default() -> Self {
        Self(DEFAULT_SMOOTHING_FACTOR)
    }
}

/// Compass needle state.
///
/// `display_angle` is continuous: it may leave [0, 360) as the needle keeps
/// turning in one direction. Wrap it only for rendering, via
/// [`HeadingState::display_degrees`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeadingState {
    /// Latest orientation sample from the device, degrees from north
    pub raw_device_heading: f64,
    /// Smoothed needle rotation, degrees
    pub display_angle: f64,
}

impl HeadingState {
    /// Creates a state with the needle resting at `display_angle`.
    pub fn new(raw_device_heading: f64, display_angle: f64) -> Self {
        Self {
            raw_device_heading,
            display_angle,
        }
    }

    /// Needle rotation wrapped into [0, 360) for rendering.
    pub fn display_degrees(&self) -> f64 {
        normalize_degrees(self.display_angle)
    }

    /// Records a new orientation sample. Leaves the needle where it is.
    #[must_use]
    pub fn observe(self, raw_device_heading: f64) -> Self {
        Self {
            raw_device_heading,
            ..self
        }
    }

    /// Advances the needle one animation frame toward `target_bearing`.
    ///
    /// See [`tick`].
    #[must_use]
    pub fn tick(self, target_bearing: f64, smoothing: SmoothingFactor) -> Self {
        tick(self, target_bearing, smoothing.get())
    }
}

/// Advances the needle one frame toward `target_bearing`.
///
/// The difference between target and current display angle is brought onto
/// the shorter arc (at most 180 degrees either way) first, then scaled by
/// `smoothing_factor`. Only `display_angle` changes.
///
/// # Example
///
/// ```
/// use salat::qibla::heading::{tick, HeadingState};
///
/// // 350° → 10° goes forward through north, not 340° backwards
/// let state = tick(HeadingState::new(0.0, 350.0), 10.0, 0.5);
/// assert!((state.display_angle - 360.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn tick(state: HeadingState, target_bearing: f64, smoothing_factor: f64) -> HeadingState {
    let mut diff = target_bearing - state.display_angle;
    if diff > 180.0 {
        diff -= 360.0;
    } else if diff < -180.0 {
        diff += 360.0;
    }
    // display_angle drifts without bound; fold any remaining whole turns
    if diff.abs() > 180.0 {
        diff = (diff + 180.0).rem_euclid(360.0) - 180.0;
    }

    HeadingState {
        raw_device_heading: state.raw_device_heading,
        display_angle: state.display_angle + diff * smoothing_factor,
    }
}

/// Needle angle relative to the device for a given qibla bearing.
///
/// When the device itself points at `raw_device_heading`, the qibla lies
/// `qibla_bearing - raw_device_heading` clockwise from the top of the screen.
#[inline]
pub fn needle_target(qibla_bearing: f64, raw_device_heading: f64) -> f64 {
    normalize_degrees(qibla_bearing - raw_device_heading)
}

/// Normalize an angle to [0, 360) degrees.
///
/// # Example
///
/// ```
/// use salat::qibla::normalize_degrees;
///
/// assert_eq!(normalize_degrees(360.0), 0.0);
/// assert_eq!(normalize_degrees(-90.0), 270.0);
/// assert_eq!(normalize_degrees(725.0), 5.0);
/// ```
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
