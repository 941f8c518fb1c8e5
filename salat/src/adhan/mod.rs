//! Adhan trigger policy.
//!
//! Decides, once per tick, whether the call to prayer should sound. Each
//! prayer fires at most once per calendar day; the flags reset when the
//! day changes.
//!
//! - [`trigger`]: [`TriggerState`], [`TriggerPolicy`] and [`evaluate`]
//! - [`announcement`]: the text and Iqamah time handed to audio and
//!   notification collaborators

pub mod announcement;
pub mod trigger;

pub use announcement::Announcement;
pub use trigger::{evaluate, TriggerPolicy, TriggerState, MAX_MATCH_WINDOW_SECS};
