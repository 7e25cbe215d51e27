//! Core vocabulary for the miqat prayer-times engine.
//!
//! Everything here is a plain value type: coordinates, the daily events,
//! method parameter atoms, the computed time table, clock formatting, and
//! the workspace error enum. No astronomy lives in this crate.

mod coordinate;
mod error;
mod event;
mod format;
mod parameters;
mod table;

pub use coordinate::GeoCoordinate;
pub use error::MiqatError;
pub use event::Event;
pub use format::{format_time, TimeFormat, INVALID_TIME};
pub use parameters::{AsrFactor, HighLatitudeRule, MidnightMethod, MinuteOrAngle};
pub use table::PrayerTimes;
