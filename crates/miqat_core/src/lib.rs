//! Prayer-time calculation engine.
//!
//! Ties the leaf crates together: the solar ephemeris and hour-angle
//! solver from `miqat-astronomy`, the convention registry from
//! `miqat-methods`, and the vocabulary types from `miqat-types`, plus the
//! high-latitude substitution policy and the run-configuration context
//! that live here. The single entry point is [`calculate_prayer_times`];
//! [`MiqatDateExt`] hangs the same operation off `NaiveDate`.
//!
//! Everything is a pure function over its arguments: no I/O, no globals,
//! no interior mutability. Concurrent calls with independent inputs need
//! no coordination.

mod calculator;
mod context;
mod extension;
pub mod high_latitude;

pub use calculator::calculate_prayer_times;
pub use context::{CalculationContext, TimeOffsets};
pub use extension::MiqatDateExt;

pub use miqat_astronomy as astronomy;
pub use miqat_methods as methods;
pub use miqat_types as types;

pub use miqat_methods::{CalculationMethod, MethodParams};
pub use miqat_types::{
    format_time, AsrFactor, Event, GeoCoordinate, HighLatitudeRule, MidnightMethod, MinuteOrAngle,
    MiqatError, PrayerTimes, TimeFormat, INVALID_TIME,
};

pub mod prelude {
    pub use crate::calculate_prayer_times;
    pub use crate::{CalculationContext, MiqatDateExt, TimeOffsets};
    pub use miqat_methods::{CalculationMethod, MethodParams};
    pub use miqat_types::*;
}
