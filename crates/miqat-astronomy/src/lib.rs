//! Solar Position and Hour-Angle Mathematics.
//!
//! The astronomical half of the prayer-times computation: Julian day
//! conversion, the low-precision solar ephemeris (declination and equation
//! of time), and the spherical-triangle solutions that turn a target sun
//! altitude into an offset from solar noon.
//!
//! Everything here is a pure function over `f64` degrees and fractional
//! hours; clock-time conversion happens downstream.

mod hour_angle;
mod julian;
mod math;
mod solar;

pub use hour_angle::{asr_altitude, hour_angle, rise_set_angle};
pub use julian::julian_day;
pub use math::{fix_angle, fix_hour};
pub use solar::{sun_position, SunPosition};
