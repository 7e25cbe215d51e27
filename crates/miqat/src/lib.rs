//! # Miqat
//!
//! Daily Islamic prayer times (Imsak, Fajr, Sunrise, Dhuhr, Asr, Sunset,
//! Maghrib, Isha, Midnight) for any date, location, and calculation
//! convention, computed from the low-precision solar ephemeris and the
//! hour-angle formula, with the substitution policies that keep the table
//! meaningful at high latitudes.
//!
//! This crate is a facade that re-exports the `miqat` workspace.
//!
//! ## Modules
//!
//! - `types`: Vocabulary (GeoCoordinate, Event, PrayerTimes, rules, errors)
//! - `astronomy`: Julian day, solar position, hour-angle solutions
//! - `methods`: The seven-convention parameter registry
//! - `high_latitude`: The substitution policy
//!
//! ## Usage
//!
//! ```rust
//! use miqat::prelude::*;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2011, 2, 9).unwrap();
//! let location = GeoCoordinate::new_unchecked(43.0, -80.0);
//! let times = calculate_prayer_times(date, location, -5.0, &CalculationContext::new());
//! assert_eq!(times.format(Event::Sunrise, TimeFormat::TwentyFourHour), "07:26");
//! ```

pub use miqat_core::*;
