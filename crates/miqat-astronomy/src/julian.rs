//! Gregorian-to-Julian-day conversion.

use chrono::{Datelike, NaiveDate};

/// Julian day number at 0h Universal Time for a Gregorian calendar date.
///
/// Standard algorithm (Meeus, *Astronomical Algorithms*, ch. 7): January
/// and February count as months 13 and 14 of the previous year, with the
/// Gregorian century correction `B = 2 - A + A/4`.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use miqat_astronomy::julian_day;
///
/// let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// assert_eq!(julian_day(date), 2_451_544.5);
/// ```
pub fn julian_day(date: NaiveDate) -> f64 {
    let mut year = date.year() as f64;
    let mut month = date.month() as f64;
    let day = date.day() as f64;

    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }

    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + day + b - 1524.5
}
