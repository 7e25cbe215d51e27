//! Low-precision solar ephemeris.

use crate::math::{arcsin_deg, atan2_deg, cos_deg, fix_angle, fix_hour, sin_deg};

/// The sun's position parameters for one instant, as needed by the
/// prayer-time formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Declination in degrees; positive north of the celestial equator.
    pub declination: f64,
    /// Equation of time in minutes: apparent solar time minus mean time.
    pub equation_of_time: f64,
}

/// Computes the sun's declination and equation of time for a Julian day
/// instant (fractional days included).
///
/// Low-precision series from the US Naval Observatory's *Approximate Solar
/// Coordinates*: good to about one arcminute within two centuries of the
/// year 2000, which is far below the minute-level rounding of the final
/// table. Pure and total: out-of-era inputs degrade in accuracy but never
/// fail.
pub fn sun_position(jd: f64) -> SunPosition {
    let d = jd - 2_451_545.0;

    let g = fix_angle(357.529 + 0.985_600_28 * d);
    let q = fix_angle(280.459 + 0.985_647_36 * d);
    let l = fix_angle(q + 1.915 * sin_deg(g) + 0.020 * sin_deg(2.0 * g));

    let e = 23.439 - 0.000_000_36 * d;

    let declination = arcsin_deg(sin_deg(e) * sin_deg(l));
    let right_ascension = fix_hour(atan2_deg(cos_deg(e) * sin_deg(l), cos_deg(l)) / 15.0);

    // q/15 and RA sit on different mod-24 branches near the equinoxes;
    // bring their difference into (-12, +12] before scaling to minutes.
    let mut eqt = q / 15.0 - right_ascension;
    if eqt > 12.0 {
        eqt -= 24.0;
    } else if eqt <= -12.0 {
        eqt += 24.0;
    }

    SunPosition {
        declination,
        equation_of_time: eqt * 60.0,
    }
}
