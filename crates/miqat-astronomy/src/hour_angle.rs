//! Sun-altitude hour-angle solutions.

use crate::math::{arccos_deg, arccot_deg, cos_deg, sin_deg, tan_deg};

/// Solves for the sun's hour angle at a target altitude.
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees
/// * `declination` - Sun declination in degrees
/// * `altitude` - Target sun altitude in degrees, negative below horizon
///
/// # Returns
/// The offset from solar noon in fractional hours; the caller subtracts it
/// for pre-noon events and adds it for post-noon events. `None` when the
/// sun never reaches the target altitude that day (deep twilight angles at
/// high latitude, polar day/night) — returned explicitly instead of a
/// clamped value so the caller can apply its substitution policy.
pub fn hour_angle(latitude: f64, declination: f64, altitude: f64) -> Option<f64> {
    let cos_h = (sin_deg(altitude) - sin_deg(latitude) * sin_deg(declination))
        / (cos_deg(latitude) * cos_deg(declination));

    // NaN and infinite ratios fail the range test as well.
    if (-1.0..=1.0).contains(&cos_h) {
        Some(arccos_deg(cos_h) / 15.0)
    } else {
        None
    }
}

/// Target sun altitude for Asr: the moment an object's shadow equals
/// `factor` times its height plus its noon shadow.
///
/// `altitude = arccot(factor + tan|latitude - declination|)` degrees. Past
/// the polar circles `|latitude - declination|` can exceed 90° and the
/// cotangent argument goes negative, dropping the target below the
/// horizon; the reference formula is kept as-is there.
pub fn asr_altitude(factor: f64, latitude: f64, declination: f64) -> f64 {
    arccot_deg(factor + tan_deg((latitude - declination).abs()))
}

/// Sunrise/sunset depression angle in degrees: atmospheric refraction plus
/// the horizon dip at `altitude_meters` above sea level.
///
/// Below-sea-level locations clamp the dip term to zero.
pub fn rise_set_angle(altitude_meters: f64) -> f64 {
    0.833 + 0.0347 * altitude_meters.max(0.0).sqrt()
}
