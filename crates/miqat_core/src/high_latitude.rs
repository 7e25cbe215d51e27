//! High-latitude substitution policy.
//!
//! Above roughly 48° the sun may never reach a method's twilight angle, so
//! the hour-angle formula has no solution for Fajr or Isha during part of
//! the year. The policy here replaces an undefined (or implausibly distant)
//! event with a fixed fraction of the night measured from the nearest
//! day/night boundary: sunrise for dawn events, sunset for dusk events.

use miqat_astronomy::fix_hour;
use miqat_types::HighLatitudeRule;

/// Which side of solar noon an event belongs to, and therefore which
/// boundary anchors its substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Before sunrise, measured backwards from it (Imsak, Fajr).
    Dawn,
    /// After sunset, measured forwards from it (Maghrib, Isha).
    Dusk,
}

/// The largest plausible distance between an event and its boundary under
/// a substitution rule, in fractional hours.
///
/// `AngleBased` scales with the event's own twilight angle (one degree per
/// sixtieth of the night); `OneSeventh` and `NightMiddle` are fixed
/// fractions. For `None` this is the conventional half night, though the
/// rule never substitutes.
pub fn night_portion(rule: HighLatitudeRule, angle: f64, night: f64) -> f64 {
    match rule {
        HighLatitudeRule::AngleBased => angle / 60.0 * night,
        HighLatitudeRule::OneSeventh => night / 7.0,
        HighLatitudeRule::None | HighLatitudeRule::NightMiddle => night / 2.0,
    }
}

/// Applies the substitution policy to one event.
///
/// # Arguments
/// * `time` - The raw solver result in fractional hours, `None` when the
///   formula had no solution
/// * `base` - The anchoring boundary: sunrise for `Dawn`, sunset for `Dusk`
/// * `angle` - The event's twilight angle in degrees (drives `AngleBased`)
/// * `night` - Night length in fractional hours
/// * `rule` - The caller-selected policy
///
/// With rule `None` the raw value passes through untouched, defined or
/// not. Under any other rule the substitute `base ∓ portion` replaces the
/// raw value whenever it is undefined or lies farther from the boundary
/// than the portion (measured modulo 24, so an event on the wrong side of
/// its boundary is also caught).
pub fn adjust_event(
    time: Option<f64>,
    base: f64,
    angle: f64,
    night: f64,
    direction: Direction,
    rule: HighLatitudeRule,
) -> Option<f64> {
    if rule == HighLatitudeRule::None {
        return time;
    }

    let portion = night_portion(rule, angle, night);
    let diff = time.map(|t| match direction {
        Direction::Dawn => fix_hour(base - t),
        Direction::Dusk => fix_hour(t - base),
    });

    match diff {
        Some(d) if d <= portion => time,
        _ => Some(match direction {
            Direction::Dawn => base - portion,
            Direction::Dusk => base + portion,
        }),
    }
}
