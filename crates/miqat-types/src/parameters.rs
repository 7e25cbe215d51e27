use crate::error::MiqatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a twilight-dependent event is specified: as a sun angle below the
/// horizon, or as a fixed clock offset from its base event.
///
/// Exactly one of the two is ever active for a given event; a method that
/// defines Isha as "90 minutes after Maghrib" never also carries an Isha
/// angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MinuteOrAngle {
    /// Degrees below the horizon.
    Angle(f64),
    /// Minutes after the base event (before it, for Imsak).
    Minutes(f64),
}

impl MinuteOrAngle {
    pub fn is_angle(&self) -> bool {
        matches!(self, MinuteOrAngle::Angle(_))
    }

    /// The angle in degrees, when this is an angle specification.
    pub fn angle(&self) -> Option<f64> {
        match self {
            MinuteOrAngle::Angle(deg) => Some(*deg),
            MinuteOrAngle::Minutes(_) => None,
        }
    }

    /// The offset in minutes, when this is a fixed-minutes specification.
    pub fn minutes(&self) -> Option<f64> {
        match self {
            MinuteOrAngle::Angle(_) => None,
            MinuteOrAngle::Minutes(min) => Some(*min),
        }
    }
}

/// Shadow-length factor used by the Asr formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AsrFactor {
    /// Shadow equal to the object's height (majority opinion).
    Standard,
    /// Shadow twice the object's height.
    Hanafi,
    /// An explicit factor, for conventions outside the two schools.
    Custom(f64),
}

impl AsrFactor {
    /// The numeric shadow-length multiplier.
    pub fn shadow_length(&self) -> f64 {
        match self {
            AsrFactor::Standard => 1.0,
            AsrFactor::Hanafi => 2.0,
            AsrFactor::Custom(factor) => *factor,
        }
    }
}

impl Default for AsrFactor {
    fn default() -> Self {
        Self::Standard
    }
}

/// Which half of the night defines Midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MidnightMethod {
    /// Midpoint of Sunset to Sunrise.
    Standard,
    /// Midpoint of Sunset to Fajr.
    Jafari,
}

impl Default for MidnightMethod {
    fn default() -> Self {
        Self::Standard
    }
}

/// Substitution policy for latitudes where a twilight angle is never
/// reached and the hour-angle formula has no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighLatitudeRule {
    /// No substitution; unsolvable events stay unresolved.
    None,
    /// Half of the night length from the nearest day/night boundary.
    NightMiddle,
    /// One seventh of the night length from the boundary.
    OneSeventh,
    /// The event's own twilight angle, as sixtieths of the night length.
    AngleBased,
}

impl HighLatitudeRule {
    /// The configuration token recognized by [`FromStr`].
    pub fn token(&self) -> &'static str {
        match self {
            HighLatitudeRule::None => "None",
            HighLatitudeRule::NightMiddle => "NightMiddle",
            HighLatitudeRule::OneSeventh => "OneSeventh",
            HighLatitudeRule::AngleBased => "AngleBased",
        }
    }
}

impl Default for HighLatitudeRule {
    fn default() -> Self {
        Self::NightMiddle
    }
}

impl fmt::Display for HighLatitudeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for HighLatitudeRule {
    type Err = MiqatError;

    /// Parses the case-sensitive configuration tokens
    /// `None | NightMiddle | OneSeventh | AngleBased`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(HighLatitudeRule::None),
            "NightMiddle" => Ok(HighLatitudeRule::NightMiddle),
            "OneSeventh" => Ok(HighLatitudeRule::OneSeventh),
            "AngleBased" => Ok(HighLatitudeRule::AngleBased),
            other => Err(MiqatError::unknown_rule(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minute_or_angle_accessors() {
        let angle = MinuteOrAngle::Angle(18.0);
        assert!(angle.is_angle());
        assert_eq!(angle.angle(), Some(18.0));
        assert_eq!(angle.minutes(), None);

        let minutes = MinuteOrAngle::Minutes(90.0);
        assert!(!minutes.is_angle());
        assert_eq!(minutes.angle(), None);
        assert_eq!(minutes.minutes(), Some(90.0));
    }

    #[test]
    fn test_asr_shadow_length() {
        assert_eq!(AsrFactor::Standard.shadow_length(), 1.0);
        assert_eq!(AsrFactor::Hanafi.shadow_length(), 2.0);
        assert_eq!(AsrFactor::Custom(1.5).shadow_length(), 1.5);
        assert_eq!(AsrFactor::default(), AsrFactor::Standard);
    }

    #[test]
    fn test_rule_tokens_round_trip() {
        for rule in [
            HighLatitudeRule::None,
            HighLatitudeRule::NightMiddle,
            HighLatitudeRule::OneSeventh,
            HighLatitudeRule::AngleBased,
        ] {
            assert_eq!(rule.token().parse::<HighLatitudeRule>().unwrap(), rule);
        }
    }

    #[test]
    fn test_rule_parse_is_case_sensitive() {
        assert!("nightmiddle".parse::<HighLatitudeRule>().is_err());
        assert!("ONESEVENTH".parse::<HighLatitudeRule>().is_err());
        let err = "Middle".parse::<HighLatitudeRule>().unwrap_err();
        assert!(matches!(err, MiqatError::UnknownHighLatitudeRule { .. }));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(HighLatitudeRule::default(), HighLatitudeRule::NightMiddle);
        assert_eq!(MidnightMethod::default(), MidnightMethod::Standard);
    }
}
