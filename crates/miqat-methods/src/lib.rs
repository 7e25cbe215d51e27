//! Calculation method registry.
//!
//! Seven named conventions, each a fixed parameter record: Fajr twilight
//! angle, Maghrib and Isha as angle-or-minutes, Asr shadow factor, and the
//! midnight variant. Static data, no dispatch; callers that need to deviate
//! override individual fields after lookup.

use miqat_types::{AsrFactor, MidnightMethod, MinuteOrAngle, MiqatError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The parameter record shared by every convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodParams {
    /// Fajr twilight angle in degrees below the horizon.
    pub fajr_angle: f64,
    /// Maghrib: an angle, or minutes after Sunset.
    pub maghrib: MinuteOrAngle,
    /// Isha: an angle, or minutes after Maghrib.
    pub isha: MinuteOrAngle,
    /// Asr shadow-length factor.
    pub asr: AsrFactor,
    /// Which half of the night defines Midnight.
    pub midnight: MidnightMethod,
}

/// A named prayer-time calculation convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationMethod {
    /// Muslim World League.
    Mwl,
    /// Islamic Society of North America.
    Isna,
    /// Egyptian General Authority of Survey.
    Egypt,
    /// Umm Al-Qura University, Makkah.
    Makkah,
    /// University of Islamic Sciences, Karachi.
    Karachi,
    /// Institute of Geophysics, University of Tehran.
    Tehran,
    /// Shia Ithna-Ashari, Leva Institute, Qum.
    Jafari,
}

impl CalculationMethod {
    /// All seven conventions, in registry order.
    pub const ALL: [CalculationMethod; 7] = [
        CalculationMethod::Mwl,
        CalculationMethod::Isna,
        CalculationMethod::Egypt,
        CalculationMethod::Makkah,
        CalculationMethod::Karachi,
        CalculationMethod::Tehran,
        CalculationMethod::Jafari,
    ];

    /// The convention's parameter record.
    pub fn parameters(&self) -> MethodParams {
        let standard = MethodParams {
            fajr_angle: 18.0,
            maghrib: MinuteOrAngle::Minutes(0.0),
            isha: MinuteOrAngle::Angle(17.0),
            asr: AsrFactor::Standard,
            midnight: MidnightMethod::Standard,
        };
        match self {
            CalculationMethod::Mwl => standard,
            CalculationMethod::Isna => MethodParams {
                fajr_angle: 15.0,
                isha: MinuteOrAngle::Angle(15.0),
                ..standard
            },
            CalculationMethod::Egypt => MethodParams {
                fajr_angle: 19.5,
                isha: MinuteOrAngle::Angle(17.5),
                ..standard
            },
            // Fajr was 19° before 1430 AH.
            CalculationMethod::Makkah => MethodParams {
                fajr_angle: 18.5,
                isha: MinuteOrAngle::Minutes(90.0),
                ..standard
            },
            CalculationMethod::Karachi => MethodParams {
                fajr_angle: 18.0,
                isha: MinuteOrAngle::Angle(18.0),
                ..standard
            },
            // Isha is not explicitly specified by this institute.
            CalculationMethod::Tehran => MethodParams {
                fajr_angle: 17.7,
                maghrib: MinuteOrAngle::Angle(4.5),
                isha: MinuteOrAngle::Angle(14.0),
                midnight: MidnightMethod::Jafari,
                ..standard
            },
            CalculationMethod::Jafari => MethodParams {
                fajr_angle: 16.0,
                maghrib: MinuteOrAngle::Angle(4.0),
                isha: MinuteOrAngle::Angle(14.0),
                midnight: MidnightMethod::Jafari,
                ..standard
            },
        }
    }

    /// The institution the convention is named after.
    pub fn name(&self) -> &'static str {
        match self {
            CalculationMethod::Mwl => "Muslim World League",
            CalculationMethod::Isna => "Islamic Society of North America (ISNA)",
            CalculationMethod::Egypt => "Egyptian General Authority of Survey",
            CalculationMethod::Makkah => "Umm Al-Qura University, Makkah",
            CalculationMethod::Karachi => "University of Islamic Sciences, Karachi",
            CalculationMethod::Tehran => "Institute of Geophysics, University of Tehran",
            CalculationMethod::Jafari => "Shia Ithna-Ashari, Leva Institute, Qum",
        }
    }

    /// The configuration token recognized by [`FromStr`].
    pub fn token(&self) -> &'static str {
        match self {
            CalculationMethod::Mwl => "MWL",
            CalculationMethod::Isna => "ISNA",
            CalculationMethod::Egypt => "Egypt",
            CalculationMethod::Makkah => "Makkah",
            CalculationMethod::Karachi => "Karachi",
            CalculationMethod::Tehran => "Tehran",
            CalculationMethod::Jafari => "Jafari",
        }
    }
}

impl Default for CalculationMethod {
    fn default() -> Self {
        Self::Isna
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for CalculationMethod {
    type Err = MiqatError;

    /// Parses the case-sensitive configuration tokens
    /// `MWL | ISNA | Egypt | Makkah | Karachi | Tehran | Jafari`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MWL" => Ok(CalculationMethod::Mwl),
            "ISNA" => Ok(CalculationMethod::Isna),
            "Egypt" => Ok(CalculationMethod::Egypt),
            "Makkah" => Ok(CalculationMethod::Makkah),
            "Karachi" => Ok(CalculationMethod::Karachi),
            "Tehran" => Ok(CalculationMethod::Tehran),
            "Jafari" => Ok(CalculationMethod::Jafari),
            other => Err(MiqatError::unknown_method(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_round_trip() {
        for method in CalculationMethod::ALL {
            assert_eq!(method.token().parse::<CalculationMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("isna".parse::<CalculationMethod>().is_err());
        assert!("MAKKAH".parse::<CalculationMethod>().is_err());
        assert!("mwl".parse::<CalculationMethod>().is_err());
        let err = "Customary".parse::<CalculationMethod>().unwrap_err();
        assert!(matches!(err, MiqatError::UnknownMethod { .. }));
    }

    #[test]
    fn test_default_is_isna() {
        assert_eq!(CalculationMethod::default(), CalculationMethod::Isna);
    }

    #[test]
    fn test_registry_values() {
        let mwl = CalculationMethod::Mwl.parameters();
        assert_eq!(mwl.fajr_angle, 18.0);
        assert_eq!(mwl.isha, MinuteOrAngle::Angle(17.0));
        assert_eq!(mwl.maghrib, MinuteOrAngle::Minutes(0.0));
        assert_eq!(mwl.midnight, MidnightMethod::Standard);

        let makkah = CalculationMethod::Makkah.parameters();
        assert_eq!(makkah.fajr_angle, 18.5);
        assert_eq!(makkah.isha, MinuteOrAngle::Minutes(90.0));

        let tehran = CalculationMethod::Tehran.parameters();
        assert_eq!(tehran.fajr_angle, 17.7);
        assert_eq!(tehran.maghrib, MinuteOrAngle::Angle(4.5));
        assert_eq!(tehran.midnight, MidnightMethod::Jafari);

        let jafari = CalculationMethod::Jafari.parameters();
        assert_eq!(jafari.maghrib, MinuteOrAngle::Angle(4.0));
        assert_eq!(jafari.isha, MinuteOrAngle::Angle(14.0));

        // Asr is the standard factor everywhere in the registry.
        for method in CalculationMethod::ALL {
            assert_eq!(method.parameters().asr, AsrFactor::Standard);
        }
    }

    #[test]
    fn test_every_method_names_an_institution() {
        for method in CalculationMethod::ALL {
            assert!(!method.name().is_empty());
        }
    }
}
