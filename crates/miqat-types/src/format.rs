use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Placeholder rendered for an event the engine could not resolve
/// (polar day or night under the `None` rule).
pub const INVALID_TIME: &str = "-----";

/// Clock style for rendered event times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeFormat {
    /// `05:14`
    TwentyFourHour,
    /// `5:14am`
    TwelveHour,
    /// `5:14`
    TwelveHourNoSuffix,
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self::TwentyFourHour
    }
}

/// Renders a computed time rounded to the nearest minute, or the
/// [`INVALID_TIME`] marker for an unresolved event.
///
/// Rounding can carry past 23:59:30, which wraps to 00:00.
pub fn format_time(time: Option<NaiveTime>, format: TimeFormat) -> String {
    let Some(time) = time else {
        return INVALID_TIME.to_string();
    };

    let minutes = (time.num_seconds_from_midnight() + 30) / 60 % 1440;
    let (hours, minutes) = (minutes / 60, minutes % 60);

    match format {
        TimeFormat::TwentyFourHour => format!("{:02}:{:02}", hours, minutes),
        TimeFormat::TwelveHour => {
            let suffix = if hours < 12 { "am" } else { "pm" };
            format!("{}:{:02}{}", (hours + 11) % 12 + 1, minutes, suffix)
        }
        TimeFormat::TwelveHourNoSuffix => {
            format!("{}:{:02}", (hours + 11) % 12 + 1, minutes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, s)
    }

    #[test]
    fn test_unresolved_renders_marker() {
        assert_eq!(format_time(None, TimeFormat::TwentyFourHour), INVALID_TIME);
        assert_eq!(format_time(None, TimeFormat::TwelveHour), INVALID_TIME);
    }

    #[test]
    fn test_rounds_to_nearest_minute() {
        assert_eq!(format_time(at(5, 14, 29), TimeFormat::TwentyFourHour), "05:14");
        assert_eq!(format_time(at(5, 14, 30), TimeFormat::TwentyFourHour), "05:15");
        assert_eq!(format_time(at(5, 14, 31), TimeFormat::TwentyFourHour), "05:15");
    }

    #[test]
    fn test_rounding_wraps_at_midnight() {
        assert_eq!(format_time(at(23, 59, 45), TimeFormat::TwentyFourHour), "00:00");
    }

    #[test]
    fn test_twelve_hour_suffixes() {
        assert_eq!(format_time(at(0, 20, 0), TimeFormat::TwelveHour), "12:20am");
        assert_eq!(format_time(at(11, 59, 0), TimeFormat::TwelveHour), "11:59am");
        assert_eq!(format_time(at(12, 0, 0), TimeFormat::TwelveHour), "12:00pm");
        assert_eq!(format_time(at(13, 5, 0), TimeFormat::TwelveHour), "1:05pm");
        assert_eq!(format_time(at(13, 5, 0), TimeFormat::TwelveHourNoSuffix), "1:05");
    }
}
