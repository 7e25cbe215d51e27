use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of the daily prayer time table.
///
/// Ordered by canonical daily occurrence: Imsak through Isha, with Midnight
/// last (it falls after Isha on the civil day it is computed for, wrapping
/// past 00:00 at most locations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Event {
    Imsak,
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
    Midnight,
}

impl Event {
    /// All nine events in canonical order.
    pub const ALL: [Event; 9] = [
        Event::Imsak,
        Event::Fajr,
        Event::Sunrise,
        Event::Dhuhr,
        Event::Asr,
        Event::Sunset,
        Event::Maghrib,
        Event::Isha,
        Event::Midnight,
    ];

    /// Human-readable label.
    pub fn name(&self) -> &'static str {
        match self {
            Event::Imsak => "Imsak",
            Event::Fajr => "Fajr",
            Event::Sunrise => "Sunrise",
            Event::Dhuhr => "Dhuhr",
            Event::Asr => "Asr",
            Event::Sunset => "Sunset",
            Event::Maghrib => "Maghrib",
            Event::Isha => "Isha",
            Event::Midnight => "Midnight",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let mut sorted = Event::ALL;
        sorted.sort();
        assert_eq!(sorted, Event::ALL);
        assert!(Event::Fajr < Event::Sunrise);
        assert!(Event::Isha < Event::Midnight);
    }

    #[test]
    fn test_display_matches_name() {
        for event in Event::ALL {
            assert_eq!(event.to_string(), event.name());
        }
    }
}
