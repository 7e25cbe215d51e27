use crate::event::Event;
use crate::format::{format_time, TimeFormat};
use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The computed prayer time table for one date and location.
///
/// Each field holds the local clock time of its event, or `None` when the
/// event could not be resolved for that day (polar day or polar night with
/// the substitution rule disabled). Values are immutable once computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTimes {
    pub imsak: Option<NaiveTime>,
    pub fajr: Option<NaiveTime>,
    pub sunrise: Option<NaiveTime>,
    pub dhuhr: Option<NaiveTime>,
    pub asr: Option<NaiveTime>,
    pub sunset: Option<NaiveTime>,
    pub maghrib: Option<NaiveTime>,
    pub isha: Option<NaiveTime>,
    pub midnight: Option<NaiveTime>,
}

impl PrayerTimes {
    /// The time of a single event.
    pub fn get(&self, event: Event) -> Option<NaiveTime> {
        match event {
            Event::Imsak => self.imsak,
            Event::Fajr => self.fajr,
            Event::Sunrise => self.sunrise,
            Event::Dhuhr => self.dhuhr,
            Event::Asr => self.asr,
            Event::Sunset => self.sunset,
            Event::Maghrib => self.maghrib,
            Event::Isha => self.isha,
            Event::Midnight => self.midnight,
        }
    }

    /// Resolved events in canonical order.
    pub fn entries(&self) -> SmallVec<[(Event, NaiveTime); 9]> {
        Event::ALL
            .iter()
            .filter_map(|&event| self.get(event).map(|time| (event, time)))
            .collect()
    }

    /// All nine events rendered with [`format_time`], unresolved ones as
    /// the invalid-time marker.
    pub fn formatted_entries(&self, format: TimeFormat) -> SmallVec<[(Event, String); 9]> {
        Event::ALL
            .iter()
            .map(|&event| (event, format_time(self.get(event), format)))
            .collect()
    }

    /// One event rendered with [`format_time`].
    pub fn format(&self, event: Event, format: TimeFormat) -> String {
        format_time(self.get(event), format)
    }

    /// The first resolved event strictly after `now` on this civil day,
    /// by clock time. Returns `None` once the day's last event has passed;
    /// wrap-around to the next day is the caller's concern.
    pub fn next_event(&self, now: NaiveTime) -> Option<(Event, NaiveTime)> {
        self.entries()
            .into_iter()
            .filter(|(_, time)| *time > now)
            .min_by_key(|(_, time)| *time)
    }

    /// Signed time from `now` until an event; negative once it has passed,
    /// `None` when the event is unresolved.
    pub fn time_until(&self, event: Event, now: NaiveTime) -> Option<Duration> {
        self.get(event).map(|time| time.signed_duration_since(now))
    }
}
