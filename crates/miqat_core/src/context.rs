//! Run configuration for the calculator.

use miqat_methods::{CalculationMethod, MethodParams};
use miqat_types::{AsrFactor, Event, HighLatitudeRule, MidnightMethod, MinuteOrAngle};
use serde::{Deserialize, Serialize};

/// Final per-event nudges in minutes, applied after everything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeOffsets {
    pub imsak: f64,
    pub fajr: f64,
    pub sunrise: f64,
    pub dhuhr: f64,
    pub asr: f64,
    pub sunset: f64,
    pub maghrib: f64,
    pub isha: f64,
    pub midnight: f64,
}

impl TimeOffsets {
    /// The offset for a single event, in minutes.
    pub fn get(&self, event: Event) -> f64 {
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

    /// Returns the offsets with one event's value replaced.
    pub fn with(mut self, event: Event, minutes: f64) -> Self {
        match event {
            Event::Imsak => self.imsak = minutes,
            Event::Fajr => self.fajr = minutes,
            Event::Sunrise => self.sunrise = minutes,
            Event::Dhuhr => self.dhuhr = minutes,
            Event::Asr => self.asr = minutes,
            Event::Sunset => self.sunset = minutes,
            Event::Maghrib => self.maghrib = minutes,
            Event::Isha => self.isha = minutes,
            Event::Midnight => self.midnight = minutes,
        }
        self
    }
}

/// Everything the calculator needs besides date and location.
///
/// Selecting a method loads its registry parameters; individual parameters
/// can then be overridden, so select the method *before* overriding.
///
/// # Example
/// ```
/// use miqat_core::CalculationContext;
/// use miqat_core::methods::CalculationMethod;
/// use miqat_core::types::{AsrFactor, HighLatitudeRule};
///
/// let ctx = CalculationContext::new()
///     .method(CalculationMethod::Mwl)
///     .asr(AsrFactor::Hanafi)
///     .high_latitude_rule(HighLatitudeRule::AngleBased);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationContext {
    /// The selected convention.
    pub method: CalculationMethod,
    /// The convention's parameters, possibly overridden.
    pub params: MethodParams,
    /// Imsak: minutes before Fajr, or its own twilight angle.
    pub imsak: MinuteOrAngle,
    /// Safety margin added to solar noon for Dhuhr, in minutes.
    pub dhuhr_minutes: f64,
    /// Substitution policy when twilight angles have no solution.
    pub high_latitude_rule: HighLatitudeRule,
    /// Final per-event tuning, in minutes.
    pub offsets: TimeOffsets,
}

impl Default for CalculationContext {
    fn default() -> Self {
        let method = CalculationMethod::default();
        Self {
            method,
            params: method.parameters(),
            imsak: MinuteOrAngle::Minutes(10.0),
            dhuhr_minutes: 0.0,
            high_latitude_rule: HighLatitudeRule::default(),
            offsets: TimeOffsets::default(),
        }
    }
}

impl CalculationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a convention and loads its registry parameters, discarding
    /// any earlier overrides.
    pub fn method(mut self, method: CalculationMethod) -> Self {
        self.method = method;
        self.params = method.parameters();
        self
    }

    /// Overrides the Fajr twilight angle.
    pub fn fajr_angle(mut self, degrees: f64) -> Self {
        self.params.fajr_angle = degrees;
        self
    }

    /// Overrides Maghrib.
    pub fn maghrib(mut self, maghrib: MinuteOrAngle) -> Self {
        self.params.maghrib = maghrib;
        self
    }

    /// Overrides Isha.
    pub fn isha(mut self, isha: MinuteOrAngle) -> Self {
        self.params.isha = isha;
        self
    }

    /// Overrides the Asr shadow factor.
    pub fn asr(mut self, asr: AsrFactor) -> Self {
        self.params.asr = asr;
        self
    }

    /// Overrides the midnight variant.
    pub fn midnight(mut self, midnight: MidnightMethod) -> Self {
        self.params.midnight = midnight;
        self
    }

    /// Sets the Imsak specification.
    pub fn imsak(mut self, imsak: MinuteOrAngle) -> Self {
        self.imsak = imsak;
        self
    }

    /// Sets the Dhuhr safety margin in minutes.
    pub fn dhuhr_minutes(mut self, minutes: f64) -> Self {
        self.dhuhr_minutes = minutes;
        self
    }

    /// Sets the high-latitude substitution policy.
    pub fn high_latitude_rule(mut self, rule: HighLatitudeRule) -> Self {
        self.high_latitude_rule = rule;
        self
    }

    /// Replaces all tuning offsets.
    pub fn offsets(mut self, offsets: TimeOffsets) -> Self {
        self.offsets = offsets;
        self
    }

    /// Sets the tuning offset of a single event, in minutes.
    pub fn offset(mut self, event: Event, minutes: f64) -> Self {
        self.offsets = self.offsets.with(event, minutes);
        self
    }
}
