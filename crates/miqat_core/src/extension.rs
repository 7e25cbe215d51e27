//! Extension trait for `NaiveDate`.

use chrono::NaiveDate;
use miqat_types::{GeoCoordinate, PrayerTimes};

use crate::calculator::calculate_prayer_times;
use crate::context::CalculationContext;

/// Extends `NaiveDate` with prayer-time computation.
pub trait MiqatDateExt {
    /// Computes the day's table with the default context (ISNA,
    /// NightMiddle rule, no tuning).
    fn prayer_times(&self, location: GeoCoordinate, utc_offset: f64) -> PrayerTimes;

    /// Computes the day's table with a custom context.
    fn prayer_times_with(
        &self,
        location: GeoCoordinate,
        utc_offset: f64,
        ctx: &CalculationContext,
    ) -> PrayerTimes;
}

impl MiqatDateExt for NaiveDate {
    fn prayer_times(&self, location: GeoCoordinate, utc_offset: f64) -> PrayerTimes {
        calculate_prayer_times(*self, location, utc_offset, &CalculationContext::default())
    }

    fn prayer_times_with(
        &self,
        location: GeoCoordinate,
        utc_offset: f64,
        ctx: &CalculationContext,
    ) -> PrayerTimes {
        calculate_prayer_times(*self, location, utc_offset, ctx)
    }
}
