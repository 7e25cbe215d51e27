//! The prayer-time calculator.
//!
//! Orchestrates one day's table: solar noon through the equation of time,
//! each angle event through the hour-angle solver, longitude/timezone
//! conversion, high-latitude substitution, the minute-specified events, and
//! the midnight variant. The equation of time depends on the time of day it
//! is evaluated at, which in turn depends on the equation of time, so the
//! angle events are iterated a fixed two passes; that is enough for
//! sub-minute convergence.

use chrono::{NaiveDate, NaiveTime};
use miqat_astronomy::{asr_altitude, fix_hour, hour_angle, julian_day, rise_set_angle, sun_position};
use miqat_types::{GeoCoordinate, MidnightMethod, MinuteOrAngle, PrayerTimes};

use crate::context::CalculationContext;
use crate::high_latitude::{adjust_event, Direction};

/// Refinement passes over the angle events; two reach sub-minute accuracy.
const SOLAR_ITERATIONS: usize = 2;

/// One day's solar geometry: the Julian base referenced to local solar
/// midnight, plus the observer latitude.
struct SolarDay {
    jd: f64,
    latitude: f64,
}

impl SolarDay {
    /// Solar noon in solar-frame fractional hours, with the equation of
    /// time evaluated at hour `t` of this day.
    fn mid_day(&self, t: f64) -> f64 {
        let eqt = sun_position(self.jd + t / 24.0).equation_of_time;
        fix_hour(12.0 - eqt / 60.0)
    }

    /// The hour the sun reaches `altitude` degrees: before noon for
    /// `Dawn`, after noon for `Dusk`. `None` when the sun never gets
    /// there that day.
    fn altitude_time(&self, altitude: f64, t: f64, direction: Direction) -> Option<f64> {
        let sun = sun_position(self.jd + t / 24.0);
        let offset = hour_angle(self.latitude, sun.declination, altitude)?;
        let noon = self.mid_day(t);
        Some(match direction {
            Direction::Dawn => noon - offset,
            Direction::Dusk => noon + offset,
        })
    }

    /// Asr through its shadow-length altitude rather than a twilight angle.
    fn asr_time(&self, shadow_factor: f64, t: f64) -> Option<f64> {
        let sun = sun_position(self.jd + t / 24.0);
        let altitude = asr_altitude(shadow_factor, self.latitude, sun.declination);
        self.altitude_time(altitude, t, Direction::Dusk)
    }
}

/// The angle events of one refinement pass, in solar-frame hours.
///
/// Minute-specified events stay `None` here; they are derived from their
/// base event after the clock conversion.
#[derive(Debug, Clone, Copy, Default)]
struct RawTimes {
    imsak: Option<f64>,
    fajr: Option<f64>,
    sunrise: Option<f64>,
    dhuhr: Option<f64>,
    asr: Option<f64>,
    sunset: Option<f64>,
    maghrib: Option<f64>,
    isha: Option<f64>,
}

impl RawTimes {
    /// Where the next pass evaluates the sun for each event: the previous
    /// pass's result, or the day-portion seed while unresolved.
    fn point(value: Option<f64>, seed: f64) -> f64 {
        value.unwrap_or(seed)
    }
}

/// Computes the full prayer time table for one date, location, and
/// configuration.
///
/// # Arguments
/// * `date` - The Gregorian calendar date
/// * `location` - Observer coordinates; altitude feeds the sunrise/sunset
///   horizon correction
/// * `utc_offset` - Local offset from UTC in hours, DST already resolved
///   by the caller
/// * `ctx` - Method parameters, high-latitude rule, and tuning
///
/// # Returns
/// The table, always: the computation is infallible by design. Events the
/// sun geometry cannot produce (polar day or night with substitution
/// disabled) come back as `None` fields rather than errors.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use miqat_core::{calculate_prayer_times, CalculationContext};
/// use miqat_core::types::{Event, GeoCoordinate, TimeFormat};
///
/// let date = NaiveDate::from_ymd_opt(2011, 2, 9).unwrap();
/// let location = GeoCoordinate::new_unchecked(43.0, -80.0);
/// let times = calculate_prayer_times(date, location, -5.0, &CalculationContext::new());
/// assert_eq!(times.format(Event::Sunrise, TimeFormat::TwentyFourHour), "07:26");
/// ```
pub fn calculate_prayer_times(
    date: NaiveDate,
    location: GeoCoordinate,
    utc_offset: f64,
    ctx: &CalculationContext,
) -> PrayerTimes {
    let day = SolarDay {
        // Referencing the Julian base to local solar midnight makes every
        // solar-frame result come out near its clock value already.
        jd: julian_day(date) - location.lng / (15.0 * 24.0),
        latitude: location.lat,
    };
    let params = &ctx.params;
    let horizon = rise_set_angle(location.altitude);

    let mut raw = RawTimes::default();
    for _ in 0..SOLAR_ITERATIONS {
        raw = RawTimes {
            imsak: match ctx.imsak {
                MinuteOrAngle::Angle(deg) => {
                    day.altitude_time(-deg, RawTimes::point(raw.imsak, 5.0), Direction::Dawn)
                }
                MinuteOrAngle::Minutes(_) => None,
            },
            fajr: day.altitude_time(
                -params.fajr_angle,
                RawTimes::point(raw.fajr, 5.0),
                Direction::Dawn,
            ),
            sunrise: day.altitude_time(-horizon, RawTimes::point(raw.sunrise, 6.0), Direction::Dawn),
            dhuhr: Some(day.mid_day(RawTimes::point(raw.dhuhr, 12.0))),
            asr: day.asr_time(params.asr.shadow_length(), RawTimes::point(raw.asr, 13.0)),
            sunset: day.altitude_time(-horizon, RawTimes::point(raw.sunset, 18.0), Direction::Dusk),
            maghrib: match params.maghrib {
                MinuteOrAngle::Angle(deg) => {
                    day.altitude_time(-deg, RawTimes::point(raw.maghrib, 18.0), Direction::Dusk)
                }
                MinuteOrAngle::Minutes(_) => None,
            },
            isha: match params.isha {
                MinuteOrAngle::Angle(deg) => {
                    day.altitude_time(-deg, RawTimes::point(raw.isha, 18.0), Direction::Dusk)
                }
                MinuteOrAngle::Minutes(_) => None,
            },
        };
    }

    // Solar frame to civil clock.
    let shift = utc_offset - location.lng / 15.0;
    let to_civil = |t: Option<f64>| t.map(|t| t + shift);
    let mut imsak = to_civil(raw.imsak);
    let mut fajr = to_civil(raw.fajr);
    let sunrise = to_civil(raw.sunrise);
    let dhuhr = to_civil(raw.dhuhr);
    let asr = to_civil(raw.asr);
    let sunset = to_civil(raw.sunset);
    let mut maghrib = to_civil(raw.maghrib);
    let mut isha = to_civil(raw.isha);

    // High-latitude substitution, anchored on the day/night boundaries.
    // With either boundary itself unresolved (polar day or night) there is
    // no night length to apportion, and the raw values stand.
    if let (Some(rise), Some(set)) = (sunrise, sunset) {
        let night = fix_hour(rise - set);
        let rule = ctx.high_latitude_rule;
        if let MinuteOrAngle::Angle(deg) = ctx.imsak {
            imsak = adjust_event(imsak, rise, deg, night, Direction::Dawn, rule);
        }
        fajr = adjust_event(fajr, rise, params.fajr_angle, night, Direction::Dawn, rule);
        if let MinuteOrAngle::Angle(deg) = params.isha {
            isha = adjust_event(isha, set, deg, night, Direction::Dusk, rule);
        }
        if let MinuteOrAngle::Angle(deg) = params.maghrib {
            maghrib = adjust_event(maghrib, set, deg, night, Direction::Dusk, rule);
        }
    }

    // Minute-specified events hang off their base event, never the solver.
    if let MinuteOrAngle::Minutes(minutes) = params.maghrib {
        maghrib = sunset.map(|t| t + minutes / 60.0);
    }
    if let MinuteOrAngle::Minutes(minutes) = params.isha {
        isha = maghrib.map(|t| t + minutes / 60.0);
    }
    if let MinuteOrAngle::Minutes(minutes) = ctx.imsak {
        imsak = fajr.map(|t| t - minutes / 60.0);
    }
    let dhuhr = dhuhr.map(|t| t + ctx.dhuhr_minutes / 60.0);

    let midnight = match params.midnight {
        MidnightMethod::Standard => sunset
            .zip(sunrise)
            .map(|(set, rise)| set + fix_hour(rise - set) / 2.0),
        MidnightMethod::Jafari => sunset
            .zip(fajr)
            .map(|(set, dawn)| set + fix_hour(dawn - set) / 2.0),
    };

    let offsets = &ctx.offsets;
    PrayerTimes {
        imsak: to_clock(imsak, offsets.imsak),
        fajr: to_clock(fajr, offsets.fajr),
        sunrise: to_clock(sunrise, offsets.sunrise),
        dhuhr: to_clock(dhuhr, offsets.dhuhr),
        asr: to_clock(asr, offsets.asr),
        sunset: to_clock(sunset, offsets.sunset),
        maghrib: to_clock(maghrib, offsets.maghrib),
        isha: to_clock(isha, offsets.isha),
        midnight: to_clock(midnight, offsets.midnight),
    }
}

/// Applies the event's tuning offset, reduces modulo 24 hours, and stores
/// to the nearest second. Non-finite values become unresolved.
fn to_clock(time: Option<f64>, offset_minutes: f64) -> Option<NaiveTime> {
    let t = time? + offset_minutes / 60.0;
    if !t.is_finite() {
        return None;
    }
    let seconds = (fix_hour(t) * 3600.0).round() as u32 % 86_400;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
}
