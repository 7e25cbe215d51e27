use chrono::{Duration, NaiveDate};
use miqat::prelude::*;
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1900-01-01 through ~2100.
    (0i64..73_000).prop_map(|days| {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(days)
    })
}

fn any_method() -> impl Strategy<Value = CalculationMethod> {
    (0usize..CalculationMethod::ALL.len()).prop_map(|i| CalculationMethod::ALL[i])
}

fn any_rule() -> impl Strategy<Value = HighLatitudeRule> {
    (0usize..4).prop_map(|i| {
        [
            HighLatitudeRule::None,
            HighLatitudeRule::NightMiddle,
            HighLatitudeRule::OneSeventh,
            HighLatitudeRule::AngleBased,
        ][i]
    })
}

proptest! {
    /// The computation never panics anywhere in the documented input
    /// domain, poles nearly included.
    #[test]
    fn no_panic_full_domain(
        date in any_date(),
        lat in -88.0f64..88.0,
        lng in -180.0f64..180.0,
        tz in -12.0f64..14.0,
        method in any_method(),
        rule in any_rule(),
    ) {
        let ctx = CalculationContext::new().method(method).high_latitude_rule(rule);
        let location = GeoCoordinate::new_unchecked(lat, lng);
        let _ = calculate_prayer_times(date, location, tz, &ctx);
    }

    /// Identical inputs produce identical tables: no hidden state, no
    /// randomness.
    #[test]
    fn idempotence(
        date in any_date(),
        lat in -88.0f64..88.0,
        lng in -180.0f64..180.0,
        method in any_method(),
        rule in any_rule(),
    ) {
        let ctx = CalculationContext::new().method(method).high_latitude_rule(rule);
        let location = GeoCoordinate::new_unchecked(lat, lng);
        let first = calculate_prayer_times(date, location, 3.0, &ctx);
        let second = calculate_prayer_times(date, location, 3.0, &ctx);
        prop_assert_eq!(first, second);
    }

    /// At |latitude| <= 45 with a realistic UTC offset, the raw solutions
    /// are defined and ordered without any substitution.
    #[test]
    fn ordering_holds_at_mid_latitudes(
        date in any_date(),
        lat in -45.0f64..=45.0,
        lng in -180.0f64..180.0,
        method in any_method(),
    ) {
        // An offset near lng/15 keeps every event inside one civil day.
        let tz = (lng / 15.0).round();
        let ctx = CalculationContext::new()
            .method(method)
            .high_latitude_rule(HighLatitudeRule::None);
        let location = GeoCoordinate::new_unchecked(lat, lng);
        let times = calculate_prayer_times(date, location, tz, &ctx);

        let fajr = times.fajr.expect("fajr");
        let sunrise = times.sunrise.expect("sunrise");
        let dhuhr = times.dhuhr.expect("dhuhr");
        let asr = times.asr.expect("asr");
        let sunset = times.sunset.expect("sunset");
        let maghrib = times.maghrib.expect("maghrib");
        let isha = times.isha.expect("isha");
        let midnight = times.midnight.expect("midnight");

        prop_assert!(fajr < sunrise);
        prop_assert!(sunrise < dhuhr);
        prop_assert!(dhuhr < asr);
        prop_assert!(asr < sunset);
        prop_assert!(sunset <= maghrib);
        prop_assert!(maghrib < isha);
        prop_assert!(midnight > sunset || midnight < fajr);
    }

    /// Dhuhr, Sunrise, and Sunset are bit-identical across every method.
    #[test]
    fn solar_events_method_invariant(
        date in any_date(),
        lat in -60.0f64..=60.0,
        lng in -180.0f64..180.0,
        method in any_method(),
    ) {
        let location = GeoCoordinate::new_unchecked(lat, lng);
        let tz = (lng / 15.0).round();
        let reference = calculate_prayer_times(
            date, location, tz, &CalculationContext::new(),
        );
        let other = calculate_prayer_times(
            date, location, tz, &CalculationContext::new().method(method),
        );
        prop_assert_eq!(other.dhuhr, reference.dhuhr);
        prop_assert_eq!(other.sunrise, reference.sunrise);
        prop_assert_eq!(other.sunset, reference.sunset);
    }

    /// Makkah's fixed-minute Isha sits exactly 90 minutes past Maghrib,
    /// wherever both exist.
    #[test]
    fn fixed_minutes_round_trip(
        date in any_date(),
        lat in -55.0f64..=55.0,
        lng in -180.0f64..180.0,
    ) {
        let ctx = CalculationContext::new().method(CalculationMethod::Makkah);
        let location = GeoCoordinate::new_unchecked(lat, lng);
        let times = calculate_prayer_times(date, location, (lng / 15.0).round(), &ctx);

        if let (Some(maghrib), Some(isha)) = (times.maghrib, times.isha) {
            let gap = isha.signed_duration_since(maghrib).num_seconds();
            // Storage rounds each time to the nearest second independently.
            prop_assert!((gap - 5400).abs() <= 1, "gap was {}s", gap);
        }
    }
}
