//! Prints today's prayer times for Toronto and the next upcoming event.
//!
//! Run with: `cargo run --example quickstart`

use anyhow::Result;
use chrono::Local;
use miqat::prelude::*;

fn main() -> Result<()> {
    // The embedding application supplies these: a location utility for the
    // coordinates, the system clock for date and UTC offset.
    let location = GeoCoordinate::new(43.6532, -79.3832)?.with_altitude(76.0);
    let method: CalculationMethod = "ISNA".parse()?;
    let ctx = CalculationContext::new()
        .method(method)
        .high_latitude_rule("NightMiddle".parse()?);

    let now = Local::now();
    let date = now.date_naive();
    let utc_offset = -5.0; // Eastern Standard Time

    let times = calculate_prayer_times(date, location, utc_offset, &ctx);

    println!("{} — {}", date.format("%A, %d %B %Y"), method.name());
    println!("{}", location);
    for (event, time) in times.formatted_entries(TimeFormat::TwentyFourHour) {
        println!("  {:<9} {}", event.name(), time);
    }

    if let Some((event, at)) = times.next_event(now.time()) {
        let remaining = at.signed_duration_since(now.time());
        println!(
            "Next: {} at {} (in {} min)",
            event,
            at.format("%H:%M"),
            remaining.num_minutes()
        );
    }

    Ok(())
}
