//! Header block composition
//!
//! Formats the clock and the latest readings for the top of the screen.

use core::fmt::Write;

use envmon_display::{Header, Readouts, DATE_LEN, TIME_LEN, WEEKDAY_LEN};
use heapless::String;

use crate::traits::{DateTime, SensorSample};

/// Shown when the clock has not been set
const NO_WEEKDAY: &str = "---";
const NO_DATE: &str = "----/--/--";
const NO_TIME: &str = "--:--";

const _: () = assert!(NO_WEEKDAY.len() <= WEEKDAY_LEN);
const _: () = assert!(NO_DATE.len() <= DATE_LEN);
const _: () = assert!(NO_TIME.len() <= TIME_LEN);

/// Build the header for this tick
pub fn compose(now: Option<DateTime>, sample: &SensorSample) -> Header {
    let mut header = Header {
        readouts: readouts(sample),
        ..Header::default()
    };

    match now {
        Some(now) => {
            fill(
                &mut header.weekday,
                format_args!("{}", now.weekday.as_str()),
                NO_WEEKDAY,
            );
            fill(
                &mut header.date,
                format_args!("{:04}/{:02}/{:02}", now.year, now.month, now.day),
                NO_DATE,
            );
            fill(
                &mut header.time,
                format_args!("{:02}:{:02}", now.hour, now.minute),
                NO_TIME,
            );
        }
        None => {
            fill(&mut header.weekday, format_args!("{}", NO_WEEKDAY), NO_WEEKDAY);
            fill(&mut header.date, format_args!("{}", NO_DATE), NO_DATE);
            fill(&mut header.time, format_args!("{}", NO_TIME), NO_TIME);
        }
    }

    header
}

/// Copy the numeric readings out of a sample
pub fn readouts(sample: &SensorSample) -> Readouts {
    Readouts {
        eco2_ppm: sample.eco2_ppm,
        tvoc_ppb: sample.tvoc_ppb,
        temperature_c: sample.temperature_c,
        humidity_pct: sample.humidity_pct,
        pressure_hpa: sample.pressure_hpa,
    }
}

/// Write formatted text, or the placeholder if it does not fit
///
/// Placeholders are checked against the label capacities at compile time.
fn fill<const N: usize>(out: &mut String<N>, args: core::fmt::Arguments<'_>, placeholder: &str) {
    out.clear();
    if out.write_fmt(args).is_err() {
        out.clear();
        if out.push_str(placeholder).is_err() {
            warn!("Header placeholder does not fit");
        }
    }
}
