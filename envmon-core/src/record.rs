//! Measurement log records
//!
//! One CSV line per tick:
//! `month/day,HH:MM,eco2,tvoc,temperature,humidity,pressure`.

use core::fmt::Write;

use heapless::String;

use crate::traits::{DateTime, SensorSample};

/// Maximum record length
pub const RECORD_LEN: usize = 96;

/// A timestamped measurement ready to be logged
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementRecord {
    pub time: Option<DateTime>,
    pub sample: SensorSample,
}

impl MeasurementRecord {
    pub fn new(time: Option<DateTime>, sample: SensorSample) -> Self {
        Self { time, sample }
    }

    /// Render the CSV line
    ///
    /// Returns `None` if the line does not fit in [`RECORD_LEN`] (only
    /// possible with absurd float readings).
    pub fn line(&self) -> Option<String<RECORD_LEN>> {
        let mut line = String::new();
        self.write_line(&mut line).ok()?;
        Some(line)
    }

    fn write_line(&self, out: &mut String<RECORD_LEN>) -> core::fmt::Result {
        match self.time {
            Some(t) => write!(out, "{}/{},{:02}:{:02}", t.month, t.day, t.hour, t.minute)?,
            None => out.write_str("-/-,--:--")?,
        }
        let s = &self.sample;
        write!(
            out,
            ",{},{},{:.2},{:.2},{:.2}",
            s.eco2_ppm, s.tvoc_ppb, s.temperature_c, s.humidity_pct, s.pressure_hpa
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Weekday;

    fn sample() -> SensorSample {
        SensorSample {
            temperature_c: 24.5,
            humidity_pct: 41.25,
            pressure_hpa: 1013.0,
            eco2_ppm: 612,
            tvoc_ppb: 37,
        }
    }

    #[test]
    fn test_line_format() {
        let record = MeasurementRecord::new(
            Some(DateTime {
                year: 2024,
                month: 12,
                day: 1,
                hour: 0,
                minute: 7,
                second: 0,
                weekday: Weekday::Sunday,
            }),
            sample(),
        );
        let line = record.line().unwrap();
        assert_eq!(line.as_str(), "12/1,00:07,612,37,24.50,41.25,1013.00");
    }

    #[test]
    fn test_line_without_clock() {
        let line = MeasurementRecord::new(None, sample()).line().unwrap();
        assert!(line.starts_with("-/-,--:--,612,"));
    }

    #[test]
    fn test_absurd_value_does_not_fit() {
        let mut s = sample();
        s.temperature_c = f32::MAX;
        s.humidity_pct = f32::MAX;
        s.pressure_hpa = f32::MAX;
        assert!(MeasurementRecord::new(None, s).line().is_none());
    }
}
