//! Measurement log trait

/// Errors from the measurement log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecordError {
    /// Medium not present or not writable
    Unavailable,
    /// Medium full
    Full,
}

/// Append-only sink for measurement records (e.g. a CSV file on SD card)
pub trait MeasurementRecorder {
    /// Append one line; `line` carries no trailing newline
    fn append(&mut self, line: &str) -> Result<(), RecordError>;
}

impl<T: MeasurementRecorder + ?Sized> MeasurementRecorder for &mut T {
    fn append(&mut self, line: &str) -> Result<(), RecordError> {
        (**self).append(line)
    }
}
