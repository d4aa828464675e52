//! Alert indicator (LED strip and speaker) trait

use envmon_display::Rgb;

use crate::alert::AlertTone;

/// Errors from the indicator hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorError {
    /// LED driver did not accept the update
    Led,
    /// Audio clip missing or playback failed
    Audio,
}

/// Trait for the alert indicator
pub trait Indicator {
    /// Set all indicator LEDs to one color and brightness
    fn set(&mut self, color: Rgb, brightness: u8) -> Result<(), IndicatorError>;

    /// Play an alert sound
    ///
    /// Fire-and-forget; the core calls this once per level entry.
    fn play(&mut self, tone: AlertTone) -> Result<(), IndicatorError>;
}

impl<T: Indicator + ?Sized> Indicator for &mut T {
    fn set(&mut self, color: Rgb, brightness: u8) -> Result<(), IndicatorError> {
        (**self).set(color, brightness)
    }

    fn play(&mut self, tone: AlertTone) -> Result<(), IndicatorError> {
        (**self).play(tone)
    }
}
