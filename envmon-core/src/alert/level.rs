//! Alert levels and tones

use envmon_display::Rgb;

/// eCO2 alert level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertLevel {
    /// Air is fine; indicator off
    #[default]
    Normal,
    /// Highest level: ventilate now
    Caution,
    /// Elevated: ventilation recommended
    Attention,
}

impl AlertLevel {
    /// Indicator color for this level
    pub const fn indicator_color(self) -> Rgb {
        match self {
            AlertLevel::Normal => Rgb::BLACK,
            AlertLevel::Caution => Rgb::new(255, 69, 0),
            AlertLevel::Attention => Rgb::new(255, 215, 0),
        }
    }

    /// Indicator brightness for this level
    pub const fn indicator_brightness(self) -> u8 {
        match self {
            AlertLevel::Normal => 0,
            AlertLevel::Caution => 50,
            AlertLevel::Attention => 25,
        }
    }

    pub fn is_normal(self) -> bool {
        matches!(self, AlertLevel::Normal)
    }
}

/// One-shot alert sounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertTone {
    /// Played on entry into `Caution`
    Caution,
    /// Played on entry into `Attention`
    Attention,
}

impl AlertTone {
    /// Audio clip played for this tone
    pub fn clip(self) -> &'static str {
        match self {
            AlertTone::Caution => "/1500ppm.mp3",
            AlertTone::Attention => "/1000ppm.mp3",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AlertTone::Caution => "caution",
            AlertTone::Attention => "attention",
        }
    }
}
