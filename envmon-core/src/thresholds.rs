//! Centralized thresholds and tuning constants
//!
//! Each threshold group carries `const` assertions so an inconsistent edit
//! (e.g. `CAUTION < ATTENTION`) fails the build.

use envmon_display::{GRAPH_BARS, MAX_BAR_HEIGHT, MIN_BAR_HEIGHT};

use crate::alert::AlertLevel;

// =============================================================================
// eCO2 History / Graph
// =============================================================================

/// Number of readings kept for the graph
pub const HISTORY_LEN: usize = GRAPH_BARS;

/// Reading the history is seeded with at boot (outdoor air)
pub const ECO2_BASELINE_PPM: u16 = 400;

/// eCO2 value drawn as a full-height bar; anything above is clamped
pub const GRAPH_MAX_PPM: u16 = 1500;

const _: () = assert!(ECO2_BASELINE_PPM < GRAPH_MAX_PPM);

/// Bar height for an eCO2 reading
///
/// Integer linear map of `[0, GRAPH_MAX_PPM]` onto
/// `[MIN_BAR_HEIGHT, MAX_BAR_HEIGHT]`, clamped above the domain.
pub const fn bar_height(eco2_ppm: u16) -> u8 {
    if eco2_ppm > GRAPH_MAX_PPM {
        return MAX_BAR_HEIGHT;
    }
    let span = (MAX_BAR_HEIGHT - MIN_BAR_HEIGHT) as u32;
    (eco2_ppm as u32 * span / GRAPH_MAX_PPM as u32) as u8 + MIN_BAR_HEIGHT
}

// =============================================================================
// eCO2 Alert Levels
// =============================================================================

/// Default level where the "attention" alert starts (ppm)
pub const ECO2_ATTENTION_PPM: u16 = 1000;

/// Default level where the "caution" alert starts (ppm)
pub const ECO2_CAUTION_PPM: u16 = 1500;

const _: () = assert!(ECO2_ATTENTION_PPM < ECO2_CAUTION_PPM);

/// eCO2 alert thresholds
///
/// Maps a raw reading to the level fed into the alert engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Eco2Thresholds {
    /// Readings at or above this are `Attention`
    pub attention_ppm: u16,
    /// Readings at or above this are `Caution`
    pub caution_ppm: u16,
}

impl Default for Eco2Thresholds {
    fn default() -> Self {
        Self {
            attention_ppm: ECO2_ATTENTION_PPM,
            caution_ppm: ECO2_CAUTION_PPM,
        }
    }
}

impl Eco2Thresholds {
    /// Create thresholds, returning `None` unless `attention < caution`
    pub fn new(attention_ppm: u16, caution_ppm: u16) -> Option<Self> {
        (attention_ppm < caution_ppm).then_some(Self {
            attention_ppm,
            caution_ppm,
        })
    }

    /// Alert level for a reading
    pub fn level_for(&self, eco2_ppm: u16) -> AlertLevel {
        if eco2_ppm >= self.caution_ppm {
            AlertLevel::Caution
        } else if eco2_ppm >= self.attention_ppm {
            AlertLevel::Attention
        } else {
            AlertLevel::Normal
        }
    }
}
