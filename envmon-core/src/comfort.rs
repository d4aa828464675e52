//! Comfort classification
//!
//! Turns temperature and humidity into a discomfort index and one of six
//! comfort bands, each shown as a background color.

use envmon_display::Rgb;

/// Comfort bands, coldest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComfortBand {
    /// Index below 55
    Cold,
    /// Index 55 to below 60
    Chilly,
    /// Index 60 to below 75
    #[default]
    Comfort,
    /// Index 75 to below 80
    Warm,
    /// Index 80 to below 85
    Hot,
    /// Index 85 and above
    Boiling,
}

/// Lower bound (inclusive) of each band above `Cold`
const CHILLY_MIN: f32 = 55.0;
const COMFORT_MIN: f32 = 60.0;
const WARM_MIN: f32 = 75.0;
const HOT_MIN: f32 = 80.0;
const BOILING_MIN: f32 = 85.0;

/// Discomfort index for a temperature (°C) and relative humidity (%)
///
/// `0.81·T + 0.01·H·(0.99·T − 14.3) + 46.3`, evaluated in double precision
/// and rounded once to `f32`.
pub fn discomfort_index(temperature_c: f32, humidity_pct: f32) -> f32 {
    let t = temperature_c as f64;
    let h = humidity_pct as f64;
    (0.81 * t + 0.01 * h * (0.99 * t - 14.3) + 46.3) as f32
}

impl ComfortBand {
    /// Band for a discomfort index
    ///
    /// Intervals are half-open with the lower bound inclusive. NaN falls
    /// into `Boiling` since it fails every upper-bound check.
    pub fn from_index(index: f32) -> Self {
        if index < CHILLY_MIN {
            ComfortBand::Cold
        } else if index < COMFORT_MIN {
            ComfortBand::Chilly
        } else if index < WARM_MIN {
            ComfortBand::Comfort
        } else if index < HOT_MIN {
            ComfortBand::Warm
        } else if index < BOILING_MIN {
            ComfortBand::Hot
        } else {
            ComfortBand::Boiling
        }
    }

    /// Background color for this band
    pub const fn color(self) -> Rgb {
        match self {
            ComfortBand::Cold => Rgb::new(0, 0, 205),
            ComfortBand::Chilly => Rgb::new(135, 206, 235),
            ComfortBand::Comfort => Rgb::new(0, 0, 0),
            ComfortBand::Warm => Rgb::new(240, 230, 140),
            ComfortBand::Hot => Rgb::new(255, 140, 0),
            ComfortBand::Boiling => Rgb::new(255, 127, 80),
        }
    }
}

/// Result of one classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ComfortUpdate {
    /// Band after this classification
    pub band: ComfortBand,
    /// Band differs from the one stored before
    pub changed: bool,
}

/// Comfort classifier with a remembered band
///
/// The stored band is only replaced when the new classification differs,
/// so callers can skip redundant background repaints. The last input pair
/// is cached and an identical input is answered without recomputing.
#[derive(Debug, Clone, Default)]
pub struct ComfortClassifier {
    current: ComfortBand,
    /// Bit patterns of the last (temperature, humidity) input
    last_input: Option<(u32, u32)>,
    /// Number of index evaluations performed
    evaluations: u32,
}

impl ComfortClassifier {
    /// Create a classifier starting in `Comfort`
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a reading and store the resulting band
    pub fn classify(&mut self, temperature_c: f32, humidity_pct: f32) -> ComfortUpdate {
        let input = (temperature_c.to_bits(), humidity_pct.to_bits());
        if self.last_input == Some(input) {
            return ComfortUpdate {
                band: self.current,
                changed: false,
            };
        }

        let index = discomfort_index(temperature_c, humidity_pct);
        self.evaluations = self.evaluations.wrapping_add(1);
        self.last_input = Some(input);

        let band = ComfortBand::from_index(index);
        let changed = band != self.current;
        if changed {
            debug!("Comfort band {:?} -> {:?} (index {})", self.current, band, index);
            self.current = band;
        }

        ComfortUpdate { band, changed }
    }

    /// Currently stored band
    pub fn current(&self) -> ComfortBand {
        self.current
    }

    /// Number of discomfort index evaluations so far
    pub fn evaluations(&self) -> u32 {
        self.evaluations
    }
}
