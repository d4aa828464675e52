//! Render descriptor types
//!
//! Everything a renderer needs to draw one frame of the main screen.

use heapless::String;

use crate::color::Rgb;

/// Number of history bars in the eCO2 graph
pub const GRAPH_BARS: usize = 24;

/// Smallest bar height
pub const MIN_BAR_HEIGHT: u8 = 1;

/// Tallest bar height
pub const MAX_BAR_HEIGHT: u8 = 100;

/// Bars at or above this height are drawn in the mid band
pub const BAR_MID_HEIGHT: u8 = 67;

/// Bars at or above this height are drawn in the high band
pub const BAR_HIGH_HEIGHT: u8 = 99;

const _: () = assert!(MIN_BAR_HEIGHT < BAR_MID_HEIGHT);
const _: () = assert!(BAR_MID_HEIGHT < BAR_HIGH_HEIGHT);
const _: () = assert!(BAR_HIGH_HEIGHT <= MAX_BAR_HEIGHT);

/// Maximum weekday label length ("Sun")
pub const WEEKDAY_LEN: usize = 3;

/// Maximum date label length ("2024/12/01")
pub const DATE_LEN: usize = 10;

/// Maximum time label length ("23:59")
pub const TIME_LEN: usize = 5;

/// Color band of a graph bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BarBand {
    /// Green
    #[default]
    Low,
    /// Yellow
    Mid,
    /// Red
    High,
}

impl BarBand {
    /// Band for a bar height
    pub const fn from_height(height: u8) -> Self {
        if height < BAR_MID_HEIGHT {
            BarBand::Low
        } else if height < BAR_HIGH_HEIGHT {
            BarBand::Mid
        } else {
            BarBand::High
        }
    }

    /// Suggested fill color
    pub const fn color(self) -> Rgb {
        match self {
            BarBand::Low => Rgb::new(0, 255, 0),
            BarBand::Mid => Rgb::new(255, 255, 0),
            BarBand::High => Rgb::new(255, 0, 0),
        }
    }
}

/// One bar of the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bar {
    /// Height in graph units (1-100)
    pub height: u8,
    /// Color band for this height
    pub band: BarBand,
}

impl Bar {
    /// Create a bar, deriving its band from the height
    pub const fn new(height: u8) -> Self {
        Self {
            height,
            band: BarBand::from_height(height),
        }
    }
}

impl Default for Bar {
    fn default() -> Self {
        Self::new(MIN_BAR_HEIGHT)
    }
}

/// Main screen contents for one tick
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderDescriptor {
    /// Background fill color
    pub background: Rgb,
    /// Fill the whole surface with `background` before drawing
    pub clear_background: bool,
    /// History bars, oldest first
    pub bars: [Bar; GRAPH_BARS],
    /// Bar for the reading taken this tick
    pub live_bar: Bar,
    /// Backlight brightness (0-255)
    pub brightness: u8,
}

/// Latest numeric readings shown in the header block
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readouts {
    /// eCO2 (ppm)
    pub eco2_ppm: u16,
    /// TVOC (ppb)
    pub tvoc_ppb: u16,
    /// Temperature (°C)
    pub temperature_c: f32,
    /// Relative humidity (%)
    pub humidity_pct: f32,
    /// Pressure (hPa)
    pub pressure_hpa: f32,
}

/// Header block: day of week, date, time and readouts
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Header {
    pub weekday: String<WEEKDAY_LEN>,
    pub date: String<DATE_LEN>,
    pub time: String<TIME_LEN>,
    pub readouts: Readouts,
}
