//! User settings
//!
//! The two values the user can change from the device buttons. Settings
//! are persisted field by field as postcard-encoded [`StoredField`]
//! records.

use serde::{Deserialize, Serialize};

/// Lowest backlight level
pub const MIN_BACKLIGHT_LEVEL: u8 = 0;

/// Highest backlight level
pub const MAX_BACKLIGHT_LEVEL: u8 = 5;

/// Backlight level used when nothing valid is stored (midpoint)
pub const DEFAULT_BACKLIGHT_LEVEL: u8 = 2;

/// Brightness forced while quiet mode is on
pub const QUIET_BRIGHTNESS: u8 = 5;

/// Brightness step per backlight level
const BRIGHTNESS_STEP: u8 = 50;

const _: () = assert!(DEFAULT_BACKLIGHT_LEVEL <= MAX_BACKLIGHT_LEVEL);
const _: () = assert!(
    (BRIGHTNESS_STEP as u32) * (MAX_BACKLIGHT_LEVEL as u32) + (QUIET_BRIGHTNESS as u32) <= 255
);

/// Current on-media record version
pub const SETTINGS_VERSION: u8 = 1;

/// Screen brightness for a backlight level
///
/// `50 * level + 5`, giving 5, 55, 105, 155, 205, 255 for levels 0-5.
/// Levels above the maximum are treated as the maximum.
pub const fn brightness_for(level: u8) -> u8 {
    let level = if level > MAX_BACKLIGHT_LEVEL {
        MAX_BACKLIGHT_LEVEL
    } else {
        level
    };
    BRIGHTNESS_STEP * level + QUIET_BRIGHTNESS
}

/// Persisted user settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Backlight level, always within [`MIN_BACKLIGHT_LEVEL`, `MAX_BACKLIGHT_LEVEL`]
    backlight_level: u8,
    /// Quiet ("bedroom") mode: neutral background, minimum brightness
    quiet_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backlight_level: DEFAULT_BACKLIGHT_LEVEL,
            quiet_mode: false,
        }
    }
}

impl Settings {
    /// Create settings, clamping the backlight level into range
    pub fn new(backlight_level: u8, quiet_mode: bool) -> Self {
        Self {
            backlight_level: backlight_level.clamp(MIN_BACKLIGHT_LEVEL, MAX_BACKLIGHT_LEVEL),
            quiet_mode,
        }
    }

    pub fn backlight_level(&self) -> u8 {
        self.backlight_level
    }

    pub fn quiet_mode(&self) -> bool {
        self.quiet_mode
    }

    /// Add `delta` to the backlight level and clamp
    pub fn adjust_backlight(&mut self, delta: i32) {
        let level = (self.backlight_level as i32)
            .saturating_add(delta)
            .clamp(MIN_BACKLIGHT_LEVEL as i32, MAX_BACKLIGHT_LEVEL as i32);
        self.backlight_level = level as u8;
    }

    pub fn toggle_quiet_mode(&mut self) {
        self.quiet_mode = !self.quiet_mode;
    }

    pub(crate) fn set_backlight_level(&mut self, level: u8) {
        self.backlight_level = level.clamp(MIN_BACKLIGHT_LEVEL, MAX_BACKLIGHT_LEVEL);
    }

    pub(crate) fn set_quiet_mode(&mut self, quiet_mode: bool) {
        self.quiet_mode = quiet_mode;
    }

    /// Effective screen brightness
    ///
    /// Quiet mode overrides the backlight level.
    pub fn brightness(&self) -> u8 {
        if self.quiet_mode {
            QUIET_BRIGHTNESS
        } else {
            brightness_for(self.backlight_level)
        }
    }
}

/// Versioned wrapper for one persisted setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredField<T> {
    /// Record format version
    pub version: u8,
    /// The setting value
    pub value: T,
}

impl<T> StoredField<T> {
    /// Wrap a value with the current version
    pub const fn new(value: T) -> Self {
        Self {
            version: SETTINGS_VERSION,
            value,
        }
    }

    /// Check if the record was written by a compatible version
    pub fn is_valid(&self) -> bool {
        self.version == SETTINGS_VERSION
    }
}
