//! Settings persistence
//!
//! Loads settings on boot and writes every change straight through to
//! storage.

use envmon_hal::{Storage, StorageError, StorageKey};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::settings::{Settings, StoredField};

/// Maximum serialized size of one stored field
const MAX_FIELD_SIZE: usize = 16;

/// Settings persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Storage read failed
    Read(StorageError),
    /// Storage write failed
    Write(StorageError),
    /// Deserialization failed
    Deserialize,
    /// Serialization failed
    Serialize,
    /// Record version does not match
    InvalidFormat,
}

/// Write-through settings store
///
/// Owns the storage handle and the in-memory [`Settings`]. Every mutator
/// updates memory first and then persists; a failed write is reported but
/// the new value stays in effect.
pub struct ConfigStore<S: Storage> {
    storage: S,
    settings: Settings,
}

impl<S: Storage> ConfigStore<S> {
    /// Create a store holding default settings
    ///
    /// Nothing is read until [`load`](Self::load) is called.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            settings: Settings::default(),
        }
    }

    /// Load settings from storage
    ///
    /// Never fails: each field that is missing or unreadable falls back to
    /// its default, independently of the other.
    pub fn load(&mut self) -> Settings {
        let defaults = Settings::default();

        match self.load_field::<u8>(StorageKey::BacklightLevel) {
            Ok(level) => self.settings.set_backlight_level(level),
            Err(e) => {
                log_fallback(StorageKey::BacklightLevel, e);
                self.settings
                    .set_backlight_level(defaults.backlight_level());
            }
        }

        match self.load_field::<bool>(StorageKey::QuietMode) {
            Ok(quiet) => self.settings.set_quiet_mode(quiet),
            Err(e) => {
                log_fallback(StorageKey::QuietMode, e);
                self.settings.set_quiet_mode(defaults.quiet_mode());
            }
        }

        info!(
            "Settings loaded: backlight={} quiet={}",
            self.settings.backlight_level(),
            self.settings.quiet_mode()
        );
        self.settings
    }

    /// Inner function that returns errors
    fn load_field<T: DeserializeOwned>(&mut self, key: StorageKey) -> Result<T, ConfigError> {
        let mut buffer = [0u8; MAX_FIELD_SIZE];
        let len = self
            .storage
            .read(key, &mut buffer)
            .map_err(ConfigError::Read)?;

        let field: StoredField<T> =
            postcard::from_bytes(&buffer[..len]).map_err(|_| ConfigError::Deserialize)?;

        if !field.is_valid() {
            return Err(ConfigError::InvalidFormat);
        }

        Ok(field.value)
    }

    /// Persist all settings
    ///
    /// Both fields are attempted; the first error is returned.
    pub fn save(&mut self) -> Result<(), ConfigError> {
        let level = self.save_field(StorageKey::BacklightLevel, self.settings.backlight_level());
        let quiet = self.save_field(StorageKey::QuietMode, self.settings.quiet_mode());

        match level.and(quiet) {
            Ok(()) => {
                debug!(
                    "Settings saved: backlight={} quiet={}",
                    self.settings.backlight_level(),
                    self.settings.quiet_mode()
                );
                Ok(())
            }
            Err(e) => {
                warn!("Failed to save settings: {:?}", e);
                Err(e)
            }
        }
    }

    fn save_field<T: Serialize>(&mut self, key: StorageKey, value: T) -> Result<(), ConfigError> {
        let mut buffer = [0u8; MAX_FIELD_SIZE];
        let bytes = postcard::to_slice(&StoredField::new(value), &mut buffer)
            .map_err(|_| ConfigError::Serialize)?;

        self.storage.write(key, bytes).map_err(ConfigError::Write)
    }

    /// Change the backlight level by `delta` (clamped) and persist
    ///
    /// The write happens even when the level was already at a bound.
    pub fn adjust_backlight(&mut self, delta: i32) -> Result<(), ConfigError> {
        self.settings.adjust_backlight(delta);
        self.save()
    }

    /// Flip quiet mode and persist
    pub fn toggle_quiet_mode(&mut self) -> Result<(), ConfigError> {
        self.settings.toggle_quiet_mode();
        self.save()
    }

    /// Current settings
    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn backlight_level(&self) -> u8 {
        self.settings.backlight_level()
    }

    pub fn quiet_mode(&self) -> bool {
        self.settings.quiet_mode()
    }

    /// Effective screen brightness
    pub fn brightness(&self) -> u8 {
        self.settings.brightness()
    }

    /// Access the underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable access to the underlying storage
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Consume the store and return the storage
    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn log_fallback(key: StorageKey, error: ConfigError) {
    match error {
        ConfigError::Read(StorageError::NotFound) => {
            debug!("No stored {}, using default", key.name());
        }
        e => {
            warn!("Failed to load {}: {:?}, using default", key.name(), e);
        }
    }
}
