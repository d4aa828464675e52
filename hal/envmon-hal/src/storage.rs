//! Persistent storage abstractions
//!
//! Provides a trait for key-value storage that board HALs implement on
//! their storage medium.

/// Storage keys for persisted data
///
/// Each user setting is stored under its own key so that a damaged value
/// only affects that one setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StorageKey {
    /// Display backlight level (0-5)
    BacklightLevel = 0,
    /// Quiet ("bedroom") mode flag
    QuietMode = 1,
}

impl StorageKey {
    /// Number of distinct keys
    pub const COUNT: usize = 2;

    /// Get the key as a byte value
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a key from a byte value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(StorageKey::BacklightLevel),
            1 => Some(StorageKey::QuietMode),
            _ => None,
        }
    }

    /// Human readable name, used as the record name on file-backed media
    pub fn name(self) -> &'static str {
        match self {
            StorageKey::BacklightLevel => "backlightLevel",
            StorageKey::QuietMode => "bedroomFlag",
        }
    }
}

/// Errors from storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Medium could not be read or written
    Io,
    /// Key not found
    NotFound,
    /// Buffer too small for the data
    BufferTooSmall,
    /// Data corrupted or invalid
    Corrupted,
    /// Storage is full
    Full,
}

/// Key-value storage trait
///
/// Calls are synchronous from the caller's point of view; an
/// implementation that needs to wait on the medium blocks until the
/// operation has completed.
pub trait Storage {
    /// Read a value by key into the provided buffer
    ///
    /// # Arguments
    /// * `key` - The storage key to read
    /// * `buffer` - Buffer to read data into
    ///
    /// # Returns
    /// The number of bytes read, or an error.
    fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError>;

    /// Write a value by key, replacing any previous value
    fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError>;

    /// Check if a key exists in storage
    fn exists(&mut self, key: StorageKey) -> bool {
        let mut probe = [0u8; 0];
        !matches!(self.read(key, &mut probe), Err(StorageError::NotFound))
    }

    /// Remove a value
    ///
    /// Removing a key that is not present is not an error.
    fn erase(&mut self, key: StorageKey) -> Result<(), StorageError>;
}

impl<T: Storage + ?Sized> Storage for &mut T {
    fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError> {
        (**self).read(key, buffer)
    }

    fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError> {
        (**self).write(key, data)
    }

    fn exists(&mut self, key: StorageKey) -> bool {
        (**self).exists(key)
    }

    fn erase(&mut self, key: StorageKey) -> Result<(), StorageError> {
        (**self).erase(key)
    }
}
