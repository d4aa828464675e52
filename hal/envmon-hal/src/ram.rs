//! RAM-backed storage
//!
//! Volatile [`Storage`] implementation for host builds, simulators and
//! boards without a settings medium. Values are lost on reset.

use heapless::Vec;

use crate::storage::{Storage, StorageError, StorageKey};

/// Maximum value size per key
pub const MAX_VALUE_LEN: usize = 32;

/// Volatile key-value store with one fixed slot per [`StorageKey`]
#[derive(Debug, Clone, Default)]
pub struct RamStorage {
    slots: [Option<Vec<u8, MAX_VALUE_LEN>>; StorageKey::COUNT],
    /// Number of successful writes since creation
    writes: u32,
}

impl RamStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful writes since creation
    pub fn write_count(&self) -> u32 {
        self.writes
    }

    /// Raw stored bytes for a key, if present
    pub fn raw(&self, key: StorageKey) -> Option<&[u8]> {
        self.slots[key.as_u8() as usize].as_deref()
    }
}

impl Storage for RamStorage {
    fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError> {
        let value = self.slots[key.as_u8() as usize]
            .as_ref()
            .ok_or(StorageError::NotFound)?;
        if buffer.len() < value.len() {
            return Err(StorageError::BufferTooSmall);
        }
        buffer[..value.len()].copy_from_slice(value);
        Ok(value.len())
    }

    fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError> {
        let value = Vec::from_slice(data).map_err(|_| StorageError::Full)?;
        self.slots[key.as_u8() as usize] = Some(value);
        self.writes = self.writes.wrapping_add(1);
        Ok(())
    }

    fn exists(&mut self, key: StorageKey) -> bool {
        self.slots[key.as_u8() as usize].is_some()
    }

    fn erase(&mut self, key: StorageKey) -> Result<(), StorageError> {
        self.slots[key.as_u8() as usize] = None;
        Ok(())
    }
}
