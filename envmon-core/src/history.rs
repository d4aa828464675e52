//! eCO2 history ring buffer
//!
//! Holds the readings shown as the bar graph. The buffer is seeded with a
//! neutral baseline so it is always full and the graph never has gaps.

use crate::thresholds::{ECO2_BASELINE_PPM, HISTORY_LEN};

/// Fixed-size FIFO of recent eCO2 readings (ppm)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eco2History {
    buf: [u16; HISTORY_LEN],
    /// Slot the next push overwrites; also the oldest slot
    idx: usize,
}

impl Default for Eco2History {
    fn default() -> Self {
        Self::new()
    }
}

impl Eco2History {
    /// Create a buffer filled with the baseline reading
    pub fn new() -> Self {
        Self::filled(ECO2_BASELINE_PPM)
    }

    /// Create a buffer with every slot set to `value`
    pub fn filled(value: u16) -> Self {
        Self {
            buf: [value; HISTORY_LEN],
            idx: 0,
        }
    }

    /// Push a new reading, evicting the oldest
    pub fn push(&mut self, value: u16) {
        self.buf[self.idx] = value;
        self.idx = (self.idx + 1) % HISTORY_LEN;
    }

    /// Always [`HISTORY_LEN`]
    pub const fn len(&self) -> usize {
        HISTORY_LEN
    }

    /// Never empty
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterate readings oldest → newest
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        (0..HISTORY_LEN).map(move |i| self.buf[(self.idx + i) % HISTORY_LEN])
    }

    /// Copy of the readings, oldest first
    pub fn snapshot(&self) -> [u16; HISTORY_LEN] {
        core::array::from_fn(|i| self.buf[(self.idx + i) % HISTORY_LEN])
    }

    /// Most recent reading
    pub fn latest(&self) -> u16 {
        self.buf[(self.idx + HISTORY_LEN - 1) % HISTORY_LEN]
    }

    /// True if any reading is higher than the one before it
    ///
    /// This is the repaint trigger for the graph: any local rise anywhere in
    /// the window counts, not only an overall upward trend.
    pub fn is_rising(&self) -> bool {
        let snapshot = self.snapshot();
        snapshot.windows(2).any(|pair| pair[0] < pair[1])
    }
}
