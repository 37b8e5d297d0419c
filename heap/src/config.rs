#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::order::Mode;

/// Settings for a heap whose ordering is chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeapConfig {
    pub mode: Mode,
    pub initial_capacity: usize,
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Min,
            initial_capacity: 0,
        }
    }
}

impl HeapConfig {
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}
