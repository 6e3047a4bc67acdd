//! Boost-ready edge flag
//!
//! The boost converter raises an edge when its output reaches regulation.
//! The interrupt handler's only job is to set this flag; it must never
//! touch the radio lines itself, because the main cycle might be mid
//! sequence. Single writer (the ISR), single reader (the cycle), so a bare
//! atomic is the whole mechanism.

use core::sync::atomic::{AtomicBool, Ordering};

/// Latched boost-converter regulation-reached notification.
pub struct BoostReady {
    flag: AtomicBool,
}

impl BoostReady {
    /// Create an unset flag, suitable for a `static`.
    pub const fn new() -> Self {
        Self {
            flag: AtomicBool::new(false),
        }
    }

    /// Latch the edge. Safe to call from interrupt context.
    pub fn signal(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Consume the latched edge, clearing it.
    pub fn take(&self) -> bool {
        self.flag.swap(false, Ordering::AcqRel)
    }

    /// Peek without consuming.
    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

impl Default for BoostReady {
    fn default() -> Self {
        Self::new()
    }
}
