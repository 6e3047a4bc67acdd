//! Persistent beacon counter cell
//!
//! The counter lives in RTC fast RAM marked persistent, which survives the
//! brownout resets this node goes through constantly. A magic byte guards
//! against reading garbage after a true deep-discharge restart, where the
//! RAM content is undefined; in that case the counter re-seeds at zero.
//! The value and magic are single-byte writes, so a reboot between the two
//! stores can at worst replay the previous committed value, never tear it.

use crate::storage::CounterStore;
use esp_hal::ram;

const COUNTER_MAGIC: u8 = 0xB5;

/// [magic, value]
#[ram(rtc_fast, persistent)]
static mut COUNTER_CELL: [u8; 2] = [0; 2];

/// Sole owner of the persistent counter cell.
pub struct RtcCounterStore {
    _private: (),
}

impl RtcCounterStore {
    /// Claim the cell. Call once during bring-up, before the first build.
    pub fn take() -> Self {
        Self { _private: () }
    }
}

impl CounterStore for RtcCounterStore {
    fn load(&self) -> u8 {
        // Single owner, single thread of control
        let cell = unsafe { &*core::ptr::addr_of!(COUNTER_CELL) };
        if cell[0] == COUNTER_MAGIC {
            cell[1]
        } else {
            log::info!("counter cell uninitialised, seeding at 0");
            0
        }
    }

    fn commit(&mut self, value: u8) {
        let cell = unsafe { &mut *core::ptr::addr_of_mut!(COUNTER_CELL) };
        cell[1] = value;
        cell[0] = COUNTER_MAGIC;
    }
}
