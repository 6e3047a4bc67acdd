//! Power supervisor circuit binding
//!
//! The external supervisor exposes two digital outputs to the MCU: a
//! comparator-style "supply good" level and a "boost reached regulation"
//! edge. Deep-discharge shutdown is wired straight to the regulator enable
//! and never passes through software.

use crate::power::{BoostReady, PowerSupervisor};
use esp_hal::gpio::Input;

/// Boost-ready edges latched for the beacon cycle.
pub static BOOST_READY: BoostReady = BoostReady::new();

/// Supply health read from the supervisor's comparator output.
pub struct ComparatorSupervisor {
    supply_ok: Input<'static>,
}

impl ComparatorSupervisor {
    pub fn new(supply_ok: Input<'static>) -> Self {
        Self { supply_ok }
    }
}

impl PowerSupervisor for ComparatorSupervisor {
    fn supply_is_sufficient(&mut self) -> bool {
        self.supply_ok.is_high()
    }
}

/// Latch boost regulation edges into [`BOOST_READY`].
///
/// Runs as its own task standing in for the edge interrupt: it only sets
/// the flag and never touches the radio lines, which may be mid-sequence
/// on the cycle task.
pub async fn boost_watch(mut vboost_ok: Input<'static>) -> ! {
    loop {
        vboost_ok.wait_for_rising_edge().await;
        BOOST_READY.signal();
    }
}
