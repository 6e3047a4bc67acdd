//! Payload builder with a persistent wrapping counter
//!
//! The payload content is an 8-bit counter so a receiver can observe beacon
//! progression (and gaps) across the node's power interruptions. The counter
//! is the only state the firmware persists: it is read once at boot and
//! committed after every build, so it continues monotonically after a
//! brownout reboot.

use crate::beacon::packet::BeaconPacket;
use crate::config::protocol::{CMD_SET_ADV_PAYLOAD, PAYLOAD_LEN};
use crate::storage::CounterStore;

/// Builds the outgoing beacon packet for each cycle.
pub struct PayloadBuilder<S: CounterStore> {
    counter: u8,
    store: S,
}

impl<S: CounterStore> PayloadBuilder<S> {
    /// Create a builder, reading the persisted counter once.
    pub fn load(store: S) -> Self {
        let counter = store.load();
        log::debug!("beacon counter resumed at {}", counter);
        Self { counter, store }
    }

    /// Construct the next beacon packet.
    ///
    /// Fills the payload with `PAYLOAD_LEN` consecutive counter values,
    /// advances the counter by `PAYLOAD_LEN` (wrapping at 256) and commits
    /// the new value before returning. Pure function of the counter state.
    pub fn build(&mut self) -> BeaconPacket {
        let mut payload = [0u8; PAYLOAD_LEN];
        for byte in payload.iter_mut() {
            *byte = self.counter;
            self.counter = self.counter.wrapping_add(1);
        }
        self.store.commit(self.counter);

        BeaconPacket {
            command: CMD_SET_ADV_PAYLOAD,
            payload,
        }
    }

    /// The counter value the next build will start from
    pub fn counter(&self) -> u8 {
        self.counter
    }
}
