//! Beacon packet layout
//!
//! # On-air format
//!
//! The packet is carried verbatim over the serial link to the radio module
//! and must be reproduced bit-exact:
//!
//! ```text
//! [command: u8][payload: [u8; PAYLOAD_LEN]]
//! ```
//!
//! - `command`: command tag (0x00 = set advertised payload)
//! - `payload`: fixed-length counter bytes

use crate::config::protocol::{PACKET_LEN, PAYLOAD_LEN};

/// A single outgoing beacon, constructed fresh each cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeaconPacket {
    /// Command tag, byte 0 on the wire
    pub command: u8,
    /// Payload bytes, bytes 1..=PAYLOAD_LEN on the wire
    pub payload: [u8; PAYLOAD_LEN],
}

impl BeaconPacket {
    /// Encode the packet into its wire layout.
    pub fn encode(&self) -> [u8; PACKET_LEN] {
        let mut bytes = [0u8; PACKET_LEN];
        bytes[0] = self.command;
        bytes[1..].copy_from_slice(&self.payload);
        bytes
    }
}
