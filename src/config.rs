//! Hardware and protocol configuration constants for the harvesting beacon node

/// Cycle timing, expressed in low-power clock ticks.
///
/// The embedded binding maps one tick to one millisecond of the always-on
/// low-power timer; the core never assumes a wall-clock unit.
pub mod timing {
    /// Minimum ticks the radio reset line must stay asserted around any
    /// power toggle. Powering the module with reset released produces
    /// undefined boot behaviour.
    pub const RADIO_RESET_HOLD: u32 = 20;

    /// Ticks to wait after power-on before the radio accepts bytes.
    pub const RADIO_BOOT_DELAY: u32 = 100;

    /// Ticks to wait after the last byte is handed to the transport before
    /// it is safe to cut radio power.
    ///
    /// The radio gives no transmission-complete signal, so this is a blind
    /// wait sized to cover the worst-case time-on-air, not a handshake.
    pub const RADIO_TX_SETTLE: u32 = 50;

    /// Ticks the node sleeps between beacon cycles.
    pub const BEACON_INTERVAL: u32 = 4_000;
}

/// Beacon packet layout (the on-air contract with the receiving node)
pub mod protocol {
    /// Command tag instructing the radio to replace its advertised payload.
    pub const CMD_SET_ADV_PAYLOAD: u8 = 0x00;

    /// Payload bytes carried per beacon.
    pub const PAYLOAD_LEN: usize = 4;

    /// Encoded packet size: command tag + payload.
    pub const PACKET_LEN: usize = 1 + PAYLOAD_LEN;
}

/// Pin and expander-bit assignments for the supported board revisions
pub mod pins {
    /// Radio power-switch GPIO (rev B, direct-GPIO lines).
    pub const RADIO_SW: u8 = 4;

    /// Radio reset GPIO (rev B, direct-GPIO lines).
    pub const RADIO_RST: u8 = 5;

    /// "Supply good" comparator output from the power supervisor circuit.
    pub const VSUPPLY_OK: u8 = 6;

    /// Boost-converter regulation-reached edge input.
    pub const VBOOST_OK: u8 = 7;

    /// I2C address of the I/O expander carrying the radio lines (rev A).
    pub const EXPANDER_ADDR: u8 = 0x20;

    /// Expander output-port register.
    pub const EXPANDER_OUT_REG: u8 = 0x01;

    /// Radio reset bit on the expander output port (rev A).
    pub const BIT_RADIO_RST: u8 = 1 << 6;

    /// Radio power-switch bit on the expander output port (rev A).
    pub const BIT_RADIO_SW: u8 = 1 << 7;
}

/// Serial link to the radio module
pub mod link {
    pub const BAUD_RATE: u32 = 115_200;
}
