//! Hardware bindings for the ESP32-S3 beacon node board
//!
//! Everything in here implements one of the core trait seams against real
//! peripherals. Two board revisions exist: rev A routes the radio switch
//! and reset lines through an I2C I/O expander (`io-expander` feature),
//! rev B drives them as direct GPIOs.

pub mod clock;
pub mod lines;
pub mod storage;
pub mod supervisor;
pub mod transport;
