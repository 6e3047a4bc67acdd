#![cfg_attr(not(test), no_std)]

pub mod beacon;
pub mod clock;
pub mod config;
pub mod cycle;
pub mod power;
pub mod radio;
pub mod storage;
pub mod transport;

// Hardware bindings depend on esp-hal/embassy, only available with the
// embedded feature
#[cfg(feature = "embedded")]
pub mod board;
