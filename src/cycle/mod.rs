//! The beacon duty cycle

pub mod controller;

pub use controller::{BeaconCycleController, CyclePhase};
