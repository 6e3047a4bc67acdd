//! Radio power and reset line control

pub mod sequencer;
pub mod traits;

pub use sequencer::{BoardVariant, RadioPowerSequencer, RadioState};
pub use traits::RadioLines;
