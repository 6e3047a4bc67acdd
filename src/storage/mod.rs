//! Non-volatile storage for state that must survive power loss

pub mod traits;

pub use traits::CounterStore;
