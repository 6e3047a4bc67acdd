//! Byte-oriented serial link to the radio module

pub mod traits;

pub use traits::{LinkTransport, TransportError};
