//! Beacon packet construction

pub mod builder;
pub mod packet;

pub use builder::PayloadBuilder;
pub use packet::BeaconPacket;
