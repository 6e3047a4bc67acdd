//! Supply supervision: adequacy checks and the boost-ready flag

pub mod boost;
pub mod traits;

pub use boost::BoostReady;
pub use traits::PowerSupervisor;
