//! Power supervisor trait for abstraction and testability
//!
//! The supervisor circuit itself is external hardware: it monitors the
//! harvested-energy store, reports whether the rail can carry a radio
//! burst, and pulls the plug entirely on deep discharge. The firmware only
//! consumes the health query; deep-discharge shutdown halts the processor
//! outside software's control and the next boot starts the cycle fresh.

/// Health query against the external power supervisor.
pub trait PowerSupervisor {
    /// Whether the supply can currently carry a full radio burst.
    ///
    /// Checked synchronously at the top of each beacon cycle. A `false`
    /// here is not an error: the cycle skips its powered phases and sleeps,
    /// rather than risking a brownout mid-transmission that would leave the
    /// radio half-configured.
    fn supply_is_sufficient(&mut self) -> bool;
}
