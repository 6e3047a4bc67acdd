//! Counter store trait for abstraction and testability
//!
//! The beacon counter is the only state required to survive power loss.
//! It is a single byte: a byte write is atomic at the storage-technology
//! level, so a read after an arbitrarily timed reboot always returns the
//! last committed value with no torn-read concern. Any wider persisted
//! state added later must use an atomic-commit pattern instead.

/// Abstract single-byte non-volatile cell for the beacon counter.
///
/// Read once at boot, committed once per beacon cycle.
pub trait CounterStore {
    /// Read the last committed counter value.
    fn load(&self) -> u8;

    /// Commit a new counter value.
    fn commit(&mut self, value: u8);
}
