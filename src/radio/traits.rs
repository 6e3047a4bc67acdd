//! Radio line trait for abstraction and testability
//!
//! This trait defines the two digital lines the sequencer owns, allowing
//! the direct-GPIO and I/O-expander implementations to be swapped with a
//! pin-write recorder for testing.

/// The radio module's two control lines.
///
/// Writes are instantaneous digital pin (or expander bit) writes with no
/// software failure mode; a line that does not respond is a wiring fault
/// and surfaces as hardware misbehaviour, not an error value. The lines are
/// exclusively owned by one sequencer; nothing else may touch them.
pub trait RadioLines {
    /// Drive the power switch line.
    fn set_switch(&mut self, on: bool);

    /// Drive the reset line. `asserted` means the radio is held in reset.
    fn set_reset(&mut self, asserted: bool);

    /// Drive both lines in one write.
    ///
    /// Boards whose switch and reset share a GPIO port can update them in a
    /// single port write so power never rises with reset released. The
    /// default falls back to two sequential writes, reset first.
    fn set_switch_and_reset(&mut self, switch_on: bool, reset_asserted: bool) {
        self.set_reset(reset_asserted);
        self.set_switch(switch_on);
    }
}
