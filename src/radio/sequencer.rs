//! Radio power-on/power-off sequencing
//!
//! The radio module sits behind a load switch and a reset line. The one
//! safety property of this module is ordering: power must never rise while
//! reset is released, or the radio boots mid-ramp of its own supply rail
//! and ends up in an undefined state. Power-down likewise asserts reset
//! before the switch opens so the module dies clean.

use crate::clock::TickDelay;
use crate::config::timing::RADIO_RESET_HOLD;
use crate::radio::traits::RadioLines;

/// Power state of the radio module.
///
/// Exactly one value at any time; transitions only through
/// [`RadioPowerSequencer::turn_on`] and [`RadioPowerSequencer::turn_off`].
/// Volatile by design: every cold boot (including a post-brownout reboot)
/// starts over at [`RadioState::Off`] because rail state from a previous
/// life cannot be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioState {
    /// Switch open, radio unpowered
    Off,
    /// Reset asserted ahead of a power transition
    ResetAsserted,
    /// Switch closed, radio still held in reset
    Powering,
    /// Powered with reset released, ready for bytes after the boot delay
    On,
}

/// How the board wires the two radio lines.
///
/// Selected once at startup; it changes which line primitives the sequencer
/// uses, never the ordering guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardVariant {
    /// Switch and reset share one GPIO port: both bits can be set in a
    /// single port write, so the reset-before-power window is the minimal
    /// one the hardware allows.
    SharedPort,
    /// Switch and reset are separately addressable (distinct ports, or
    /// bits on the I/O expander): each edge is paced explicitly.
    SplitLines,
}

/// Drives the radio's power and reset lines through the strict ON/OFF
/// sequence.
///
/// Exclusively owns the two lines. The single-threaded model guarantees no
/// sequence is re-entered; a port to a concurrent environment must wrap the
/// sequencer in a mutual-exclusion discipline.
pub struct RadioPowerSequencer<L: RadioLines, D: TickDelay> {
    lines: L,
    delay: D,
    variant: BoardVariant,
    state: RadioState,
}

impl<L: RadioLines, D: TickDelay> RadioPowerSequencer<L, D> {
    /// Create a sequencer over lines at their boot-safe levels (switch
    /// open, radio unpowered).
    pub fn new(lines: L, delay: D, variant: BoardVariant) -> Self {
        Self {
            lines,
            delay,
            variant,
            state: RadioState::Off,
        }
    }

    /// Current radio power state
    pub fn state(&self) -> RadioState {
        self.state
    }

    /// Power the radio up, holding it in reset until its rail is stable.
    ///
    /// No-op when the radio is already on.
    pub async fn turn_on(&mut self) {
        if self.state == RadioState::On {
            return;
        }

        match self.variant {
            BoardVariant::SharedPort => {
                // One port write raises power with reset already asserted,
                // then only the reset bit is cleared
                self.lines.set_switch_and_reset(true, true);
                self.state = RadioState::Powering;
                self.lines.set_reset(false);
            }
            BoardVariant::SplitLines => {
                self.lines.set_reset(true);
                self.state = RadioState::ResetAsserted;
                self.delay.delay_ticks(RADIO_RESET_HOLD).await;

                self.lines.set_switch(true);
                self.state = RadioState::Powering;
                self.delay.delay_ticks(RADIO_RESET_HOLD).await;

                self.lines.set_reset(false);
            }
        }

        self.state = RadioState::On;
        log::debug!("radio powered on");
    }

    /// Power the radio down cleanly: reset first, then open the switch.
    ///
    /// Idempotent: calling this with the radio already off performs no pin
    /// writes and no waits.
    pub async fn turn_off(&mut self) {
        if self.state == RadioState::Off {
            return;
        }

        self.lines.set_reset(true);
        self.state = RadioState::ResetAsserted;
        self.delay.delay_ticks(RADIO_RESET_HOLD).await;

        // Reset stays asserted across the power cut and until the next
        // turn_on re-paces it
        self.lines.set_switch(false);
        self.state = RadioState::Off;
        log::debug!("radio powered off");
    }
}
