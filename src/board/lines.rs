//! Radio line implementations for both board revisions

use crate::config::pins::{BIT_RADIO_RST, BIT_RADIO_SW, EXPANDER_ADDR, EXPANDER_OUT_REG};
use crate::radio::RadioLines;
use embedded_hal::i2c::I2c;
use esp_hal::gpio::Output;

/// Rev B: switch and reset as direct push-pull GPIOs.
///
/// The switch enable is active high; the module's reset input is active
/// low, so asserting reset drives the pin low.
pub struct GpioLines {
    switch: Output<'static>,
    reset: Output<'static>,
}

impl GpioLines {
    /// Take ownership of the two configured outputs.
    pub fn new(switch: Output<'static>, reset: Output<'static>) -> Self {
        Self { switch, reset }
    }
}

impl RadioLines for GpioLines {
    fn set_switch(&mut self, on: bool) {
        if on {
            self.switch.set_high();
        } else {
            self.switch.set_low();
        }
    }

    fn set_reset(&mut self, asserted: bool) {
        if asserted {
            self.reset.set_low();
        } else {
            self.reset.set_high();
        }
    }
}

/// Rev A: switch and reset as output bits on the I2C I/O expander.
///
/// The expander's output register is shadowed locally so each update is a
/// single read-modify-write of the shadow plus one I2C register write,
/// which also lets both lines change in one bus transaction. An I2C write
/// that fails is a wiring fault; it is logged and not retried because there
/// is nothing software can do about it.
pub struct ExpanderLines<I2C: I2c> {
    i2c: I2C,
    shadow: u8,
}

impl<I2C: I2c> ExpanderLines<I2C> {
    /// Wrap the expander bus handle. Assumes all expander outputs low.
    pub fn new(i2c: I2C) -> Self {
        Self { i2c, shadow: 0 }
    }

    fn write_bits(&mut self, set: u8, clear: u8) {
        let next = (self.shadow | set) & !clear;
        if self
            .i2c
            .write(EXPANDER_ADDR, &[EXPANDER_OUT_REG, next])
            .is_err()
        {
            log::warn!("expander write failed");
        }
        self.shadow = next;
    }
}

impl<I2C: I2c> RadioLines for ExpanderLines<I2C> {
    fn set_switch(&mut self, on: bool) {
        if on {
            self.write_bits(BIT_RADIO_SW, 0);
        } else {
            self.write_bits(0, BIT_RADIO_SW);
        }
    }

    fn set_reset(&mut self, asserted: bool) {
        if asserted {
            self.write_bits(BIT_RADIO_RST, 0);
        } else {
            self.write_bits(0, BIT_RADIO_RST);
        }
    }

    fn set_switch_and_reset(&mut self, switch_on: bool, reset_asserted: bool) {
        let (mut set, mut clear) = (0u8, 0u8);
        if switch_on {
            set |= BIT_RADIO_SW;
        } else {
            clear |= BIT_RADIO_SW;
        }
        if reset_asserted {
            set |= BIT_RADIO_RST;
        } else {
            clear |= BIT_RADIO_RST;
        }
        self.write_bits(set, clear);
    }
}
