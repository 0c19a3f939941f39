//! GPIO names exposed by the MPS2 FPGA I/O block.
//!
//! The FPGA system control block of the AN385 image exposes the user LEDs and
//! the user push-buttons as two 32-bit registers. A GPIO driver binds each
//! register as a separate controller; this crate provides the names it binds
//! them by, and the line identifiers within each of them.
//!
//! Nothing here touches the hardware.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(clippy::pedantic)]

/// Base address of the FPGA system control block.
pub const FPGAIO_BASE: usize = 0x4002_8000;

/// Offset of the user LED register (`LED[1:0]`).
pub const FPGAIO_LED_OFFSET: usize = 0x000;

/// Offset of the user push-button register (`BUTTON[1:0]`).
pub const FPGAIO_BUTTON_OFFSET: usize = 0x008;

/// Identifies a GPIO controller instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioName {
    label: &'static str,
    reg: usize,
    ngpios: u8,
}

impl GpioName {
    /// Creates a controller name.
    ///
    /// # Panics
    ///
    /// Panics if `ngpios` exceeds the width of a 32-bit register. In a `const`
    /// context this is a build failure.
    #[must_use]
    pub const fn new(label: &'static str, reg: usize, ngpios: u8) -> Self {
        assert!(ngpios <= 32);
        Self { label, reg, ngpios }
    }

    /// Device label the driver binds this controller by.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Address of the controller's data register.
    #[must_use]
    pub const fn reg(&self) -> usize {
        self.reg
    }

    /// Number of lines wired to this controller.
    #[must_use]
    pub const fn ngpios(&self) -> u8 {
        self.ngpios
    }

    /// Whether `pin` is one of this controller's lines.
    #[must_use]
    pub const fn has_line(&self, pin: GpioPin) -> bool {
        pin.index() < self.ngpios
    }
}

/// Identifies a line within a GPIO controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioPin(u8);

impl GpioPin {
    /// Creates a line identifier.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not fit in a 32-bit register.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 32);
        Self(index)
    }

    /// Line index within its controller.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Bit of this line within the controller's data register.
    #[must_use]
    pub const fn mask(self) -> u32 {
        1u32 << self.0
    }
}

/// Controller backing the user LEDs.
pub const FPGAIO_LED0_GPIO_NAME: GpioName =
    GpioName::new("FPGAIO_LED0", FPGAIO_BASE + FPGAIO_LED_OFFSET, 2);

/// `USERLED0`.
pub const FPGAIO_LED0_USERLED0: GpioPin = GpioPin::new(0);

/// `USERLED1`.
pub const FPGAIO_LED0_USERLED1: GpioPin = GpioPin::new(1);

/// Controller backing the user push-buttons.
pub const FPGAIO_BUTTON_GPIO_NAME: GpioName =
    GpioName::new("FPGAIO_BUTTON", FPGAIO_BASE + FPGAIO_BUTTON_OFFSET, 2);

/// `USERPB0`.
pub const FPGAIO_BUTTON_USERPB0: GpioPin = GpioPin::new(0);

/// `USERPB1`.
pub const FPGAIO_BUTTON_USERPB1: GpioPin = GpioPin::new(1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers() {
        assert_eq!(FPGAIO_LED0_GPIO_NAME.reg(), 0x4002_8000);
        assert_eq!(FPGAIO_BUTTON_GPIO_NAME.reg(), 0x4002_8008);
        assert_ne!(FPGAIO_LED0_GPIO_NAME, FPGAIO_BUTTON_GPIO_NAME);
    }

    #[test]
    fn lines() {
        for pin in [FPGAIO_LED0_USERLED0, FPGAIO_LED0_USERLED1] {
            assert!(FPGAIO_LED0_GPIO_NAME.has_line(pin));
        }
        for pin in [FPGAIO_BUTTON_USERPB0, FPGAIO_BUTTON_USERPB1] {
            assert!(FPGAIO_BUTTON_GPIO_NAME.has_line(pin));
        }
        assert!(!FPGAIO_LED0_GPIO_NAME.has_line(GpioPin::new(2)));
    }

    #[test]
    fn masks() {
        assert_eq!(FPGAIO_LED0_USERLED0.mask(), 0b01);
        assert_eq!(FPGAIO_LED0_USERLED1.mask(), 0b10);
        assert_eq!(GpioPin::new(31).mask(), 0x8000_0000);
    }

    #[test]
    #[should_panic(expected = "assertion failed: index < 32")]
    fn pin_out_of_register() {
        let _ = GpioPin::new(32);
    }
}
