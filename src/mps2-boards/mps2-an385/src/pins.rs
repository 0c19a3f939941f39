//! Pin aliases for the user LEDs and push-buttons.
//!
//! The LEDs and buttons are bound through the 32-bit memory-mapped GPIO
//! abstraction, one controller per FPGA I/O register. Other GPIO access paths
//! bring their own aliases.

use const_panic::concat_assert;
use mps2_fpgaio::{
    GpioName, GpioPin, FPGAIO_BUTTON_GPIO_NAME, FPGAIO_BUTTON_USERPB0, FPGAIO_BUTTON_USERPB1,
    FPGAIO_LED0_GPIO_NAME, FPGAIO_LED0_USERLED0, FPGAIO_LED0_USERLED1,
};

// USERLED0
/// Controller of `LED0`.
pub const LED0_GPIO_PORT: GpioName = FPGAIO_LED0_GPIO_NAME;
/// Line of `LED0`.
pub const LED0_GPIO_PIN: GpioPin = FPGAIO_LED0_USERLED0;

// USERLED1
/// Controller of `LED1`.
pub const LED1_GPIO_PORT: GpioName = FPGAIO_LED0_GPIO_NAME;
/// Line of `LED1`.
pub const LED1_GPIO_PIN: GpioPin = FPGAIO_LED0_USERLED1;

// Buttons use `_NAME` where LEDs use `_PORT`; consumers expect both spellings as is.

// USERPB0
/// Controller of `SW0`.
pub const SW0_GPIO_NAME: GpioName = FPGAIO_BUTTON_GPIO_NAME;
/// Line of `SW0`.
pub const SW0_GPIO_PIN: GpioPin = FPGAIO_BUTTON_USERPB0;

// USERPB1
/// Controller of `SW1`.
pub const SW1_GPIO_NAME: GpioName = FPGAIO_BUTTON_GPIO_NAME;
/// Line of `SW1`.
pub const SW1_GPIO_PIN: GpioPin = FPGAIO_BUTTON_USERPB1;

/// A controller and one of its lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Binding {
    /// The GPIO controller.
    pub port: GpioName,
    /// The line within [`port`](Self::port).
    pub pin: GpioPin,
}

impl Binding {
    /// Creates a binding.
    #[must_use]
    pub const fn new(port: GpioName, pin: GpioPin) -> Self {
        Self { port, pin }
    }
}

/// Binding of `LED0`.
pub const LED0: Binding = Binding::new(LED0_GPIO_PORT, LED0_GPIO_PIN);
/// Binding of `LED1`.
pub const LED1: Binding = Binding::new(LED1_GPIO_PORT, LED1_GPIO_PIN);
/// Binding of `SW0`.
pub const SW0: Binding = Binding::new(SW0_GPIO_NAME, SW0_GPIO_PIN);
/// Binding of `SW1`.
pub const SW1: Binding = Binding::new(SW1_GPIO_NAME, SW1_GPIO_PIN);

/// The board's user LEDs and push-buttons.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UserPin {
    /// User LED 0.
    Led0,
    /// User LED 1.
    Led1,
    /// User push-button 0.
    Sw0,
    /// User push-button 1.
    Sw1,
}

impl UserPin {
    /// All user pins, LEDs first.
    pub const ALL: [UserPin; 4] = [Self::Led0, Self::Led1, Self::Sw0, Self::Sw1];

    /// Returns where this pin is wired.
    #[must_use]
    pub const fn binding(self) -> Binding {
        match self {
            Self::Led0 => LED0,
            Self::Led1 => LED1,
            Self::Sw0 => SW0,
            Self::Sw1 => SW1,
        }
    }

    /// Board-independent name of this pin.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Led0 => "LED0",
            Self::Led1 => "LED1",
            Self::Sw0 => "SW0",
            Self::Sw1 => "SW1",
        }
    }

    /// Whether this pin drives an LED.
    #[must_use]
    pub const fn is_led(self) -> bool {
        matches!(self, Self::Led0 | Self::Led1)
    }

    /// Whether this pin reads a push-button.
    #[must_use]
    pub const fn is_button(self) -> bool {
        matches!(self, Self::Sw0 | Self::Sw1)
    }
}

const fn assert_wired(pin: UserPin) {
    let binding = pin.binding();
    concat_assert!(
        binding.port.has_line(binding.pin),
        pin.name(),
        ": line ",
        binding.pin.index(),
        " is not wired on ",
        binding.port.label()
    );
}

const fn assert_distinct(a: UserPin, b: UserPin) {
    let line = a.binding().pin.index();
    concat_assert!(
        line != b.binding().pin.index(),
        a.name(),
        " and ",
        b.name(),
        " both use line ",
        line
    );
}

const _: () = {
    assert_wired(UserPin::Led0);
    assert_wired(UserPin::Led1);
    assert_wired(UserPin::Sw0);
    assert_wired(UserPin::Sw1);

    assert_distinct(UserPin::Led0, UserPin::Led1);
    assert_distinct(UserPin::Sw0, UserPin::Sw1);
};
