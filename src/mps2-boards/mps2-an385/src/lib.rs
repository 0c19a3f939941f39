//! Board support for the Arm MPS2 with the AN385 (Cortex-M3) FPGA image.
//!
//! The board's user LEDs and push-buttons are exposed under board-independent
//! names:
//!
//! | Alias  | Controller                | Line       |
//! |--------|---------------------------|------------|
//! | `LED0` | `FPGAIO_LED0_GPIO_NAME`   | `USERLED0` |
//! | `LED1` | `FPGAIO_LED0_GPIO_NAME`   | `USERLED1` |
//! | `SW0`  | `FPGAIO_BUTTON_GPIO_NAME` | `USERPB0`  |
//! | `SW1`  | `FPGAIO_BUTTON_GPIO_NAME` | `USERPB1`  |
//!
//! The aliases only exist when the `gpio-mmio32` feature is enabled.
#![cfg_attr(
    feature = "gpio-mmio32",
    doc = r#"
```
use mps2_an385::{LED0_GPIO_PIN, LED0_GPIO_PORT};

assert_eq!(LED0_GPIO_PORT.label(), "FPGAIO_LED0");
assert_eq!(LED0_GPIO_PIN.index(), 0);
```
"#
)]
#![cfg_attr(
    not(feature = "gpio-mmio32"),
    doc = r#"
With the feature disabled, using them does not build:

```compile_fail
let _ = mps2_an385::LED0_GPIO_PIN;
```

```compile_fail
let _ = mps2_an385::SW1_GPIO_NAME;
```

```compile_fail
let _ = mps2_an385::pins::UserPin::ALL;
```
"#
)]
//!
//! # Cargo features
#![doc = document_features::document_features!(feature_label = r#"<span class="stab portability"><code>{feature}</code></span>"#)]
#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(clippy::pedantic)]

#[doc(inline)]
pub use mps2_fpgaio as fpgaio;

#[cfg(feature = "gpio-mmio32")]
pub mod pins;

#[cfg(feature = "gpio-mmio32")]
pub use pins::{
    LED0_GPIO_PIN, LED0_GPIO_PORT, LED1_GPIO_PIN, LED1_GPIO_PORT, SW0_GPIO_NAME, SW0_GPIO_PIN,
    SW1_GPIO_NAME, SW1_GPIO_PIN,
};

use mps2_log::debug;

/// Board initialization.
///
/// The FPGA I/O lines need no setup, so this only reports the pin aliases in
/// use.
pub fn init() {
    debug!("mps2_an385::init()");

    #[cfg(feature = "gpio-mmio32")]
    for pin in pins::UserPin::ALL {
        let binding = pin.binding();
        mps2_log::trace!(
            "{}: {} line {}",
            pin.name(),
            binding.port.label(),
            binding.pin.index()
        );
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_repeatable() {
        super::init();
        super::init();
    }

    #[test]
    fn fpgaio_is_reachable_through_the_board() {
        assert_eq!(super::fpgaio::FPGAIO_BASE, mps2_fpgaio::FPGAIO_BASE);
    }
}
