// Board-independent code only names the aliases.
use mps2_an385::{LED0_GPIO_PIN, LED0_GPIO_PORT, LED1_GPIO_PIN, LED1_GPIO_PORT};

fn led_mask(pins: &[mps2_an385::fpgaio::GpioPin]) -> u32 {
    pins.iter().fold(0, |mask, pin| mask | pin.mask())
}

fn main() {
    assert_eq!(LED0_GPIO_PORT, LED1_GPIO_PORT);
    assert_eq!(led_mask(&[LED0_GPIO_PIN, LED1_GPIO_PIN]), 0b11);
}
