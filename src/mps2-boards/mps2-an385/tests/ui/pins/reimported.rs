// Pulling the aliases in through every path they are reachable by must not conflict.
#![allow(unused_imports)]

use mps2_an385::pins::*;
use mps2_an385::*;

const PIN: mps2_an385::fpgaio::GpioPin = LED0_GPIO_PIN;

fn main() {
    assert_eq!(PIN, mps2_an385::pins::LED0_GPIO_PIN);
    assert_eq!(UserPin::Led0.binding(), LED0);
}
