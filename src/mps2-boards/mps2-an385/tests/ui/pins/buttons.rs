use mps2_an385::{SW0_GPIO_NAME, SW0_GPIO_PIN, SW1_GPIO_NAME, SW1_GPIO_PIN};
use mps2_an385::fpgaio::{FPGAIO_BUTTON_GPIO_NAME, FPGAIO_BUTTON_USERPB0, FPGAIO_BUTTON_USERPB1};

fn main() {
    assert_eq!(SW0_GPIO_NAME, FPGAIO_BUTTON_GPIO_NAME);
    assert_eq!(SW1_GPIO_NAME, FPGAIO_BUTTON_GPIO_NAME);
    assert_eq!(SW0_GPIO_PIN, FPGAIO_BUTTON_USERPB0);
    assert_eq!(SW1_GPIO_PIN, FPGAIO_BUTTON_USERPB1);
}
