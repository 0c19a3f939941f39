//! Selects the board crate to build for.
//!
//! Application code names the selected board as [`board`] and never a board
//! crate directly.

#![cfg_attr(not(test), no_std)]

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "mps2-an385")] {
        pub use mps2_an385 as board;

        /// Runs the selected board's initialization.
        pub fn init() {
            board::init();
        }
    } else if #[cfg(feature = "no-boards")] {
        // Do nothing
    } else {
        compile_error!("no board feature selected");
    }
}
