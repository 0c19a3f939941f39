//! Logging macros for the board crates.
//!
//! With the `defmt` feature the macros forward to [`defmt`]; without it they
//! evaluate nothing but still type-check their arguments.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(clippy::pedantic)]

#[cfg(feature = "defmt")]
#[doc(hidden)]
pub mod hidden {
    // Required so the macros can access it.
    pub use defmt;
}

#[cfg(feature = "defmt")]
mod backend {
    #[doc(hidden)]
    #[macro_export]
    macro_rules! __trace {
        ($($arg:tt)*) => {{
            use $crate::hidden::defmt;
            defmt::trace!($($arg)*);
        }};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __debug {
        ($($arg:tt)*) => {{
            use $crate::hidden::defmt;
            defmt::debug!($($arg)*);
        }};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __info {
        ($($arg:tt)*) => {{
            use $crate::hidden::defmt;
            defmt::info!($($arg)*);
        }};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __warn {
        ($($arg:tt)*) => {{
            use $crate::hidden::defmt;
            defmt::warn!($($arg)*);
        }};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __error {
        ($($arg:tt)*) => {{
            use $crate::hidden::defmt;
            defmt::error!($($arg)*);
        }};
    }

    pub use crate::__debug as debug;
    pub use crate::__error as error;
    pub use crate::__info as info;
    pub use crate::__trace as trace;
    pub use crate::__warn as warn;
}

#[cfg(not(feature = "defmt"))]
mod backend {
    #[doc(hidden)]
    #[macro_export]
    macro_rules! __stub {
        ($($arg:tt)*) => {{
            let _ = ($($arg)*); // Do nothing
        }};
    }

    pub use crate::__stub as debug;
    pub use crate::__stub as error;
    pub use crate::__stub as info;
    pub use crate::__stub as trace;
    pub use crate::__stub as warn;
}

/// Logs a message at the debug level.
pub use backend::debug;
/// Logs a message at the error level.
pub use backend::error;
/// Logs a message at the info level.
pub use backend::info;
/// Logs a message at the trace level.
pub use backend::trace;
/// Logs a message at the warn level.
pub use backend::warn;
