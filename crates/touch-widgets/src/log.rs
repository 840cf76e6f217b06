//! Logging shim.
//!
//! Widget code logs through `ui_debug!` / `ui_trace!`, which forward to
//! `defmt` on firmware builds and to `tracing` on desktop builds. With neither
//! feature enabled the arguments are still evaluated by reference so call
//! sites do not trip `unused_variables`.
//!
//! Format strings must stay within the subset both backends accept: plain
//! `{}` placeholders with integer or `&str` arguments.

macro_rules! ui_debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($fmt $(, $arg)*);
        #[cfg(feature = "tracing")]
        tracing::debug!($fmt $(, $arg)*);
        #[cfg(not(any(feature = "defmt", feature = "tracing")))]
        {
            $( let _ = &$arg; )*
        }
    }};
}

macro_rules! ui_trace {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        defmt::trace!($fmt $(, $arg)*);
        #[cfg(feature = "tracing")]
        tracing::trace!($fmt $(, $arg)*);
        #[cfg(not(any(feature = "defmt", feature = "tracing")))]
        {
            $( let _ = &$arg; )*
        }
    }};
}
