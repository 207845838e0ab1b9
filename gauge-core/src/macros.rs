// Optional logging. Forwards to `log` and/or `defmt` when their features are
// enabled and expands to nothing otherwise. Format strings must stay within the
// subset both backends accept: plain `{}` placeholders over primitives.

macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        log::warn!($($arg)*);
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)*);
    }};
}

macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
    }};
}

macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        log::trace!($($arg)*);
        #[cfg(feature = "defmt")]
        defmt::trace!($($arg)*);
    }};
}
