//! Performance logging macros
//!
//! Active in debug builds only; release builds compile them to no-ops.

/// Performance debug logging - only active in debug builds
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! perf_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! perf_debug {
    ($($arg:tt)*) => {};
}

/// Performance trace logging - only active in debug builds
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! perf_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! perf_trace {
    ($($arg:tt)*) => {};
}

/// Log the time elapsed since `$start` (an `Instant`) under `$label`
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! perf_elapsed {
    ($label:expr, $start:expr) => {
        log::debug!("{} took {:?}", $label, $start.elapsed())
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! perf_elapsed {
    ($label:expr, $start:expr) => {{
        let _ = &$start;
    }};
}
