//! Internal logging helpers.

/// Emits a trace-level `tracing` event when the `tracing` feature is on.
///
/// Expands to nothing otherwise, so arguments must not carry side effects
/// the caller relies on.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    };
}

pub(crate) use trace_event;
