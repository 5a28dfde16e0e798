/// Emits a `tracing` event when the `tracing` feature is enabled.
///
/// Expands to nothing otherwise, so call sites pay no cost and need no
/// `#[cfg]` of their own.
///
/// ```ignore
/// trace_event!(debug, nodes = n, "built network");
/// ```
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($arg)+);
        }
    }};
}

pub(crate) use trace_event;
