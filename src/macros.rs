/// Check a precondition of a watch accessor.
/// It's a `debug_assert!` unless feature `boundary_check` is on.
macro_rules! watch_assert {
    ($cond:expr $(,)?) => {{
        #[cfg(feature = "boundary_check")]
        assert!($cond);
        #[cfg(not(feature = "boundary_check"))]
        debug_assert!($cond);
    }};
    ($cond:expr, $($arg:tt)+) => {{
        #[cfg(feature = "boundary_check")]
        assert!($cond, $($arg)+);
        #[cfg(not(feature = "boundary_check"))]
        debug_assert!($cond, $($arg)+);
    }};
}
