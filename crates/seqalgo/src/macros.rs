// Crate-private trace macro.
//
// Forwards to `log::trace!` with the `log` feature. Without it the arguments
// are still type-checked but nothing is emitted.

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::log::trace!(target: "seqalgo", $($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)*) => {
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    };
}
