use std::hint;

pub(crate) trait OptionExtension<T> {
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts like [`Option::unwrap`], except that the none branch is [`unreachable!`] under debug
    /// assertions and [`unreachable_unchecked`](hint::unreachable_unchecked) in release builds.
    ///
    /// Calling this expresses that [`None`] is impossible at the call site; each use states why.
    /// No panic annotation is attached because a correct use can never panic, which is also the
    /// whole safety contract.
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: The caller asserts that None is impossible when invoking this method.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
