///
/// Checks an internal invariant when testing or when the `extra_checks` feature is on
///
/// In other builds the condition is still type-checked but never evaluated
///
macro_rules! test_assert {
    ($($arg:tt)+) => {
        if cfg!(any(test, feature = "extra_checks")) {
            assert!($($arg)+);
        }
    };
}
