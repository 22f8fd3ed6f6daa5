// src/macros.rs

/// `String` shorthand.
///
/// - `s!()` is an empty string
/// - `s!(x)` is `String::from(x)`
/// - `s!("{}?{}", path, query)` formats, like `format!`
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($fmt:literal, $($arg:tt)+) => {
        ::std::format!($fmt, $($arg)+)
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}
