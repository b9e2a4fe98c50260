// src/macros.rs

/// `s!()` → empty String, `s!(x)` → `String::from(x)`.
/// Used for labels, consts and error messages throughout.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}
