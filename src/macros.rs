// src/macros.rs

/// `String::from` shorthand for literals, consts and `&str` values.
#[macro_export]
macro_rules! s {
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate `&str` pieces into a new `String`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($first);
        $( out.push_str($rest); )+
        out
    }};
}
