//! Placeholder scanner for step name templates
//!
//! A placeholder is `{segment(.segment)*}` where every segment is one or more
//! ASCII letters, digits, `_` or `$`. Anything else, including unbalanced or
//! empty braces, is literal text and passes through untouched.

pub mod lexer;
mod placeholder;

pub use placeholder::{scan, Placeholder, Placeholders};
