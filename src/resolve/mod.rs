//! Value resolution for placeholders
//!
//! A placeholder's first segment is looked up in the per-call
//! [`ParameterMapping`]; the remaining segments are walked by
//! [`resolve_path`]; the result is turned into text by a [`ValueFormatter`].

mod format;
mod mapping;
mod path;

pub use format::{DelimitedFormatter, ValueFormatter};
pub use mapping::ParameterMapping;
pub use path::{resolve_path, Resolved, SequenceKind};
