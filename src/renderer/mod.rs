//! Step name rendering
//!
//! This module takes a template and the context of one method call and
//! produces the final step name, substituting every placeholder it can
//! resolve and leaving the rest verbatim.

pub mod call;
pub mod step;

pub use call::CallContext;
pub use step::Renderer;
