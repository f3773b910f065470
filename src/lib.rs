//! Step Template - step names rendered from method call arguments
//!
//! A step name template such as `"login as {user.name}"` is rendered against
//! one method call: placeholders name a parameter, an argument index or the
//! method itself, optionally followed by a dotted path into the argument.
//! Placeholders that cannot be resolved are left in the name verbatim.
//!
//! # Example
//!
//! ```rust
//! use step_template::{render, CallContext, Record};
//!
//! let user = Record::new("User").with_field("name", "alice");
//! let call = CallContext::new("login").with_arg("user", user);
//!
//! let name = render("login as {user.name}", &call).unwrap();
//! assert_eq!(name, "login as alice");
//! ```

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod renderer;
pub mod resolve;
pub mod scanner;
pub mod value;

pub use config::{CollisionPolicy, ConfigError, FormatConfig, TemplateConfig};
pub use diagnostic::{Diagnostic, DiagnosticSink, TracingSink};
pub use error::{RenderError, ResolveError};
pub use renderer::{CallContext, Renderer};
pub use resolve::{DelimitedFormatter, ValueFormatter};
pub use scanner::{scan, Placeholder};
pub use value::{Record, Value};

/// Render a step name with default configuration
///
/// Unresolved placeholders are logged as `tracing` error events.
///
/// # Example
///
/// ```rust
/// use step_template::{render, CallContext};
///
/// let call = CallContext::new("add")
///     .with_positional(2)
///     .with_positional(3);
///
/// assert_eq!(render("{method} {0} and {1}", &call).unwrap(), "add 2 and 3");
/// assert_eq!(render("", &call).unwrap(), "add");
/// ```
pub fn render(template: &str, call: &CallContext) -> Result<String, RenderError> {
    render_with_config(template, call, &TemplateConfig::default())
}

/// Render a step name with custom configuration
///
/// # Example
///
/// ```rust
/// use step_template::{render_with_config, CallContext, FormatConfig, TemplateConfig, Value};
///
/// let config = TemplateConfig::new()
///     .with_method_name_key("step")
///     .with_format(FormatConfig::new().with_max_elements(2));
/// let call = CallContext::new("pick").with_arg("items", Value::list([1, 2, 3]));
///
/// let name = render_with_config("{step} {items}", &call, &config).unwrap();
/// assert_eq!(name, "pick [1, 2, ...]");
/// ```
pub fn render_with_config(
    template: &str,
    call: &CallContext,
    config: &TemplateConfig,
) -> Result<String, RenderError> {
    Renderer::new(config).render(template, call, &mut TracingSink)
}

/// Render a step name and return the diagnostics instead of logging them
pub fn render_with_diagnostics(
    template: &str,
    call: &CallContext,
    config: &TemplateConfig,
) -> Result<(String, Vec<Diagnostic>), RenderError> {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let name = Renderer::new(config).render(template, call, &mut diagnostics)?;
    Ok((name, diagnostics))
}
