//! Template rendering for a single call

use crate::config::TemplateConfig;
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::error::{RenderError, ResolveError};
use crate::resolve::{resolve_path, DelimitedFormatter, ParameterMapping, ValueFormatter};
use crate::scanner::{scan, Placeholder};

use super::call::CallContext;

/// Renders step names under one configuration
///
/// Holds no per-call state; one renderer can serve any number of calls.
pub struct Renderer<'c> {
    config: &'c TemplateConfig,
    formatter: Box<dyn ValueFormatter + 'c>,
}

impl<'c> Renderer<'c> {
    /// Create a renderer using [`DelimitedFormatter`] over `config.format`
    pub fn new(config: &'c TemplateConfig) -> Self {
        Self {
            config,
            formatter: Box::new(DelimitedFormatter::new(&config.format)),
        }
    }

    /// Replace the value formatter
    pub fn with_formatter(mut self, formatter: impl ValueFormatter + 'c) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Render `template` for `call`
    ///
    /// A blank template renders as the method name. Otherwise every
    /// placeholder is substituted with its resolved value; placeholders that
    /// cannot be resolved stay verbatim and are reported to `sink`. The only
    /// error is a call whose parameter names and arguments disagree.
    #[tracing::instrument(level = "trace", skip_all, fields(method = %call.method_name))]
    pub fn render(
        &self,
        template: &str,
        call: &CallContext,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<String, RenderError> {
        if template.trim().is_empty() {
            return Ok(call.method_name.clone());
        }

        let mapping = ParameterMapping::build(
            self.config,
            &call.method_name,
            &call.parameter_names,
            &call.arguments,
        )?;

        let mut out = String::with_capacity(template.len());
        let mut last = 0;
        for placeholder in scan(template) {
            out.push_str(&template[last..placeholder.span.start]);
            match self.substitute(&placeholder, &mapping) {
                Ok(text) => out.push_str(&text),
                Err(error) => {
                    sink.report(Diagnostic::new(&placeholder, error));
                    out.push_str(placeholder.raw);
                }
            }
            last = placeholder.span.end;
        }
        out.push_str(&template[last..]);

        Ok(out)
    }

    fn substitute(
        &self,
        placeholder: &Placeholder<'_>,
        mapping: &ParameterMapping<'_>,
    ) -> Result<String, ResolveError> {
        let segments = placeholder.segments();
        let root_name = segments[0];
        let root = mapping
            .get(root_name)
            .ok_or_else(|| ResolveError::parameter_not_found(root_name))?;
        let resolved = resolve_path(self.config, &segments, root)?;
        Ok(self.formatter.format(&resolved))
    }
}
