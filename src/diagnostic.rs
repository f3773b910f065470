//! Diagnostics for placeholders that could not be resolved
//!
//! Unresolved placeholders never fail a render. Each one is handed to a
//! [`DiagnosticSink`]: the default sink logs through `tracing`, and a plain
//! `Vec<Diagnostic>` collects them for inspection.

use std::fmt;

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::error::ResolveError;
use crate::scanner::lexer::Span;
use crate::scanner::Placeholder;

/// A placeholder that was left verbatim in the rendered name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Original placeholder text, braces included
    pub placeholder: String,
    /// Byte range of the placeholder in the template
    pub span: Span,
    /// Why it could not be resolved
    pub error: ResolveError,
}

impl Diagnostic {
    pub fn new(placeholder: &Placeholder<'_>, error: ResolveError) -> Self {
        Self {
            placeholder: placeholder.raw.to_string(),
            span: placeholder.span.clone(),
            error,
        }
    }

    /// Format the diagnostic with template context using ariadne
    pub fn format(&self, template: &str, source_name: &str) -> String {
        // ariadne counts characters, not bytes
        let to_char = |byte: usize| template.get(..byte).map_or(0, |s| s.chars().count());
        let span = to_char(self.span.start)..to_char(self.span.end);

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, source_name, span.start)
            .with_message(self.error.to_string())
            .with_label(
                Label::new((source_name, span))
                    .with_message(format!("{} is left unresolved", self.placeholder))
                    .with_color(Color::Red),
            )
            .finish()
            .write((source_name, Source::from(template)), &mut buf);
        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {:?}: {}", self.placeholder, self.span, self.error)
    }
}

/// Receiver for unresolved-placeholder diagnostics
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Sink that logs every diagnostic as a `tracing` error event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match &diagnostic.error {
            ResolveError::ParameterNotFound { name } => {
                tracing::error!(
                    placeholder = %diagnostic.placeholder,
                    param = %name,
                    "Param - {} was not found",
                    name
                );
            }
            ResolveError::FieldNotFound { path, segment } => {
                tracing::error!(
                    placeholder = %diagnostic.placeholder,
                    path = %path,
                    segment = %segment,
                    "Unable to parse: {}",
                    diagnostic.placeholder
                );
            }
        }
    }
}
