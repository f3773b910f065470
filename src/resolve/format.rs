//! Turning resolved values into step name text

use crate::config::FormatConfig;
use crate::value::Value;

use super::path::{Resolved, SequenceKind};

/// Renders a resolved placeholder value as text
pub trait ValueFormatter {
    fn format(&self, resolved: &Resolved<'_>) -> String;
}

/// Formatter driven by the symbols and limits of a [`FormatConfig`]
///
/// Scalars render in their natural form, containers are wrapped in their
/// start/end symbols with elements joined by the delimiter, and records
/// render as `Type{field=value, ...}` unless they carry display text.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedFormatter<'c> {
    config: &'c FormatConfig,
}

impl<'c> DelimitedFormatter<'c> {
    pub fn new(config: &'c FormatConfig) -> Self {
        Self { config }
    }

    /// Render a single value
    pub fn format_value(&self, value: &Value) -> String {
        let c = self.config;
        match value {
            Value::Null => c.null_value.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            // Debug keeps the decimal point on whole numbers
            Value::Float(n) => format!("{:?}", n),
            Value::Text(s) | Value::Opaque(s) => s.clone(),
            Value::Array(items) => self.join(
                &c.array_start,
                &c.array_end,
                &c.array_delimiter,
                items.iter().map(|v| self.format_value(v)),
            ),
            Value::List(items) => self.join(
                &c.iterable_start,
                &c.iterable_end,
                &c.iterable_delimiter,
                items.iter().map(|v| self.format_value(v)),
            ),
            Value::Map(entries) => self.join(
                &c.map_start,
                &c.map_end,
                &c.map_entry_delimiter,
                entries.iter().map(|(k, v)| {
                    format!("{}{}{}", k, c.map_key_value_delimiter, self.format_value(v))
                }),
            ),
            Value::Record(record) => match &record.display {
                Some(display) => display.clone(),
                None => {
                    let fields = self.join(
                        &c.map_start,
                        &c.map_end,
                        &c.map_entry_delimiter,
                        record
                            .fields
                            .iter()
                            .map(|(k, v)| format!("{}={}", k, self.format_value(v))),
                    );
                    format!("{}{}", record.type_name, fields)
                }
            },
        }
    }

    /// Wrap rendered elements, honoring `max_elements`
    ///
    /// Elements past the limit are never rendered.
    fn join(
        &self,
        start: &str,
        end: &str,
        delimiter: &str,
        mut items: impl Iterator<Item = String>,
    ) -> String {
        let parts: Vec<String> = match self.config.max_elements {
            Some(max) => {
                let mut parts: Vec<String> = items.by_ref().take(max).collect();
                if items.next().is_some() {
                    parts.push(self.config.truncation_marker.clone());
                }
                parts
            }
            None => items.collect(),
        };
        format!("{}{}{}", start, parts.join(delimiter), end)
    }
}

impl ValueFormatter for DelimitedFormatter<'_> {
    fn format(&self, resolved: &Resolved<'_>) -> String {
        match resolved {
            Resolved::Value(value) => self.format_value(value),
            Resolved::Projection { kind, items } => {
                let c = self.config;
                let (start, end, delimiter) = match kind {
                    SequenceKind::Array => (&c.array_start, &c.array_end, &c.array_delimiter),
                    SequenceKind::Iterable => {
                        (&c.iterable_start, &c.iterable_end, &c.iterable_delimiter)
                    }
                };
                self.join(start, end, delimiter, items.iter().map(|r| self.format(r)))
            }
        }
    }
}
