//! Per-call lookup table from names and indices to argument values

use std::borrow::Cow;
use std::collections::HashMap;

use crate::config::{CollisionPolicy, TemplateConfig};
use crate::error::RenderError;
use crate::value::Value;

/// Lookup table built fresh for one render call
///
/// Holds the method name under the configured key and, for every argument
/// index `i`, the value under its declared parameter name (when it has one)
/// and under the decimal string `"i"`. Insertion order is method name first,
/// then per index the name before the index, so under
/// [`CollisionPolicy::LastWins`] a parameter named like the method-name key
/// shadows the method name.
#[derive(Debug, Clone)]
pub struct ParameterMapping<'a> {
    entries: HashMap<String, Cow<'a, Value>>,
    policy: CollisionPolicy,
}

impl<'a> ParameterMapping<'a> {
    /// Build the mapping for one call
    ///
    /// An empty `names` slice means parameter names are unavailable and every
    /// argument is reachable by index only. Otherwise `names` and `arguments`
    /// must have the same length; the first index missing from either side is
    /// reported as [`RenderError::IndexOutOfRange`].
    pub fn build(
        config: &TemplateConfig,
        method_name: &str,
        names: &'a [Option<String>],
        arguments: &'a [Value],
    ) -> Result<Self, RenderError> {
        let mut mapping = Self {
            entries: HashMap::with_capacity(1 + 2 * arguments.len()),
            policy: config.collision,
        };
        mapping.insert(
            config.method_name_key.clone(),
            Cow::Owned(Value::Text(method_name.to_string())),
        );

        let count = names.len().max(arguments.len());
        for index in 0..count {
            let out_of_range =
                || RenderError::index_out_of_range(index, names.len(), arguments.len());
            let value = arguments.get(index).ok_or_else(out_of_range)?;
            if !names.is_empty() {
                if let Some(name) = names.get(index).ok_or_else(out_of_range)? {
                    mapping.insert(name.clone(), Cow::Borrowed(value));
                }
            }
            mapping.insert(index.to_string(), Cow::Borrowed(value));
        }

        Ok(mapping)
    }

    fn insert(&mut self, key: String, value: Cow<'a, Value>) {
        match self.policy {
            CollisionPolicy::LastWins => {
                self.entries.insert(key, value);
            }
            CollisionPolicy::FirstWins => {
                self.entries.entry(key).or_insert(value);
            }
        }
    }

    /// Look up a root placeholder segment
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).map(|v| v.as_ref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
