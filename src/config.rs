//! Configuration for placeholder resolution and value formatting
//!
//! Both structs can be built in code with `with_*` setters or loaded from
//! TOML. Every TOML key is optional and falls back to the defaults below.
//!
//! ```toml
//! method_name_key = "method"
//! index_access = true
//!
//! [format]
//! null_value = "null"
//! max_elements = 3
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Which value wins when two parameter-mapping entries share a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// The later insertion replaces the earlier one
    #[default]
    LastWins,
    /// The first insertion is kept
    FirstWins,
}

/// Configuration controlling how placeholders are resolved
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Placeholder name that substitutes the method name
    pub method_name_key: String,

    /// Treat numeric path segments as element indices on arrays and lists
    pub index_access: bool,

    /// Tie-break for colliding parameter-mapping keys
    pub collision: CollisionPolicy,

    /// How resolved values are turned into text
    pub format: FormatConfig,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            method_name_key: "method".to_string(),
            index_access: false,
            collision: CollisionPolicy::LastWins,
            format: FormatConfig::default(),
        }
    }
}

impl TemplateConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the placeholder name that substitutes the method name
    pub fn with_method_name_key(mut self, key: impl Into<String>) -> Self {
        self.method_name_key = key.into();
        self
    }

    /// Enable or disable numeric element indexing
    pub fn with_index_access(mut self, enabled: bool) -> Self {
        self.index_access = enabled;
        self
    }

    /// Set the key collision policy
    pub fn with_collision(mut self, policy: CollisionPolicy) -> Self {
        self.collision = policy;
        self
    }

    /// Set the formatting configuration
    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }
}

/// Symbols and limits used when rendering values as text
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Text rendered for null values
    pub null_value: String,

    pub array_start: String,
    pub array_end: String,
    pub array_delimiter: String,

    pub iterable_start: String,
    pub iterable_end: String,
    pub iterable_delimiter: String,

    pub map_start: String,
    pub map_end: String,
    pub map_key_value_delimiter: String,
    pub map_entry_delimiter: String,

    /// Maximum number of elements rendered per container (unlimited if unset)
    pub max_elements: Option<usize>,

    /// Appended as the last element when a container is truncated
    pub truncation_marker: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            null_value: "NULL".to_string(),
            array_start: "[".to_string(),
            array_end: "]".to_string(),
            array_delimiter: ", ".to_string(),
            iterable_start: "[".to_string(),
            iterable_end: "]".to_string(),
            iterable_delimiter: ", ".to_string(),
            map_start: "{".to_string(),
            map_end: "}".to_string(),
            map_key_value_delimiter: ":".to_string(),
            map_entry_delimiter: ", ".to_string(),
            max_elements: None,
            truncation_marker: "...".to_string(),
        }
    }
}

impl FormatConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text rendered for null values
    pub fn with_null_value(mut self, text: impl Into<String>) -> Self {
        self.null_value = text.into();
        self
    }

    /// Limit the number of elements rendered per container
    pub fn with_max_elements(mut self, max: usize) -> Self {
        self.max_elements = Some(max);
        self
    }

    /// Set the truncation marker
    pub fn with_truncation_marker(mut self, marker: impl Into<String>) -> Self {
        self.truncation_marker = marker.into();
        self
    }

    /// Set start, end and delimiter for arrays
    pub fn with_array_symbols(
        mut self,
        start: impl Into<String>,
        end: impl Into<String>,
        delimiter: impl Into<String>,
    ) -> Self {
        self.array_start = start.into();
        self.array_end = end.into();
        self.array_delimiter = delimiter.into();
        self
    }

    /// Set start, end and delimiter for other iterables
    pub fn with_iterable_symbols(
        mut self,
        start: impl Into<String>,
        end: impl Into<String>,
        delimiter: impl Into<String>,
    ) -> Self {
        self.iterable_start = start.into();
        self.iterable_end = end.into();
        self.iterable_delimiter = delimiter.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TemplateConfig::default();
        assert_eq!(config.method_name_key, "method");
        assert!(!config.index_access);
        assert_eq!(config.collision, CollisionPolicy::LastWins);
        assert_eq!(config.format.null_value, "NULL");
        assert_eq!(config.format.max_elements, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = TemplateConfig::new()
            .with_method_name_key("m")
            .with_index_access(true)
            .with_format(FormatConfig::new().with_max_elements(2));

        assert_eq!(config.method_name_key, "m");
        assert!(config.index_access);
        assert_eq!(config.format.max_elements, Some(2));
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = TemplateConfig::from_str(
            r#"
method_name_key = "name"
collision = "first_wins"

[format]
null_value = "null"
max_elements = 3
"#,
        )
        .expect("Should parse");
        assert_eq!(config.method_name_key, "name");
        assert_eq!(config.collision, CollisionPolicy::FirstWins);
        assert_eq!(config.format.null_value, "null");
        assert_eq!(config.format.max_elements, Some(3));
        assert_eq!(config.format.array_start, "[");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = TemplateConfig::from_str("").expect("Should parse");
        assert_eq!(config, TemplateConfig::default());
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = TemplateConfig::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
