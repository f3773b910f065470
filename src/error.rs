//! Error types for rendering and placeholder resolution

use thiserror::Error;

/// Errors that abort a render call
///
/// Only broken call contexts escape a render. Per-placeholder problems are
/// reported as [`ResolveError`]s through a diagnostic sink instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Parameter names and argument values disagree in length
    #[error(
        "argument index {index} out of range ({names} parameter names, {arguments} arguments)"
    )]
    IndexOutOfRange {
        index: usize,
        names: usize,
        arguments: usize,
    },
}

impl RenderError {
    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, names: usize, arguments: usize) -> Self {
        Self::IndexOutOfRange {
            index,
            names,
            arguments,
        }
    }
}

/// Errors that can occur while resolving a single placeholder
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The root segment names no parameter, index or method-name key
    #[error("param - {name} was not found")]
    ParameterNotFound { name: String },

    /// A later segment names no field or key on the value reached so far
    #[error("unable to resolve '{segment}' in path '{path}'")]
    FieldNotFound { path: String, segment: String },
}

impl ResolveError {
    /// Create a missing parameter error
    pub fn parameter_not_found(name: impl Into<String>) -> Self {
        Self::ParameterNotFound { name: name.into() }
    }

    /// Create a missing field error for `segments[..=failed]`
    pub fn field_not_found(segments: &[&str], failed: usize) -> Self {
        let end = (failed + 1).min(segments.len());
        Self::FieldNotFound {
            path: segments[..end].join("."),
            segment: segments.get(failed).copied().unwrap_or_default().to_string(),
        }
    }

    /// The dotted path that failed, up to and including the offending segment
    pub fn path(&self) -> &str {
        match self {
            Self::ParameterNotFound { name } => name,
            Self::FieldNotFound { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_display() {
        let err = RenderError::index_out_of_range(2, 2, 3);
        assert_eq!(
            err.to_string(),
            "argument index 2 out of range (2 parameter names, 3 arguments)"
        );
    }

    #[test]
    fn test_parameter_not_found_display() {
        let err = ResolveError::parameter_not_found("username");
        assert!(err.to_string().contains("username"));
        assert_eq!(err.path(), "username");
    }

    #[test]
    fn test_field_not_found_truncates_path() {
        let err = ResolveError::field_not_found(&["user", "address", "city"], 1);
        assert_eq!(
            err,
            ResolveError::FieldNotFound {
                path: "user.address".to_string(),
                segment: "address".to_string(),
            }
        );
        assert!(err.to_string().contains("user.address"));
    }
}
