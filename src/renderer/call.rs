//! The method call a step name is rendered for

use crate::value::Value;

/// Method name plus declared parameter names and actual argument values
///
/// Parameter names may be missing for individual arguments (`None`) or
/// entirely (an empty list), in which case arguments are only reachable by
/// position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallContext {
    pub method_name: String,
    pub parameter_names: Vec<Option<String>>,
    pub arguments: Vec<Value>,
}

impl CallContext {
    /// Create a call with no arguments
    pub fn new(method_name: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            parameter_names: Vec::new(),
            arguments: Vec::new(),
        }
    }

    /// Create a call from separately captured names and values
    ///
    /// The two lists are not checked against each other here; a length
    /// mismatch surfaces when the call is rendered.
    pub fn from_parts(
        method_name: impl Into<String>,
        parameter_names: Vec<Option<String>>,
        arguments: Vec<Value>,
    ) -> Self {
        Self {
            method_name: method_name.into(),
            parameter_names,
            arguments,
        }
    }

    /// Append a named argument
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameter_names.push(Some(name.into()));
        self.arguments.push(value.into());
        self
    }

    /// Append an argument without a parameter name
    pub fn with_positional(mut self, value: impl Into<Value>) -> Self {
        self.parameter_names.push(None);
        self.arguments.push(value.into());
        self
    }
}
