//! Function signatures used for arity validation and documentation

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Result, SparqlExprError};

/// Broad value class of a parameter or result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// Any literal
    Literal,
    /// Plain, language-tagged or `xsd:string` literal
    String,
    /// Literal of an XML Schema numeric type
    Numeric,
    Integer,
    Double,
    Boolean,
}

/// Function signature
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionSignature {
    /// Canonical functor
    pub name: String,
    /// Parameters in order
    pub parameters: Vec<ParameterInfo>,
    /// Result type
    pub return_type: ValueType,
    /// Minimum number of arguments
    pub min_arity: usize,
    /// Maximum number of arguments (None for variadic)
    pub max_arity: Option<usize>,
}

/// Parameter information for functions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterInfo {
    pub name: String,
    pub param_type: ValueType,
    /// Whether this parameter may be omitted
    pub optional: bool,
}

impl FunctionSignature {
    /// Create a fixed-arity signature; optional parameters lower the minimum
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<ParameterInfo>,
        return_type: ValueType,
    ) -> Self {
        let min_arity = parameters.iter().filter(|p| !p.optional).count();
        let max_arity = Some(parameters.len());
        Self {
            name: name.into(),
            parameters,
            return_type,
            min_arity,
            max_arity,
        }
    }

    /// Create a signature accepting any number of trailing arguments
    pub fn variadic(
        name: impl Into<String>,
        parameters: Vec<ParameterInfo>,
        return_type: ValueType,
    ) -> Self {
        let min_arity = parameters.iter().filter(|p| !p.optional).count();
        Self {
            name: name.into(),
            parameters,
            return_type,
            min_arity,
            max_arity: None,
        }
    }

    /// Same signature under another name
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn accepts_arity(&self, count: usize) -> bool {
        count >= self.min_arity && self.max_arity.is_none_or(|max| count <= max)
    }

    /// Fail with an arity error unless `count` arguments are accepted
    pub fn check_arity(&self, count: usize) -> Result<()> {
        if self.accepts_arity(count) {
            Ok(())
        } else {
            Err(SparqlExprError::invalid_arity(
                &self.name,
                self.min_arity,
                self.max_arity,
                count,
            ))
        }
    }
}

impl ParameterInfo {
    /// Create a required parameter
    pub fn required(name: impl Into<String>, param_type: ValueType) -> Self {
        Self {
            name: name.into(),
            param_type,
            optional: false,
        }
    }

    /// Create an optional parameter
    pub fn optional(name: impl Into<String>, param_type: ValueType) -> Self {
        Self {
            name: name.into(),
            param_type,
            optional: true,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Literal => "literal",
            Self::String => "string",
            Self::Numeric => "numeric",
            Self::Integer => "integer",
            Self::Double => "double",
            Self::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if param.optional {
                write!(f, "[{}: {}]", param.name, param.param_type)?;
            } else {
                write!(f, "{}: {}", param.name, param.param_type)?;
            }
        }
        if self.max_arity.is_none() {
            write!(f, "...")?;
        }
        write!(f, ") -> {}", self.return_type)
    }
}
