//! Error types raised while building and evaluating expressions

use thiserror::Error;

pub use super::error_code::*;

/// Main error type of the crate
///
/// The first four variants are the evaluation failures a single function call can
/// raise. They are fatal to that call and propagate to whoever is iterating rows,
/// which decides whether to abort the query or drop the row.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SparqlExprError {
    /// Operand of the wrong kind, or incompatible string arguments
    #[error("{code}: {function}: {message}")]
    TypeMismatch {
        code: ErrorCode,
        function: String,
        message: String,
    },

    /// Required operand evaluated to no value
    #[error("{code}: {function}: null argument")]
    NullOperand { code: ErrorCode, function: String },

    /// Numeric index whose lexical form is not an integer
    #[error("{code}: {function}: non-integer index '{lexical}'")]
    ConversionFailure {
        code: ErrorCode,
        function: String,
        lexical: String,
    },

    /// Operand typed with a datatype the function does not accept
    #[error("{code}: {function}: unsupported datatype <{datatype}>")]
    UnsupportedDatatype {
        code: ErrorCode,
        function: String,
        datatype: String,
    },

    /// No function registered under the requested functor
    #[error("{code}: unknown function '{functor}'")]
    UnknownFunction { code: ErrorCode, functor: String },

    /// Function built with the wrong number of operands
    #[error("{code}: function '{functor}' expects {min}-{} arguments, got {actual}", max.map_or("∞".to_string(), |n| n.to_string()))]
    InvalidArity {
        code: ErrorCode,
        functor: String,
        min: usize,
        max: Option<usize>,
        actual: usize,
    },

    /// Configuration document could not be loaded
    #[error("{code}: invalid configuration: {message}")]
    Configuration { code: ErrorCode, message: String },

    /// Transfer command source graph is missing
    #[error("{code}: graph {graph} does not exist")]
    GraphNotFound { code: ErrorCode, graph: String },
}

impl SparqlExprError {
    /// Create a type mismatch error
    pub fn type_mismatch(function: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TypeMismatch {
            code: SE0051,
            function: function.into(),
            message: message.into(),
        }
    }

    /// Operand evaluated to an IRI or blank node where a literal is required
    pub fn non_literal(function: impl Into<String>) -> Self {
        Self::type_mismatch(function, "non-literal argument")
    }

    /// Index operand is not a numeric literal
    pub fn non_numeric_index(function: impl Into<String>) -> Self {
        Self::type_mismatch(function, "non-numeric index")
    }

    /// Binary string function arguments failed the compatibility check
    pub fn incompatible_arguments(function: impl Into<String>) -> Self {
        Self::type_mismatch(function, "incompatible string arguments")
    }

    /// Create a null operand error
    pub fn null_operand(function: impl Into<String>) -> Self {
        Self::NullOperand {
            code: SE0052,
            function: function.into(),
        }
    }

    /// Create an integer conversion error
    pub fn conversion_failure(function: impl Into<String>, lexical: impl Into<String>) -> Self {
        Self::ConversionFailure {
            code: SE0053,
            function: function.into(),
            lexical: lexical.into(),
        }
    }

    /// Create an unsupported datatype error
    pub fn unsupported_datatype(function: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self::UnsupportedDatatype {
            code: SE0054,
            function: function.into(),
            datatype: datatype.into(),
        }
    }

    /// Create an unknown function error
    pub fn unknown_function(functor: impl Into<String>) -> Self {
        Self::UnknownFunction {
            code: SE0101,
            functor: functor.into(),
        }
    }

    /// Create an arity error
    pub fn invalid_arity(
        functor: impl Into<String>,
        min: usize,
        max: Option<usize>,
        actual: usize,
    ) -> Self {
        Self::InvalidArity {
            code: SE0102,
            functor: functor.into(),
            min,
            max,
            actual,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            code: SE0151,
            message: message.into(),
        }
    }

    /// Create a missing graph error
    pub fn graph_not_found(graph: impl Into<String>) -> Self {
        Self::GraphNotFound {
            code: SE0201,
            graph: graph.into(),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &ErrorCode {
        match self {
            Self::TypeMismatch { code, .. } => code,
            Self::NullOperand { code, .. } => code,
            Self::ConversionFailure { code, .. } => code,
            Self::UnsupportedDatatype { code, .. } => code,
            Self::UnknownFunction { code, .. } => code,
            Self::InvalidArity { code, .. } => code,
            Self::Configuration { code, .. } => code,
            Self::GraphNotFound { code, .. } => code,
        }
    }

    /// Get error information with help text
    pub fn error_info(&self) -> &'static ErrorInfo {
        self.error_code().info()
    }

    /// Whether this is a type mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, SparqlExprError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SparqlExprError::non_literal("CONTAINS");
        assert_eq!(err.to_string(), "SE0051: CONTAINS: non-literal argument");

        let err = SparqlExprError::null_operand("UCASE");
        assert_eq!(err.to_string(), "SE0052: UCASE: null argument");

        let err = SparqlExprError::invalid_arity("SUBSTR", 2, Some(3), 1);
        assert_eq!(
            err.to_string(),
            "SE0102: function 'SUBSTR' expects 2-3 arguments, got 1"
        );

        let err = SparqlExprError::invalid_arity("CONCAT", 0, None, 1);
        assert!(err.to_string().contains("0-∞"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SparqlExprError::conversion_failure("SUBSTR", "1.x").error_code(),
            &SE0053
        );
        assert_eq!(
            SparqlExprError::unsupported_datatype("CONCAT", "urn:x")
                .error_info()
                .title,
            "Unsupported datatype"
        );
        assert!(SparqlExprError::non_numeric_index("SUBSTR").is_type_mismatch());
        assert!(!SparqlExprError::null_operand("SUBSTR").is_type_mismatch());
    }
}
