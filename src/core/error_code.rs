//! Error code system similar to the Rust compiler (E0001, E0002, etc.)
//!
//! Every error raised by the crate carries a code of the form `SE0051`. Codes are
//! grouped by range so callers can triage failures without matching on variants.

use std::fmt;

/// Error categories for organizing error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Expression evaluation errors (SE0051-SE0100)
    Evaluation,
    /// Function registry errors (SE0101-SE0150)
    Registry,
    /// Configuration errors (SE0151-SE0200)
    Configuration,
    /// Update/transfer command errors (SE0201-SE0250)
    Update,
}

/// Error code following the Rust compiler pattern (SE0001, SE0002, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    pub code: u16,
}

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self { code }
    }

    /// Get the full error code string (e.g., "SE0051")
    pub fn code_str(&self) -> String {
        format!("SE{:04}", self.code)
    }

    /// Get error information from the registry
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_REGISTRY.get_error_info(self)
    }

    /// Get error category for this error code
    pub fn category(&self) -> ErrorCategory {
        match self.code {
            101..=150 => ErrorCategory::Registry,
            151..=200 => ErrorCategory::Configuration,
            201..=250 => ErrorCategory::Update,
            _ => ErrorCategory::Evaluation,
        }
    }

    /// Get human-readable description for this error code
    pub fn description(&self) -> &'static str {
        self.info().title
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SE{:04}", self.code)
    }
}

/// Error information with a short title and a hint for the query author
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Error code number
    pub code: u16,
    /// Human-readable error title
    pub title: &'static str,
    /// Detailed description of the error
    pub description: &'static str,
    /// Help information and suggested solutions
    pub help: &'static str,
}

impl ErrorInfo {
    pub const fn new(
        code: u16,
        title: &'static str,
        description: &'static str,
        help: &'static str,
    ) -> Self {
        Self {
            code,
            title,
            description,
            help,
        }
    }
}

/// Central error registry containing all error definitions
pub struct ErrorRegistry;

impl ErrorRegistry {
    /// Get error information for a given error code
    pub fn get_error_info(&self, error_code: &ErrorCode) -> &'static ErrorInfo {
        match error_code.code {
            51 => &SE0051_INFO,
            52 => &SE0052_INFO,
            53 => &SE0053_INFO,
            54 => &SE0054_INFO,
            101 => &SE0101_INFO,
            102 => &SE0102_INFO,
            151 => &SE0151_INFO,
            201 => &SE0201_INFO,
            _ => &UNKNOWN_ERROR_INFO,
        }
    }
}

/// Global error registry instance
pub static ERROR_REGISTRY: ErrorRegistry = ErrorRegistry;

// Evaluation Error Codes (SE0051-SE0100)
pub const SE0051: ErrorCode = ErrorCode::new(51); // Type mismatch
pub const SE0052: ErrorCode = ErrorCode::new(52); // Null operand
pub const SE0053: ErrorCode = ErrorCode::new(53); // Integer conversion failure
pub const SE0054: ErrorCode = ErrorCode::new(54); // Unsupported datatype

// Registry Error Codes (SE0101-SE0150)
pub const SE0101: ErrorCode = ErrorCode::new(101); // Unknown function
pub const SE0102: ErrorCode = ErrorCode::new(102); // Invalid arity

// Configuration Error Codes (SE0151-SE0200)
pub const SE0151: ErrorCode = ErrorCode::new(151); // Invalid configuration

// Update Error Codes (SE0201-SE0250)
pub const SE0201: ErrorCode = ErrorCode::new(201); // Graph not found

static SE0051_INFO: ErrorInfo = ErrorInfo::new(
    51,
    "Type mismatch",
    "An operand is not a literal, is not numeric where an index is required, or carries a datatype/language tag combination the function cannot compare.",
    "Check the operand kinds. String functions only compare plain literals, language-tagged literals and xsd:string literals whose language tags agree.",
);

static SE0052_INFO: ErrorInfo = ErrorInfo::new(
    52,
    "Null operand",
    "A required operand evaluated to no value, usually because a variable is unbound in the current row.",
    "Bind the variable before calling the function, or guard the call with BOUND().",
);

static SE0053_INFO: ErrorInfo = ErrorInfo::new(
    53,
    "Integer conversion failure",
    "A numeric index operand has a lexical form that cannot be read as an integer.",
    "Make sure index operands are well-formed numeric literals with a finite value.",
);

static SE0054_INFO: ErrorInfo = ErrorInfo::new(
    54,
    "Unsupported datatype",
    "An operand carries a datatype the function does not accept.",
    "CONCAT only accepts plain literals, language-tagged literals and xsd:string literals. Use STR() to drop other datatypes first.",
);

static SE0101_INFO: ErrorInfo = ErrorInfo::new(
    101,
    "Unknown function",
    "A function was requested that is not registered in the function registry.",
    "Check the functor for typos and verify that the function family is enabled in the registry configuration.",
);

static SE0102_INFO: ErrorInfo = ErrorInfo::new(
    102,
    "Invalid arity",
    "A function was built with a number of operands outside its signature.",
    "Check the function signature for the accepted number of arguments.",
);

static SE0151_INFO: ErrorInfo = ErrorInfo::new(
    151,
    "Invalid configuration",
    "The registry configuration could not be parsed.",
    "Check the configuration document against the RegistryConfig fields.",
);

static SE0201_INFO: ErrorInfo = ErrorInfo::new(
    201,
    "Graph not found",
    "A transfer command referenced a source graph that does not exist in the dataset.",
    "Create the graph first or run the command with SILENT.",
);

static UNKNOWN_ERROR_INFO: ErrorInfo = ErrorInfo::new(
    0,
    "Unknown error",
    "An error occurred that has no registered description.",
    "Report the error code together with the expression that produced it.",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_formatting() {
        assert_eq!(SE0051.code_str(), "SE0051");
        assert_eq!(SE0201.to_string(), "SE0201");
    }

    #[test]
    fn test_categories() {
        assert_eq!(SE0053.category(), ErrorCategory::Evaluation);
        assert_eq!(SE0102.category(), ErrorCategory::Registry);
        assert_eq!(SE0151.category(), ErrorCategory::Configuration);
        assert_eq!(SE0201.category(), ErrorCategory::Update);
    }

    #[test]
    fn test_registry_lookup() {
        assert_eq!(SE0052.description(), "Null operand");
        assert_eq!(ErrorCode::new(999).info().code, 0);
    }
}
