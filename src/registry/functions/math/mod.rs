//! Unary numeric extension functions

mod unary;

pub use unary::{NumericFunction, UnaryNumericFunction};

use crate::ast::Expression;
use crate::registry::FunctionRegistry;

/// XPath math namespace for the trigonometric functions and square root
pub const XPATH_MATH_NAMESPACE: &str = "http://www.w3.org/2005/xpath-functions/math#";

/// Namespace of the angle-unit conversion functions
pub const EXTENSION_NAMESPACE: &str = "https://octofhir.github.io/sparql-expr/fn#";

/// Register every unary numeric function under its IRI
pub fn register_math_functions(registry: &mut FunctionRegistry) {
    for kind in NumericFunction::ALL {
        registry.register(UnaryNumericFunction::signature(kind), move |args| {
            Ok(Expression::UnaryNumeric(UnaryNumericFunction::from_operands(
                kind, args,
            )?))
        });
    }
}
