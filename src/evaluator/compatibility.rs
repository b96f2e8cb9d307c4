//! Argument compatibility for binary string functions
//!
//! Decides whether two literals may be compared as strings. The rules, first
//! match wins:
//!
//! 1. A typed first argument must be `xsd:string`; the second must then be
//!    `xsd:string` or a plain literal.
//! 2. A language-tagged first argument accepts `xsd:string`, an untagged literal
//!    or a literal with the identical tag.
//! 3. A plain first argument accepts `xsd:string` or an untagged literal.

use crate::core::{Result, SparqlExprError};
use crate::model::Literal;

/// Check whether `second` may be tested against `first`
pub fn is_compatible(first: &Literal, second: &Literal) -> bool {
    if first.is_typed() && !first.is_string_typed() {
        return false;
    }
    // A typed second argument is only ever acceptable as xsd:string
    if second.is_typed() {
        return second.is_string_typed();
    }
    match (first.language(), second.language()) {
        (_, None) => true,
        (Some(first), Some(second)) => first == second,
        (None, Some(_)) => false,
    }
}

/// Like [`is_compatible`], raising a type mismatch for an incompatible pair
pub fn check_compatible(functor: &str, first: &Literal, second: &Literal) -> Result<()> {
    if is_compatible(first, second) {
        Ok(())
    } else {
        Err(SparqlExprError::incompatible_arguments(functor))
    }
}
