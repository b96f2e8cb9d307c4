//! Built-in function implementations

pub mod math;
pub mod string;

pub use math::*;
pub use string::*;

use crate::ast::Expression;
use crate::core::{Result, SparqlExprError};
use crate::evaluator::{EvaluationContext, RowId};
use crate::model::{Literal, Term};

/// Evaluate a required operand that must produce a literal
pub(crate) fn literal_argument(
    operand: &Expression,
    context: &dyn EvaluationContext,
    row: RowId,
    functor: &str,
) -> Result<Literal> {
    match operand.evaluate(context, row)? {
        Some(Term::Literal(literal)) => Ok(literal),
        Some(_) => Err(SparqlExprError::non_literal(functor)),
        None => Err(SparqlExprError::null_operand(functor)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::BindingTable;

    #[test]
    fn test_literal_argument() {
        let mut table = BindingTable::new();
        let row = table.push_row([
            ("lit", Term::from(Literal::plain("a"))),
            ("iri", Term::iri("urn:a")),
        ]);

        let literal = literal_argument(&Expression::variable("lit"), &table, row, "F").unwrap();
        assert_eq!(literal, Literal::plain("a"));

        let err = literal_argument(&Expression::variable("iri"), &table, row, "F").unwrap_err();
        assert_eq!(err, SparqlExprError::non_literal("F"));

        let err = literal_argument(&Expression::variable("none"), &table, row, "F").unwrap_err();
        assert_eq!(err, SparqlExprError::null_operand("F"));
    }
}
