//! STRLEN(string) function

use smallvec::smallvec;
use std::sync::LazyLock;

use crate::ast::{ExprRef, FunctionNode, Operands};
use crate::core::Result;
use crate::evaluator::{EvaluationContext, RowId};
use crate::model::{Literal, Term};
use crate::registry::functions::literal_argument;
use crate::registry::signature::{FunctionSignature, ParameterInfo, ValueType};

/// STRLEN(string) - number of characters in the lexical form, as `xsd:integer`
///
/// Any literal is accepted; the length of a lexical form is always defined.
#[derive(Debug, Clone, PartialEq)]
pub struct StrLenFunction {
    args: Operands,
}

impl StrLenFunction {
    pub const FUNCTOR: &'static str = "STRLEN";

    pub fn new(string: ExprRef) -> Self {
        Self {
            args: smallvec![string],
        }
    }

    pub fn from_operands(args: Operands) -> Result<Self> {
        Self::signature().check_arity(args.len())?;
        Ok(Self { args })
    }

    pub fn signature() -> &'static FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                StrLenFunction::FUNCTOR,
                vec![ParameterInfo::required("string", ValueType::Literal)],
                ValueType::Integer,
            )
        });
        &SIG
    }

    pub fn argument(&self) -> &ExprRef {
        &self.args[0]
    }
}

impl FunctionNode for StrLenFunction {
    fn functor(&self) -> &str {
        Self::FUNCTOR
    }

    fn operands(&self) -> &[ExprRef] {
        &self.args
    }

    fn evaluate(&self, context: &dyn EvaluationContext, row: RowId) -> Result<Term> {
        let literal = literal_argument(self.argument(), context, row, Self::FUNCTOR)?;
        let length = literal.lexical_form().chars().count();
        Ok(Literal::integer(length as i64).into())
    }

    fn with_operands(&self, operands: Operands) -> Self {
        Self { args: operands }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expression;
    use crate::evaluator::BindingTable;
    use crate::model::xsd;

    fn strlen(literal: Literal) -> Term {
        StrLenFunction::new(Expression::constant(literal).into_ref())
            .evaluate(&BindingTable::with_empty_row(), 0)
            .unwrap()
    }

    #[test]
    fn test_counts_characters() {
        assert_eq!(strlen(Literal::plain("chat")), Term::from(Literal::integer(4)));
        assert_eq!(strlen(Literal::lang_tagged("été", "fr")), Term::from(Literal::integer(3)));
        assert_eq!(strlen(Literal::string("")), Term::from(Literal::integer(0)));
    }

    #[test]
    fn test_any_datatype() {
        assert_eq!(
            strlen(Literal::typed("2024-01-01", xsd::DATE_TIME)),
            Term::from(Literal::integer(10))
        );
    }
}
