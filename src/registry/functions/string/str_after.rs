//! STRAFTER(string, delimiter) function

use smallvec::smallvec;
use std::sync::LazyLock;

use super::compatible_arguments;
use crate::ast::{ExprRef, FunctionNode, Operands};
use crate::core::Result;
use crate::evaluator::{EvaluationContext, RowId};
use crate::model::{Literal, Term};
use crate::registry::signature::{FunctionSignature, ParameterInfo, ValueType};

/// STRAFTER(string, delimiter) - the part of the string after the first match
#[derive(Debug, Clone, PartialEq)]
pub struct StrAfterFunction {
    args: Operands,
}

impl StrAfterFunction {
    pub const FUNCTOR: &'static str = "STRAFTER";

    pub fn new(string: ExprRef, delimiter: ExprRef) -> Self {
        Self {
            args: smallvec![string, delimiter],
        }
    }

    pub fn from_operands(args: Operands) -> Result<Self> {
        Self::signature().check_arity(args.len())?;
        Ok(Self { args })
    }

    pub fn signature() -> &'static FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                StrAfterFunction::FUNCTOR,
                vec![
                    ParameterInfo::required("string", ValueType::String),
                    ParameterInfo::required("delimiter", ValueType::String),
                ],
                ValueType::String,
            )
        });
        &SIG
    }

    pub fn arguments(&self) -> &[ExprRef] {
        &self.args
    }
}

impl FunctionNode for StrAfterFunction {
    fn functor(&self) -> &str {
        Self::FUNCTOR
    }

    fn operands(&self) -> &[ExprRef] {
        &self.args
    }

    fn evaluate(&self, context: &dyn EvaluationContext, row: RowId) -> Result<Term> {
        let (string, delimiter) = compatible_arguments(Self::FUNCTOR, &self.args, context, row)?;
        let lexical = string.lexical_form();
        let needle = delimiter.lexical_form();
        let result = match lexical.find(needle) {
            Some(index) => string.with_lexical_form(&lexical[index + needle.len()..]),
            None => Literal::plain(""),
        };
        Ok(result.into())
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

    fn after(string: Literal, delimiter: Literal) -> Term {
        StrAfterFunction::new(
            Expression::constant(string).into_ref(),
            Expression::constant(delimiter).into_ref(),
        )
        .evaluate(&BindingTable::with_empty_row(), 0)
        .unwrap()
    }

    #[test]
    fn test_str_after() {
        assert_eq!(
            after(Literal::string("abc"), Literal::plain("b")),
            Term::from(Literal::string("c"))
        );
        assert_eq!(
            after(Literal::lang_tagged("abc", "en"), Literal::lang_tagged("z", "en")),
            Term::from(Literal::plain(""))
        );
        assert_eq!(
            after(Literal::plain("abc"), Literal::plain("")),
            Term::from(Literal::plain("abc"))
        );
    }
}
