//! STRSTARTS(string, prefix) function

use smallvec::smallvec;
use std::sync::LazyLock;

use super::compatible_arguments;
use crate::ast::{ExprRef, FunctionNode, Operands};
use crate::core::Result;
use crate::evaluator::{EvaluationContext, RowId};
use crate::model::{Literal, Term};
use crate::registry::signature::{FunctionSignature, ParameterInfo, ValueType};

/// STRSTARTS(string, prefix) - true when the string begins with the prefix
///
/// Both arguments must be compatible string literals; an incompatible pair is a
/// type mismatch rather than `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct StrStartsFunction {
    args: Operands,
}

impl StrStartsFunction {
    pub const FUNCTOR: &'static str = "STRSTARTS";

    pub fn new(string: ExprRef, prefix: ExprRef) -> Self {
        Self {
            args: smallvec![string, prefix],
        }
    }

    pub fn from_operands(args: Operands) -> Result<Self> {
        Self::signature().check_arity(args.len())?;
        Ok(Self { args })
    }

    pub fn signature() -> &'static FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                StrStartsFunction::FUNCTOR,
                vec![
                    ParameterInfo::required("string", ValueType::String),
                    ParameterInfo::required("prefix", ValueType::String),
                ],
                ValueType::Boolean,
            )
        });
        &SIG
    }

    pub fn arguments(&self) -> &[ExprRef] {
        &self.args
    }
}

impl FunctionNode for StrStartsFunction {
    fn functor(&self) -> &str {
        Self::FUNCTOR
    }

    fn operands(&self) -> &[ExprRef] {
        &self.args
    }

    fn evaluate(&self, context: &dyn EvaluationContext, row: RowId) -> Result<Term> {
        let (string, prefix) = compatible_arguments(Self::FUNCTOR, &self.args, context, row)?;
        let result = string.lexical_form().starts_with(prefix.lexical_form());
        Ok(Literal::boolean(result).into())
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

    #[test]
    fn test_starts_with() {
        let mut table = BindingTable::new();
        let row = table.push_row([
            ("s", Term::from(Literal::lang_tagged("foobar", "en"))),
            ("p", Term::from(Literal::lang_tagged("foo", "en"))),
        ]);
        let expr = StrStartsFunction::new(
            Expression::variable("s").into_ref(),
            Expression::variable("p").into_ref(),
        );
        assert_eq!(
            expr.evaluate(&table, row).unwrap(),
            Term::from(Literal::boolean(true))
        );
    }

    #[test]
    fn test_non_string_first_argument() {
        let expr = StrStartsFunction::new(
            Expression::constant(Literal::typed("12", xsd::INTEGER)).into_ref(),
            Expression::constant(Literal::plain("1")).into_ref(),
        );
        let err = expr.evaluate(&BindingTable::with_empty_row(), 0).unwrap_err();
        assert!(err.is_type_mismatch());
    }
}
