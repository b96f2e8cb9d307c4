//! UCASE(string) function

use smallvec::smallvec;
use std::sync::LazyLock;

use crate::ast::{ExprRef, FunctionNode, Operands};
use crate::core::Result;
use crate::evaluator::{EvaluationContext, RowId};
use crate::model::Term;
use crate::registry::functions::literal_argument;
use crate::registry::signature::{FunctionSignature, ParameterInfo, ValueType};

/// UCASE(string) - upper-cases the lexical form, keeping datatype or language tag
///
/// Case mapping follows the Unicode default mapping and never depends on the
/// host locale.
#[derive(Debug, Clone, PartialEq)]
pub struct UCaseFunction {
    args: Operands,
}

impl UCaseFunction {
    pub const FUNCTOR: &'static str = "UCASE";

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
                UCaseFunction::FUNCTOR,
                vec![ParameterInfo::required("string", ValueType::Literal)],
                ValueType::Literal,
            )
        });
        &SIG
    }

    pub fn argument(&self) -> &ExprRef {
        &self.args[0]
    }
}

impl FunctionNode for UCaseFunction {
    fn functor(&self) -> &str {
        Self::FUNCTOR
    }

    fn operands(&self) -> &[ExprRef] {
        &self.args
    }

    fn evaluate(&self, context: &dyn EvaluationContext, row: RowId) -> Result<Term> {
        let literal = literal_argument(self.argument(), context, row, Self::FUNCTOR)?;
        let upper = literal.lexical_form().to_uppercase();
        Ok(literal.with_lexical_form(upper).into())
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
    use crate::model::Literal;

    fn ucase(literal: Literal) -> Term {
        UCaseFunction::new(Expression::constant(literal).into_ref())
            .evaluate(&BindingTable::with_empty_row(), 0)
            .unwrap()
    }

    #[test]
    fn test_preserves_metadata() {
        assert_eq!(ucase(Literal::plain("chat")), Term::from(Literal::plain("CHAT")));
        assert_eq!(
            ucase(Literal::lang_tagged("chat", "fr")),
            Term::from(Literal::lang_tagged("CHAT", "fr"))
        );
        assert_eq!(ucase(Literal::string("chat")), Term::from(Literal::string("CHAT")));
    }

    #[test]
    fn test_locale_independent() {
        // Turkish dotless mappings must not apply
        assert_eq!(
            ucase(Literal::lang_tagged("i", "tr")),
            Term::from(Literal::lang_tagged("I", "tr"))
        );
        assert_eq!(ucase(Literal::plain("straße")), Term::from(Literal::plain("STRASSE")));
    }
}
