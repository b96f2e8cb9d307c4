//! CONCAT(...) function

use log::trace;
use std::sync::LazyLock;

use crate::ast::{ExprRef, FunctionNode, Operands};
use crate::core::{Result, SparqlExprError};
use crate::evaluator::{EvaluationContext, RowId};
use crate::model::{Literal, Term};
use crate::registry::functions::literal_argument;
use crate::registry::signature::{FunctionSignature, ValueType};

/// CONCAT(...) - concatenates the lexical forms of its arguments
///
/// The result is `xsd:string` only when every argument is, carries the shared
/// language tag when all arguments agree on one (or on having none), and is a
/// plain literal otherwise. Zero arguments give an empty `xsd:string`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcatFunction {
    args: Operands,
}

impl ConcatFunction {
    pub const FUNCTOR: &'static str = "CONCAT";

    pub fn new(args: impl IntoIterator<Item = ExprRef>) -> Self {
        Self {
            args: args.into_iter().collect(),
        }
    }

    pub fn from_operands(args: Operands) -> Result<Self> {
        Self::signature().check_arity(args.len())?;
        Ok(Self { args })
    }

    pub fn signature() -> &'static FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::variadic(ConcatFunction::FUNCTOR, vec![], ValueType::String)
        });
        &SIG
    }

    pub fn arguments(&self) -> &[ExprRef] {
        &self.args
    }
}

impl FunctionNode for ConcatFunction {
    fn functor(&self) -> &str {
        Self::FUNCTOR
    }

    fn operands(&self) -> &[ExprRef] {
        &self.args
    }

    fn evaluate(&self, context: &dyn EvaluationContext, row: RowId) -> Result<Term> {
        let mut output = String::new();
        let mut all_typed = true;
        let mut all_same_tag = true;
        let mut tag: Option<String> = None;

        for arg in &self.args {
            let literal = literal_argument(arg, context, row, Self::FUNCTOR)?;
            match literal.datatype() {
                Some(datatype) if !literal.is_string_typed() => {
                    return Err(SparqlExprError::unsupported_datatype(
                        Self::FUNCTOR,
                        datatype,
                    ));
                }
                Some(_) => {}
                None => all_typed = false,
            }

            let language = literal.language_or_empty();
            match &tag {
                None => tag = Some(language.to_string()),
                Some(first) => all_same_tag &= first == language,
            }
            output.push_str(literal.lexical_form());
        }

        let result = if all_typed {
            Literal::string(output)
        } else if all_same_tag {
            Literal::lang_tagged(output, tag.unwrap_or_default())
        } else {
            Literal::plain(output)
        };
        trace!("{} of {} arguments -> {result}", Self::FUNCTOR, self.args.len());
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
    use crate::model::xsd;

    fn concat(args: impl IntoIterator<Item = Literal>) -> Result<Term> {
        let args = args
            .into_iter()
            .map(|literal| Expression::constant(literal).into_ref());
        ConcatFunction::new(args).evaluate(&BindingTable::with_empty_row(), 0)
    }

    #[test]
    fn test_empty_concat() {
        assert_eq!(concat(Vec::new()).unwrap(), Term::from(Literal::string("")));
    }

    #[test]
    fn test_metadata_preservation() {
        assert_eq!(
            concat([Literal::string("a"), Literal::string("b")]).unwrap(),
            Term::from(Literal::string("ab"))
        );
        assert_eq!(
            concat([Literal::lang_tagged("a", "en"), Literal::lang_tagged("b", "en")]).unwrap(),
            Term::from(Literal::lang_tagged("ab", "en"))
        );
        assert_eq!(
            concat([Literal::string("a"), Literal::plain("b")]).unwrap(),
            Term::from(Literal::plain("ab"))
        );
        assert_eq!(
            concat([Literal::lang_tagged("a", "en"), Literal::lang_tagged("b", "fr")]).unwrap(),
            Term::from(Literal::plain("ab"))
        );
        assert_eq!(
            concat([Literal::lang_tagged("a", "en"), Literal::string("b")]).unwrap(),
            Term::from(Literal::plain("ab"))
        );
    }

    #[test]
    fn test_rejects_other_datatypes() {
        let err = concat([Literal::plain("a"), Literal::typed("1", xsd::INTEGER)]).unwrap_err();
        assert!(matches!(err, SparqlExprError::UnsupportedDatatype { .. }));
    }

    #[test]
    fn test_rejects_non_literals() {
        let expr = ConcatFunction::new([Expression::constant(Term::iri("urn:a")).into_ref()]);
        let err = expr.evaluate(&BindingTable::with_empty_row(), 0).unwrap_err();
        assert!(err.is_type_mismatch());
    }
}
