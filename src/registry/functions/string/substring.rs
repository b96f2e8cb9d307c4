//! SUBSTR(string, start [, length]) function

use log::trace;
use smallvec::{SmallVec, smallvec};
use std::sync::LazyLock;

use crate::ast::{ExprRef, FunctionNode, Operands};
use crate::core::{Result, SparqlExprError};
use crate::evaluator::{EvaluationContext, RowId};
use crate::model::type_coercion::{is_numeric_literal, is_string_literal, to_integer};
use crate::model::{Literal, Term};
use crate::registry::functions::literal_argument;
use crate::registry::signature::{FunctionSignature, ParameterInfo, ValueType};

/// SUBSTR(string, start [, length]) - 1-based substring by character position
///
/// Out-of-range positions never fail. A start below 1 is treated as 1, a start
/// past the end or a length below 1 gives an empty result, and a length running
/// past the end is cut at the end. Results keep the source's datatype or
/// language tag, except that an empty source always gives an empty `xsd:string`.
/// Only non-numeric or non-integer positions are errors.
#[derive(Debug, Clone, PartialEq)]
pub struct SubStrFunction {
    args: Operands,
}

impl SubStrFunction {
    pub const FUNCTOR: &'static str = "SUBSTR";

    pub fn new(string: ExprRef, start: ExprRef, length: Option<ExprRef>) -> Self {
        let mut args: Operands = smallvec![string, start];
        args.extend(length);
        Self { args }
    }

    pub fn from_operands(args: Operands) -> Result<Self> {
        Self::signature().check_arity(args.len())?;
        Ok(Self { args })
    }

    pub fn signature() -> &'static FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                SubStrFunction::FUNCTOR,
                vec![
                    ParameterInfo::required("string", ValueType::String),
                    ParameterInfo::required("start", ValueType::Numeric),
                    ParameterInfo::optional("length", ValueType::Numeric),
                ],
                ValueType::String,
            )
        });
        &SIG
    }

    pub fn string(&self) -> &ExprRef {
        &self.args[0]
    }

    pub fn start(&self) -> &ExprRef {
        &self.args[1]
    }

    pub fn length(&self) -> Option<&ExprRef> {
        self.args.get(2)
    }

    pub fn arguments(&self) -> &[ExprRef] {
        &self.args
    }

    fn index_argument(
        &self,
        operand: &ExprRef,
        context: &dyn EvaluationContext,
        row: RowId,
    ) -> Result<Literal> {
        let literal = literal_argument(operand, context, row, Self::FUNCTOR)?;
        if is_numeric_literal(&literal) {
            Ok(literal)
        } else {
            Err(SparqlExprError::non_numeric_index(Self::FUNCTOR))
        }
    }
}

impl FunctionNode for SubStrFunction {
    fn functor(&self) -> &str {
        Self::FUNCTOR
    }

    fn operands(&self) -> &[ExprRef] {
        &self.args
    }

    fn evaluate(&self, context: &dyn EvaluationContext, row: RowId) -> Result<Term> {
        let source = literal_argument(self.string(), context, row, Self::FUNCTOR)?;
        if !is_string_literal(&source) {
            return Err(SparqlExprError::type_mismatch(
                Self::FUNCTOR,
                "non-string argument",
            ));
        }
        let start = self.index_argument(self.start(), context, row)?;
        let length = self
            .length()
            .map(|operand| self.index_argument(operand, context, row))
            .transpose()?;

        if source.lexical_form().is_empty() {
            return Ok(Literal::string("").into());
        }

        let start = to_integer(&start, Self::FUNCTOR)?.max(1);
        let length = length
            .map(|length| to_integer(&length, Self::FUNCTOR))
            .transpose()?;

        let result = source.with_lexical_form(extract(source.lexical_form(), start, length));
        trace!("{}({source}, {start}, {length:?}) -> {result}", Self::FUNCTOR);
        Ok(result.into())
    }

    fn with_operands(&self, operands: Operands) -> Self {
        Self { args: operands }
    }
}

/// Characters from 1-based `start` (already at least 1), clamped to the string
fn extract(lexical: &str, start: i64, length: Option<i64>) -> String {
    let chars: SmallVec<[char; 32]> = lexical.chars().collect();
    let total = chars.len() as i64;
    let offset = start - 1;

    if length.is_some_and(|length| length < 1) || offset > total {
        return String::new();
    }
    let end = match length {
        Some(length) => offset.saturating_add(length).min(total),
        None => total,
    };
    chars[offset as usize..end as usize].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expression;
    use crate::evaluator::BindingTable;
    use crate::model::xsd;

    fn constant(literal: Literal) -> ExprRef {
        Expression::constant(literal).into_ref()
    }

    fn substr(source: Literal, start: i64, length: Option<i64>) -> Result<Term> {
        SubStrFunction::new(
            constant(source),
            constant(Literal::integer(start)),
            length.map(|length| constant(Literal::integer(length))),
        )
        .evaluate(&BindingTable::with_empty_row(), 0)
    }

    fn plain(lexical: &str) -> Term {
        Term::from(Literal::plain(lexical))
    }

    #[test]
    fn test_clamping() {
        let hello = || Literal::plain("hello");
        assert_eq!(substr(hello(), 1, None).unwrap(), plain("hello"));
        assert_eq!(substr(hello(), 2, None).unwrap(), plain("ello"));
        assert_eq!(substr(hello(), 0, None).unwrap(), plain("hello"));
        assert_eq!(substr(hello(), -3, Some(2)).unwrap(), plain("he"));
        assert_eq!(substr(hello(), 2, Some(100)).unwrap(), plain("ello"));
        assert_eq!(substr(hello(), 10, Some(5)).unwrap(), plain(""));
        assert_eq!(substr(hello(), 6, None).unwrap(), plain(""));
        assert_eq!(substr(hello(), 2, Some(-1)).unwrap(), plain(""));
        assert_eq!(substr(hello(), 2, Some(0)).unwrap(), plain(""));
        assert_eq!(substr(hello(), 2, Some(3)).unwrap(), plain("ell"));
        assert_eq!(substr(hello(), 2, Some(i64::MAX)).unwrap(), plain("ello"));
        assert_eq!(substr(hello(), i64::MAX, None).unwrap(), plain(""));
        assert_eq!(substr(hello(), i64::MIN, Some(3)).unwrap(), plain("hel"));
        assert_eq!(substr(hello(), 1, Some(i64::MIN)).unwrap(), plain(""));
    }

    #[test]
    fn test_out_of_range_typed_indices() {
        let table = BindingTable::with_empty_row();
        let start = |lexical: &str, datatype: &str| {
            SubStrFunction::new(
                constant(Literal::plain("hello")),
                constant(Literal::typed(lexical, datatype)),
                None,
            )
            .evaluate(&table, 0)
        };
        assert_eq!(
            start("79228162514264337593543950335", xsd::DECIMAL).unwrap(),
            plain("")
        );
        assert_eq!(start("99999999999999999999", xsd::INTEGER).unwrap(), plain(""));
        assert_eq!(start("-1e300", xsd::DOUBLE).unwrap(), plain("hello"));
    }

    #[test]
    fn test_empty_source_is_string_typed() {
        for (start, length) in [(1, None), (-5, Some(-5)), (100, Some(2))] {
            assert_eq!(
                substr(Literal::lang_tagged("", "en"), start, length).unwrap(),
                Term::from(Literal::string(""))
            );
        }
    }

    #[test]
    fn test_preserves_metadata() {
        assert_eq!(
            substr(Literal::lang_tagged("bonjour", "fr"), 4, Some(4)).unwrap(),
            Term::from(Literal::lang_tagged("jour", "fr"))
        );
        assert_eq!(
            substr(Literal::string("hello"), 10, None).unwrap(),
            Term::from(Literal::string(""))
        );
        assert_eq!(
            substr(Literal::lang_tagged("hello", "en"), 2, Some(-1)).unwrap(),
            Term::from(Literal::lang_tagged("", "en"))
        );
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(
            substr(Literal::plain("naïve café"), 3, Some(3)).unwrap(),
            plain("ïve")
        );
    }

    #[test]
    fn test_index_errors() {
        let table = BindingTable::with_empty_row();

        let expr = SubStrFunction::new(
            constant(Literal::plain("hello")),
            constant(Literal::plain("2")),
            None,
        );
        let err = expr.evaluate(&table, 0).unwrap_err();
        assert_eq!(err, SparqlExprError::non_numeric_index(SubStrFunction::FUNCTOR));

        let expr = SubStrFunction::new(
            constant(Literal::plain("hello")),
            constant(Literal::integer(1)),
            Some(constant(Literal::typed("two", xsd::INTEGER))),
        );
        let err = expr.evaluate(&table, 0).unwrap_err();
        assert!(matches!(err, SparqlExprError::ConversionFailure { .. }));

        let expr = SubStrFunction::new(
            constant(Literal::integer(12345)),
            constant(Literal::integer(1)),
            None,
        );
        assert!(expr.evaluate(&table, 0).unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_decimal_positions_round() {
        let expr = SubStrFunction::new(
            constant(Literal::plain("hello")),
            constant(Literal::typed("1.5", xsd::DECIMAL)),
            Some(constant(Literal::typed("2.4", xsd::DOUBLE))),
        );
        assert_eq!(
            expr.evaluate(&BindingTable::with_empty_row(), 0).unwrap(),
            plain("el")
        );
    }
}
