//! STRBEFORE(string, delimiter) function

use smallvec::smallvec;
use std::sync::LazyLock;

use super::compatible_arguments;
use crate::ast::{ExprRef, FunctionNode, Operands};
use crate::core::Result;
use crate::evaluator::{EvaluationContext, RowId};
use crate::model::{Literal, Term};
use crate::registry::signature::{FunctionSignature, ParameterInfo, ValueType};

/// STRBEFORE(string, delimiter) - the part of the string before the first match
///
/// A match keeps the string's datatype or language tag. No match gives an empty
/// plain literal.
#[derive(Debug, Clone, PartialEq)]
pub struct StrBeforeFunction {
    args: Operands,
}

impl StrBeforeFunction {
    pub const FUNCTOR: &'static str = "STRBEFORE";

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
                StrBeforeFunction::FUNCTOR,
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

impl FunctionNode for StrBeforeFunction {
    fn functor(&self) -> &str {
        Self::FUNCTOR
    }

    fn operands(&self) -> &[ExprRef] {
        &self.args
    }

    fn evaluate(&self, context: &dyn EvaluationContext, row: RowId) -> Result<Term> {
        let (string, delimiter) = compatible_arguments(Self::FUNCTOR, &self.args, context, row)?;
        let lexical = string.lexical_form();
        let result = match lexical.find(delimiter.lexical_form()) {
            Some(index) => string.with_lexical_form(&lexical[..index]),
            None => Literal::plain(""),
        };
        Ok(result.into())
    }

    fn with_operands(&self, operands: Operands) -> Self {
        Self { args: operands }
    }
}
