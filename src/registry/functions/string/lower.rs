//! LCASE(string) function

use smallvec::smallvec;
use std::sync::LazyLock;

use crate::ast::{ExprRef, FunctionNode, Operands};
use crate::core::Result;
use crate::evaluator::{EvaluationContext, RowId};
use crate::model::Term;
use crate::registry::functions::literal_argument;
use crate::registry::signature::{FunctionSignature, ParameterInfo, ValueType};

/// LCASE(string) - lower-cases the lexical form, keeping datatype or language tag
#[derive(Debug, Clone, PartialEq)]
pub struct LCaseFunction {
    args: Operands,
}

impl LCaseFunction {
    pub const FUNCTOR: &'static str = "LCASE";

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
                LCaseFunction::FUNCTOR,
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

impl FunctionNode for LCaseFunction {
    fn functor(&self) -> &str {
        Self::FUNCTOR
    }

    fn operands(&self) -> &[ExprRef] {
        &self.args
    }

    fn evaluate(&self, context: &dyn EvaluationContext, row: RowId) -> Result<Term> {
        let literal = literal_argument(self.argument(), context, row, Self::FUNCTOR)?;
        let lower = literal.lexical_form().to_lowercase();
        Ok(literal.with_lexical_form(lower).into())
    }

    fn with_operands(&self, operands: Operands) -> Self {
        Self { args: operands }
    }
}
