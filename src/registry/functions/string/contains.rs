//! CONTAINS(string, pattern) function

use smallvec::smallvec;
use std::sync::LazyLock;

use super::compatible_arguments;
use crate::ast::{ExprRef, FunctionNode, Operands};
use crate::core::Result;
use crate::evaluator::{EvaluationContext, RowId};
use crate::model::{Literal, Term};
use crate::registry::signature::{FunctionSignature, ParameterInfo, ValueType};

/// CONTAINS(string, pattern) - true when the pattern occurs in the string
///
/// Both arguments must be compatible string literals; an incompatible pair is a
/// type mismatch rather than `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainsFunction {
    args: Operands,
}

impl ContainsFunction {
    pub const FUNCTOR: &'static str = "CONTAINS";

    pub fn new(string: ExprRef, pattern: ExprRef) -> Self {
        Self {
            args: smallvec![string, pattern],
        }
    }

    pub fn from_operands(args: Operands) -> Result<Self> {
        Self::signature().check_arity(args.len())?;
        Ok(Self { args })
    }

    pub fn signature() -> &'static FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                ContainsFunction::FUNCTOR,
                vec![
                    ParameterInfo::required("string", ValueType::String),
                    ParameterInfo::required("pattern", ValueType::String),
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

impl FunctionNode for ContainsFunction {
    fn functor(&self) -> &str {
        Self::FUNCTOR
    }

    fn operands(&self) -> &[ExprRef] {
        &self.args
    }

    fn evaluate(&self, context: &dyn EvaluationContext, row: RowId) -> Result<Term> {
        let (string, pattern) = compatible_arguments(Self::FUNCTOR, &self.args, context, row)?;
        let result = string.lexical_form().contains(pattern.lexical_form());
        Ok(Literal::boolean(result).into())
    }

    fn with_operands(&self, operands: Operands) -> Self {
        Self { args: operands }
    }
}
