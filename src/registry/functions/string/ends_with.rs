//! STRENDS(string, suffix) function

use smallvec::smallvec;
use std::sync::LazyLock;

use super::compatible_arguments;
use crate::ast::{ExprRef, FunctionNode, Operands};
use crate::core::Result;
use crate::evaluator::{EvaluationContext, RowId};
use crate::model::{Literal, Term};
use crate::registry::signature::{FunctionSignature, ParameterInfo, ValueType};

/// STRENDS(string, suffix) - true when the string ends with the suffix
///
/// Both arguments must be compatible string literals; an incompatible pair is a
/// type mismatch rather than `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct StrEndsFunction {
    args: Operands,
}

impl StrEndsFunction {
    pub const FUNCTOR: &'static str = "STRENDS";

    pub fn new(string: ExprRef, suffix: ExprRef) -> Self {
        Self {
            args: smallvec![string, suffix],
        }
    }

    pub fn from_operands(args: Operands) -> Result<Self> {
        Self::signature().check_arity(args.len())?;
        Ok(Self { args })
    }

    pub fn signature() -> &'static FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                StrEndsFunction::FUNCTOR,
                vec![
                    ParameterInfo::required("string", ValueType::String),
                    ParameterInfo::required("suffix", ValueType::String),
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

impl FunctionNode for StrEndsFunction {
    fn functor(&self) -> &str {
        Self::FUNCTOR
    }

    fn operands(&self) -> &[ExprRef] {
        &self.args
    }

    fn evaluate(&self, context: &dyn EvaluationContext, row: RowId) -> Result<Term> {
        let (string, suffix) = compatible_arguments(Self::FUNCTOR, &self.args, context, row)?;
        let result = string.lexical_form().ends_with(suffix.lexical_form());
        Ok(Literal::boolean(result).into())
    }

    fn with_operands(&self, operands: Operands) -> Self {
        Self { args: operands }
    }
}
