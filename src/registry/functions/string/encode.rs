//! ENCODE_FOR_URI(string) function

use percent_encoding::utf8_percent_encode;
use smallvec::smallvec;
use std::sync::LazyLock;

use super::URI_UNRESERVED;
use crate::ast::{ExprRef, FunctionNode, Operands};
use crate::core::Result;
use crate::evaluator::{EvaluationContext, RowId};
use crate::model::{Literal, Term};
use crate::registry::functions::literal_argument;
use crate::registry::signature::{FunctionSignature, ParameterInfo, ValueType};

/// ENCODE_FOR_URI(string) - percent-encodes every byte outside the unreserved set
///
/// The result is always a plain literal.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeForUriFunction {
    args: Operands,
}

impl EncodeForUriFunction {
    pub const FUNCTOR: &'static str = "ENCODE_FOR_URI";

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
                EncodeForUriFunction::FUNCTOR,
                vec![ParameterInfo::required("string", ValueType::Literal)],
                ValueType::String,
            )
        });
        &SIG
    }

    pub fn argument(&self) -> &ExprRef {
        &self.args[0]
    }
}

impl FunctionNode for EncodeForUriFunction {
    fn functor(&self) -> &str {
        Self::FUNCTOR
    }

    fn operands(&self) -> &[ExprRef] {
        &self.args
    }

    fn evaluate(&self, context: &dyn EvaluationContext, row: RowId) -> Result<Term> {
        let literal = literal_argument(self.argument(), context, row, Self::FUNCTOR)?;
        let encoded = utf8_percent_encode(literal.lexical_form(), URI_UNRESERVED).to_string();
        Ok(Literal::plain(encoded).into())
    }

    fn with_operands(&self, operands: Operands) -> Self {
        Self { args: operands }
    }
}
