//! Single-argument numeric functions returning `xsd:double`

use smallvec::smallvec;
use std::fmt;

use super::{EXTENSION_NAMESPACE, XPATH_MATH_NAMESPACE};
use crate::ast::{ExprRef, FunctionNode, Operands};
use crate::core::Result;
use crate::evaluator::{EvaluationContext, RowId};
use crate::model::type_coercion::to_f64;
use crate::model::{Literal, Term};
use crate::registry::functions::literal_argument;
use crate::registry::signature::{FunctionSignature, ParameterInfo, ValueType};

/// The transform applied by a [`UnaryNumericFunction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericFunction {
    DegreesToRadians,
    RadiansToDegrees,
    Sine,
    Cosine,
    Tangent,
    ArcSine,
    ArcCosine,
    ArcTangent,
    SquareRoot,
}

impl NumericFunction {
    pub const ALL: [NumericFunction; 9] = [
        Self::DegreesToRadians,
        Self::RadiansToDegrees,
        Self::Sine,
        Self::Cosine,
        Self::Tangent,
        Self::ArcSine,
        Self::ArcCosine,
        Self::ArcTangent,
        Self::SquareRoot,
    ];

    /// Function IRI
    pub fn functor(self) -> &'static str {
        match self {
            Self::DegreesToRadians => {
                "https://octofhir.github.io/sparql-expr/fn#degrees-to-radians"
            }
            Self::RadiansToDegrees => {
                "https://octofhir.github.io/sparql-expr/fn#radians-to-degrees"
            }
            Self::Sine => "http://www.w3.org/2005/xpath-functions/math#sin",
            Self::Cosine => "http://www.w3.org/2005/xpath-functions/math#cos",
            Self::Tangent => "http://www.w3.org/2005/xpath-functions/math#tan",
            Self::ArcSine => "http://www.w3.org/2005/xpath-functions/math#asin",
            Self::ArcCosine => "http://www.w3.org/2005/xpath-functions/math#acos",
            Self::ArcTangent => "http://www.w3.org/2005/xpath-functions/math#atan",
            Self::SquareRoot => "http://www.w3.org/2005/xpath-functions/math#sqrt",
        }
    }

    pub fn from_functor(functor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.functor() == functor)
    }

    /// Local name within the function's namespace
    pub fn local_name(self) -> &'static str {
        let functor = self.functor();
        functor
            .strip_prefix(XPATH_MATH_NAMESPACE)
            .or_else(|| functor.strip_prefix(EXTENSION_NAMESPACE))
            .unwrap_or(functor)
    }

    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::DegreesToRadians => value.to_radians(),
            Self::RadiansToDegrees => value.to_degrees(),
            Self::Sine => value.sin(),
            Self::Cosine => value.cos(),
            Self::Tangent => value.tan(),
            Self::ArcSine => value.asin(),
            Self::ArcCosine => value.acos(),
            Self::ArcTangent => value.atan(),
            Self::SquareRoot => value.sqrt(),
        }
    }
}

impl fmt::Display for NumericFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.local_name())
    }
}

/// A numeric function of one argument
///
/// The operand must evaluate to a numeric literal. Integer, decimal, float and
/// double operands are all read as doubles and the result is always `xsd:double`,
/// with `NaN` and `INF` for results outside the real line.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryNumericFunction {
    kind: NumericFunction,
    args: Operands,
}

impl UnaryNumericFunction {
    pub fn new(kind: NumericFunction, argument: ExprRef) -> Self {
        Self {
            kind,
            args: smallvec![argument],
        }
    }

    pub fn from_operands(kind: NumericFunction, args: Operands) -> Result<Self> {
        Self::signature(kind).check_arity(args.len())?;
        Ok(Self { kind, args })
    }

    pub fn signature(kind: NumericFunction) -> FunctionSignature {
        FunctionSignature::new(
            kind.functor(),
            vec![ParameterInfo::required("value", ValueType::Numeric)],
            ValueType::Double,
        )
    }

    pub fn kind(&self) -> NumericFunction {
        self.kind
    }

    pub fn argument(&self) -> &ExprRef {
        &self.args[0]
    }
}

impl FunctionNode for UnaryNumericFunction {
    fn functor(&self) -> &str {
        self.kind.functor()
    }

    fn operands(&self) -> &[ExprRef] {
        &self.args
    }

    fn evaluate(&self, context: &dyn EvaluationContext, row: RowId) -> Result<Term> {
        let literal = literal_argument(self.argument(), context, row, self.kind.functor())?;
        let value = to_f64(&literal, self.kind.functor())?;
        Ok(Literal::double(self.kind.apply(value)).into())
    }

    fn with_operands(&self, operands: Operands) -> Self {
        Self {
            kind: self.kind,
            args: operands,
        }
    }
}
