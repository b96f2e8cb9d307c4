//! Expression tree with the node contract shared by every function kind
//!
//! Trees are immutable. Operands are reference counted so a rewritten tree
//! shares every subtree the transformer left untouched, and a tree can be
//! evaluated from several threads at once.

use indexmap::IndexSet;
use log::trace;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

use super::format::SparqlFormatter;
use super::transform::ExpressionTransformer;
use super::visitor::{ExpressionProcessor, ExpressionVisitor, walk_expression, walk_processor};
use crate::core::Result;
use crate::evaluator::{EvaluationContext, RowId};
use crate::model::{Term, effective_boolean_value};
use crate::registry::functions::math::UnaryNumericFunction;
use crate::registry::functions::string::{
    ConcatFunction, ContainsFunction, EncodeForUriFunction, LCaseFunction, StrAfterFunction,
    StrBeforeFunction, StrEndsFunction, StrLenFunction, StrStartsFunction, SubStrFunction,
    UCaseFunction,
};

/// Shared handle to an expression node
pub type ExprRef = Arc<Expression>;

/// Ordered operand list
pub type Operands = SmallVec<[ExprRef; 4]>;

/// Capability set implemented by every built-in function node
pub trait FunctionNode: fmt::Debug + Send + Sync {
    /// Canonical name used for display and registry lookup
    fn functor(&self) -> &str;

    /// Ordered operands
    fn operands(&self) -> &[ExprRef];

    /// Evaluate against one row; functions always produce a value or fail
    fn evaluate(&self, context: &dyn EvaluationContext, row: RowId) -> Result<Term>;

    /// Same function kind over new operands, one per existing operand
    fn with_operands(&self, operands: Operands) -> Self
    where
        Self: Sized;
}

/// Variable reference leaf
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableNode {
    name: String,
}

impl VariableNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Variable name without the `?` sigil
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve through the context; unbound variables have no value
    pub fn resolve(&self, context: &dyn EvaluationContext, row: RowId) -> Option<Term> {
        context.resolve(&self.name, row)
    }
}

/// Constant term leaf
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstantNode {
    term: Term,
}

impl ConstantNode {
    pub fn new(term: impl Into<Term>) -> Self {
        Self { term: term.into() }
    }

    pub fn term(&self) -> &Term {
        &self.term
    }
}

/// A scalar expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Variable reference (e.g., `?name`)
    Variable(VariableNode),
    /// Constant term (e.g., `"chat"@fr`)
    Constant(ConstantNode),
    /// `CONCAT(...)`
    Concat(ConcatFunction),
    /// `CONTAINS(a, b)`
    Contains(ContainsFunction),
    /// `STRSTARTS(a, b)`
    StrStarts(StrStartsFunction),
    /// `STRENDS(a, b)`
    StrEnds(StrEndsFunction),
    /// `STRBEFORE(a, b)`
    StrBefore(StrBeforeFunction),
    /// `STRAFTER(a, b)`
    StrAfter(StrAfterFunction),
    /// `STRLEN(a)`
    StrLen(StrLenFunction),
    /// `UCASE(a)`
    UCase(UCaseFunction),
    /// `LCASE(a)`
    LCase(LCaseFunction),
    /// `SUBSTR(s, start [, length])`
    SubStr(SubStrFunction),
    /// `ENCODE_FOR_URI(a)`
    EncodeForUri(EncodeForUriFunction),
    /// Unary numeric extension function (e.g., degrees-to-radians)
    UnaryNumeric(UnaryNumericFunction),
}

impl Expression {
    /// Create a variable reference
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(VariableNode::new(name))
    }

    /// Create a constant
    pub fn constant(term: impl Into<Term>) -> Self {
        Self::Constant(ConstantNode::new(term))
    }

    /// Wrap into a shared handle
    pub fn into_ref(self) -> ExprRef {
        Arc::new(self)
    }

    /// The function node behind this expression, `None` for leaves
    pub fn as_function(&self) -> Option<&dyn FunctionNode> {
        match self {
            Self::Variable(_) | Self::Constant(_) => None,
            Self::Concat(f) => Some(f),
            Self::Contains(f) => Some(f),
            Self::StrStarts(f) => Some(f),
            Self::StrEnds(f) => Some(f),
            Self::StrBefore(f) => Some(f),
            Self::StrAfter(f) => Some(f),
            Self::StrLen(f) => Some(f),
            Self::UCase(f) => Some(f),
            Self::LCase(f) => Some(f),
            Self::SubStr(f) => Some(f),
            Self::EncodeForUri(f) => Some(f),
            Self::UnaryNumeric(f) => Some(f),
        }
    }

    /// Canonical name; empty for variables and constants
    pub fn functor(&self) -> &str {
        self.as_function().map_or("", |f| f.functor())
    }

    /// Evaluate against one row
    ///
    /// `Ok(None)` means the expression has no value in this row, which only an
    /// unbound variable produces.
    pub fn evaluate(&self, context: &dyn EvaluationContext, row: RowId) -> Result<Option<Term>> {
        match self {
            Self::Variable(variable) => Ok(variable.resolve(context, row)),
            Self::Constant(constant) => Ok(Some(constant.term().clone())),
            _ => match self.as_function() {
                Some(function) => function.evaluate(context, row).map(Some).inspect_err(|err| {
                    trace!("{} failed in row {row}: {err}", function.functor());
                }),
                None => Ok(None),
            },
        }
    }

    /// Effective boolean value of the evaluated expression
    pub fn effective_boolean_value(
        &self,
        context: &dyn EvaluationContext,
        row: RowId,
    ) -> Result<bool> {
        let value = self.evaluate(context, row)?;
        effective_boolean_value(value.as_ref(), self.functor())
    }

    /// Variables mentioned in the tree, left to right, without duplicates
    pub fn free_variables(&self) -> Vec<String> {
        let mut variables = IndexSet::new();
        self.collect_variables(&mut variables);
        variables.into_iter().collect()
    }

    fn collect_variables(&self, variables: &mut IndexSet<String>) {
        match self {
            Self::Variable(variable) => {
                variables.insert(variable.name().to_string());
            }
            _ => {
                for operand in self.operands() {
                    operand.collect_variables(variables);
                }
            }
        }
    }

    /// Ordered child expressions
    pub fn operands(&self) -> &[ExprRef] {
        match self.as_function() {
            Some(function) => function.operands(),
            None => &[],
        }
    }

    /// Build a new node of the same kind with every operand passed through the transformer
    ///
    /// Leaves are returned unchanged. The transformer decides whether to descend
    /// further by calling `rewrite` on the operands it receives.
    pub fn rewrite(&self, transformer: &mut dyn ExpressionTransformer) -> Expression {
        let Some(function) = self.as_function() else {
            return self.clone();
        };
        let operands: Operands = function
            .operands()
            .iter()
            .map(|operand| transformer.transform(operand))
            .collect();

        match self {
            Self::Variable(_) | Self::Constant(_) => self.clone(),
            Self::Concat(f) => Self::Concat(f.with_operands(operands)),
            Self::Contains(f) => Self::Contains(f.with_operands(operands)),
            Self::StrStarts(f) => Self::StrStarts(f.with_operands(operands)),
            Self::StrEnds(f) => Self::StrEnds(f.with_operands(operands)),
            Self::StrBefore(f) => Self::StrBefore(f.with_operands(operands)),
            Self::StrAfter(f) => Self::StrAfter(f.with_operands(operands)),
            Self::StrLen(f) => Self::StrLen(f.with_operands(operands)),
            Self::UCase(f) => Self::UCase(f.with_operands(operands)),
            Self::LCase(f) => Self::LCase(f.with_operands(operands)),
            Self::SubStr(f) => Self::SubStr(f.with_operands(operands)),
            Self::EncodeForUri(f) => Self::EncodeForUri(f.with_operands(operands)),
            Self::UnaryNumeric(f) => Self::UnaryNumeric(f.with_operands(operands)),
        }
    }

    /// Dispatch to the processor method for this node kind
    pub fn accept_processor<C, P>(&self, processor: &mut P, context: &C, row: RowId) -> P::Output
    where
        C: ?Sized,
        P: ExpressionProcessor<C>,
    {
        walk_processor(processor, self, context, row)
    }

    /// Dispatch to the visitor method for this node kind
    pub fn accept_visitor<V: ExpressionVisitor>(&self, visitor: &mut V) -> V::Output {
        walk_expression(visitor, self)
    }
}

impl From<VariableNode> for Expression {
    fn from(node: VariableNode) -> Self {
        Self::Variable(node)
    }
}

impl From<ConstantNode> for Expression {
    fn from(node: ConstantNode) -> Self {
        Self::Constant(node)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.accept_visitor(&mut SparqlFormatter))
    }
}
