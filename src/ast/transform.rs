//! Structural transformers used with `Expression::rewrite`

use log::trace;
use rustc_hash::FxHashMap;
use std::sync::Arc;

use super::expression::{ExprRef, Expression};
use crate::evaluator::EmptyContext;
use crate::model::Term;

/// Maps an operand to its replacement
pub trait ExpressionTransformer {
    fn transform(&mut self, expr: &ExprRef) -> ExprRef;
}

impl<F> ExpressionTransformer for F
where
    F: FnMut(&ExprRef) -> ExprRef,
{
    fn transform(&mut self, expr: &ExprRef) -> ExprRef {
        self(expr)
    }
}

/// Returns every operand as is
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityTransformer;

impl ExpressionTransformer for IdentityTransformer {
    fn transform(&mut self, expr: &ExprRef) -> ExprRef {
        Arc::clone(expr)
    }
}

/// Replaces bound variables with constants throughout a tree
#[derive(Debug, Default, Clone)]
pub struct VariableSubstitution {
    bindings: FxHashMap<String, Term>,
}

impl VariableSubstitution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding; later bindings for the same name win
    pub fn bind(mut self, variable: impl Into<String>, term: impl Into<Term>) -> Self {
        self.bindings.insert(variable.into(), term.into());
        self
    }

    /// Substitute into a whole tree
    pub fn apply(&mut self, expr: &ExprRef) -> ExprRef {
        self.transform(expr)
    }
}

impl ExpressionTransformer for VariableSubstitution {
    fn transform(&mut self, expr: &ExprRef) -> ExprRef {
        match expr.as_ref() {
            Expression::Variable(variable) => match self.bindings.get(variable.name()) {
                Some(term) => Expression::constant(term.clone()).into_ref(),
                None => Arc::clone(expr),
            },
            Expression::Constant(_) => Arc::clone(expr),
            _ => expr.rewrite(self).into_ref(),
        }
    }
}

/// Evaluates variable-free subtrees once and replaces them with constants
///
/// Subtrees that fail to evaluate are kept so the failure still surfaces per row.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstantFolder;

impl ConstantFolder {
    pub fn fold(&mut self, expr: &ExprRef) -> ExprRef {
        self.transform(expr)
    }
}

impl ExpressionTransformer for ConstantFolder {
    fn transform(&mut self, expr: &ExprRef) -> ExprRef {
        if expr.as_function().is_none() {
            return Arc::clone(expr);
        }
        if expr.free_variables().is_empty() {
            match expr.evaluate(&EmptyContext, 0) {
                Ok(Some(term)) => {
                    trace!("folded {expr} into {term}");
                    return Expression::constant(term).into_ref();
                }
                Ok(None) => {}
                Err(err) => trace!("kept {expr} unfolded: {err}"),
            }
        }
        expr.rewrite(self).into_ref()
    }
}
