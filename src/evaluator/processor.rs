//! Reference evaluation strategy plugged through `Expression::accept_processor`

use log::trace;

use super::context::{EvaluationContext, RowId};
use crate::ast::{ConstantNode, Expression, ExpressionProcessor, FunctionNode, VariableNode};
use crate::core::Result;
use crate::model::Term;
use crate::registry::functions::math::UnaryNumericFunction;
use crate::registry::functions::string::{
    ConcatFunction, ContainsFunction, EncodeForUriFunction, LCaseFunction, StrAfterFunction,
    StrBeforeFunction, StrEndsFunction, StrLenFunction, StrStartsFunction, SubStrFunction,
    UCaseFunction,
};

/// Evaluates each node kind with its built-in semantics
#[derive(Debug, Default)]
pub struct StandardProcessor {
    processed: usize,
}

impl StandardProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate a tree through processor dispatch
    pub fn evaluate(
        &mut self,
        expr: &Expression,
        context: &dyn EvaluationContext,
        row: RowId,
    ) -> Result<Option<Term>> {
        expr.accept_processor(self, context, row)
    }

    /// Number of nodes dispatched to this processor so far
    pub fn processed(&self) -> usize {
        self.processed
    }

    fn function(
        &mut self,
        node: &dyn FunctionNode,
        context: &dyn EvaluationContext,
        row: RowId,
    ) -> Result<Option<Term>> {
        self.processed += 1;
        trace!("processing {} in row {row}", node.functor());
        node.evaluate(context, row).map(Some)
    }
}

impl<'a> ExpressionProcessor<dyn EvaluationContext + 'a> for StandardProcessor {
    type Output = Result<Option<Term>>;

    fn process_variable(
        &mut self,
        node: &VariableNode,
        context: &(dyn EvaluationContext + 'a),
        row: RowId,
    ) -> Self::Output {
        self.processed += 1;
        Ok(node.resolve(context, row))
    }

    fn process_constant(
        &mut self,
        node: &ConstantNode,
        _context: &(dyn EvaluationContext + 'a),
        _row: RowId,
    ) -> Self::Output {
        self.processed += 1;
        Ok(Some(node.term().clone()))
    }

    fn process_concat(
        &mut self,
        node: &ConcatFunction,
        context: &(dyn EvaluationContext + 'a),
        row: RowId,
    ) -> Self::Output {
        self.function(node, context, row)
    }

    fn process_contains(
        &mut self,
        node: &ContainsFunction,
        context: &(dyn EvaluationContext + 'a),
        row: RowId,
    ) -> Self::Output {
        self.function(node, context, row)
    }

    fn process_str_starts(
        &mut self,
        node: &StrStartsFunction,
        context: &(dyn EvaluationContext + 'a),
        row: RowId,
    ) -> Self::Output {
        self.function(node, context, row)
    }

    fn process_str_ends(
        &mut self,
        node: &StrEndsFunction,
        context: &(dyn EvaluationContext + 'a),
        row: RowId,
    ) -> Self::Output {
        self.function(node, context, row)
    }

    fn process_str_before(
        &mut self,
        node: &StrBeforeFunction,
        context: &(dyn EvaluationContext + 'a),
        row: RowId,
    ) -> Self::Output {
        self.function(node, context, row)
    }

    fn process_str_after(
        &mut self,
        node: &StrAfterFunction,
        context: &(dyn EvaluationContext + 'a),
        row: RowId,
    ) -> Self::Output {
        self.function(node, context, row)
    }

    fn process_str_len(
        &mut self,
        node: &StrLenFunction,
        context: &(dyn EvaluationContext + 'a),
        row: RowId,
    ) -> Self::Output {
        self.function(node, context, row)
    }

    fn process_ucase(
        &mut self,
        node: &UCaseFunction,
        context: &(dyn EvaluationContext + 'a),
        row: RowId,
    ) -> Self::Output {
        self.function(node, context, row)
    }

    fn process_lcase(
        &mut self,
        node: &LCaseFunction,
        context: &(dyn EvaluationContext + 'a),
        row: RowId,
    ) -> Self::Output {
        self.function(node, context, row)
    }

    fn process_substr(
        &mut self,
        node: &SubStrFunction,
        context: &(dyn EvaluationContext + 'a),
        row: RowId,
    ) -> Self::Output {
        self.function(node, context, row)
    }

    fn process_encode_for_uri(
        &mut self,
        node: &EncodeForUriFunction,
        context: &(dyn EvaluationContext + 'a),
        row: RowId,
    ) -> Self::Output {
        self.function(node, context, row)
    }

    fn process_unary_numeric(
        &mut self,
        node: &UnaryNumericFunction,
        context: &(dyn EvaluationContext + 'a),
        row: RowId,
    ) -> Self::Output {
        self.function(node, context, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::BindingTable;
    use crate::model::Literal;

    #[test]
    fn test_processor_matches_direct_evaluation() {
        let mut table = BindingTable::new();
        let row = table.push_row([("s", Term::from(Literal::lang_tagged("Chat", "fr")))]);

        let expr = Expression::UCase(UCaseFunction::new(Expression::variable("s").into_ref()));
        let mut processor = StandardProcessor::new();
        assert_eq!(
            processor.evaluate(&expr, &table, row).unwrap(),
            expr.evaluate(&table, row).unwrap()
        );
        assert_eq!(processor.processed(), 1);

        let unbound = Expression::variable("missing");
        assert_eq!(processor.evaluate(&unbound, &table, row).unwrap(), None);
        assert_eq!(processor.processed(), 2);
    }

    fn evaluate_borrowed(expr: &Expression, context: &dyn EvaluationContext) -> Result<Option<Term>> {
        StandardProcessor::new().evaluate(expr, context, 0)
    }

    #[test]
    fn test_processor_accepts_borrowed_context() {
        let mut table = BindingTable::new();
        table.push_row([("s", Term::from(Literal::plain("abc")))]);
        let expr = Expression::StrLen(StrLenFunction::new(Expression::variable("s").into_ref()));
        assert_eq!(
            evaluate_borrowed(&expr, &table).unwrap(),
            Some(Term::from(Literal::integer(3)))
        );
    }

    #[test]
    fn test_processor_propagates_failures() {
        let table = BindingTable::with_empty_row();
        let expr = Expression::StrLen(StrLenFunction::new(
            Expression::constant(Term::iri("urn:x")).into_ref(),
        ));
        let err = StandardProcessor::new()
            .evaluate(&expr, &table, 0)
            .unwrap_err();
        assert!(err.is_type_mismatch());
    }
}
