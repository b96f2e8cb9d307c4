//! Visitor and processor interfaces for expression trees
//!
//! Both interfaces have one method per node kind. External algorithms (formatting,
//! translation, alternative evaluation strategies) implement them instead of
//! matching on `Expression` themselves, so adding an algorithm never touches the
//! node types.

use super::expression::{ConstantNode, Expression, VariableNode};
use crate::evaluator::RowId;
use crate::registry::functions::math::UnaryNumericFunction;
use crate::registry::functions::string::{
    ConcatFunction, ContainsFunction, EncodeForUriFunction, LCaseFunction, StrAfterFunction,
    StrBeforeFunction, StrEndsFunction, StrLenFunction, StrStartsFunction, SubStrFunction,
    UCaseFunction,
};

/// Algorithm over the structure of a tree
pub trait ExpressionVisitor {
    /// The result type of visiting a node
    type Output;

    fn visit_variable(&mut self, node: &VariableNode) -> Self::Output;
    fn visit_constant(&mut self, node: &ConstantNode) -> Self::Output;
    fn visit_concat(&mut self, node: &ConcatFunction) -> Self::Output;
    fn visit_contains(&mut self, node: &ContainsFunction) -> Self::Output;
    fn visit_str_starts(&mut self, node: &StrStartsFunction) -> Self::Output;
    fn visit_str_ends(&mut self, node: &StrEndsFunction) -> Self::Output;
    fn visit_str_before(&mut self, node: &StrBeforeFunction) -> Self::Output;
    fn visit_str_after(&mut self, node: &StrAfterFunction) -> Self::Output;
    fn visit_str_len(&mut self, node: &StrLenFunction) -> Self::Output;
    fn visit_ucase(&mut self, node: &UCaseFunction) -> Self::Output;
    fn visit_lcase(&mut self, node: &LCaseFunction) -> Self::Output;
    fn visit_substr(&mut self, node: &SubStrFunction) -> Self::Output;
    fn visit_encode_for_uri(&mut self, node: &EncodeForUriFunction) -> Self::Output;
    fn visit_unary_numeric(&mut self, node: &UnaryNumericFunction) -> Self::Output;
}

/// Algorithm that runs per row against a context of type `C`
pub trait ExpressionProcessor<C: ?Sized> {
    /// The result type of processing a node
    type Output;

    fn process_variable(&mut self, node: &VariableNode, context: &C, row: RowId) -> Self::Output;
    fn process_constant(&mut self, node: &ConstantNode, context: &C, row: RowId) -> Self::Output;
    fn process_concat(&mut self, node: &ConcatFunction, context: &C, row: RowId) -> Self::Output;
    fn process_contains(&mut self, node: &ContainsFunction, context: &C, row: RowId)
    -> Self::Output;
    fn process_str_starts(
        &mut self,
        node: &StrStartsFunction,
        context: &C,
        row: RowId,
    ) -> Self::Output;
    fn process_str_ends(&mut self, node: &StrEndsFunction, context: &C, row: RowId)
    -> Self::Output;
    fn process_str_before(
        &mut self,
        node: &StrBeforeFunction,
        context: &C,
        row: RowId,
    ) -> Self::Output;
    fn process_str_after(
        &mut self,
        node: &StrAfterFunction,
        context: &C,
        row: RowId,
    ) -> Self::Output;
    fn process_str_len(&mut self, node: &StrLenFunction, context: &C, row: RowId) -> Self::Output;
    fn process_ucase(&mut self, node: &UCaseFunction, context: &C, row: RowId) -> Self::Output;
    fn process_lcase(&mut self, node: &LCaseFunction, context: &C, row: RowId) -> Self::Output;
    fn process_substr(&mut self, node: &SubStrFunction, context: &C, row: RowId) -> Self::Output;
    fn process_encode_for_uri(
        &mut self,
        node: &EncodeForUriFunction,
        context: &C,
        row: RowId,
    ) -> Self::Output;
    fn process_unary_numeric(
        &mut self,
        node: &UnaryNumericFunction,
        context: &C,
        row: RowId,
    ) -> Self::Output;
}

/// Route an expression to the visitor method for its kind
pub fn walk_expression<V: ExpressionVisitor>(visitor: &mut V, expr: &Expression) -> V::Output {
    match expr {
        Expression::Variable(node) => visitor.visit_variable(node),
        Expression::Constant(node) => visitor.visit_constant(node),
        Expression::Concat(node) => visitor.visit_concat(node),
        Expression::Contains(node) => visitor.visit_contains(node),
        Expression::StrStarts(node) => visitor.visit_str_starts(node),
        Expression::StrEnds(node) => visitor.visit_str_ends(node),
        Expression::StrBefore(node) => visitor.visit_str_before(node),
        Expression::StrAfter(node) => visitor.visit_str_after(node),
        Expression::StrLen(node) => visitor.visit_str_len(node),
        Expression::UCase(node) => visitor.visit_ucase(node),
        Expression::LCase(node) => visitor.visit_lcase(node),
        Expression::SubStr(node) => visitor.visit_substr(node),
        Expression::EncodeForUri(node) => visitor.visit_encode_for_uri(node),
        Expression::UnaryNumeric(node) => visitor.visit_unary_numeric(node),
    }
}

/// Route an expression to the processor method for its kind
pub fn walk_processor<C, P>(processor: &mut P, expr: &Expression, context: &C, row: RowId) -> P::Output
where
    C: ?Sized,
    P: ExpressionProcessor<C>,
{
    match expr {
        Expression::Variable(node) => processor.process_variable(node, context, row),
        Expression::Constant(node) => processor.process_constant(node, context, row),
        Expression::Concat(node) => processor.process_concat(node, context, row),
        Expression::Contains(node) => processor.process_contains(node, context, row),
        Expression::StrStarts(node) => processor.process_str_starts(node, context, row),
        Expression::StrEnds(node) => processor.process_str_ends(node, context, row),
        Expression::StrBefore(node) => processor.process_str_before(node, context, row),
        Expression::StrAfter(node) => processor.process_str_after(node, context, row),
        Expression::StrLen(node) => processor.process_str_len(node, context, row),
        Expression::UCase(node) => processor.process_ucase(node, context, row),
        Expression::LCase(node) => processor.process_lcase(node, context, row),
        Expression::SubStr(node) => processor.process_substr(node, context, row),
        Expression::EncodeForUri(node) => processor.process_encode_for_uri(node, context, row),
        Expression::UnaryNumeric(node) => processor.process_unary_numeric(node, context, row),
    }
}
