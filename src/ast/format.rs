//! SPARQL syntax rendering of expression trees

use super::expression::{ConstantNode, ExprRef, VariableNode};
use super::visitor::ExpressionVisitor;
use crate::registry::functions::math::UnaryNumericFunction;
use crate::registry::functions::string::{
    ConcatFunction, ContainsFunction, EncodeForUriFunction, LCaseFunction, StrAfterFunction,
    StrBeforeFunction, StrEndsFunction, StrLenFunction, StrStartsFunction, SubStrFunction,
    UCaseFunction,
};

/// Renders a tree back into SPARQL syntax, e.g. `CONTAINS(?s, "x"@en)`
#[derive(Debug, Default, Clone, Copy)]
pub struct SparqlFormatter;

impl SparqlFormatter {
    fn call(&mut self, functor: &str, operands: &[ExprRef]) -> String {
        let args: Vec<String> = operands
            .iter()
            .map(|operand| operand.accept_visitor(self))
            .collect();
        format!("{functor}({})", args.join(", "))
    }
}

impl ExpressionVisitor for SparqlFormatter {
    type Output = String;

    fn visit_variable(&mut self, node: &VariableNode) -> String {
        format!("?{}", node.name())
    }

    fn visit_constant(&mut self, node: &ConstantNode) -> String {
        node.term().to_string()
    }

    fn visit_concat(&mut self, node: &ConcatFunction) -> String {
        self.call(ConcatFunction::FUNCTOR, node.arguments())
    }

    fn visit_contains(&mut self, node: &ContainsFunction) -> String {
        self.call(ContainsFunction::FUNCTOR, node.arguments())
    }

    fn visit_str_starts(&mut self, node: &StrStartsFunction) -> String {
        self.call(StrStartsFunction::FUNCTOR, node.arguments())
    }

    fn visit_str_ends(&mut self, node: &StrEndsFunction) -> String {
        self.call(StrEndsFunction::FUNCTOR, node.arguments())
    }

    fn visit_str_before(&mut self, node: &StrBeforeFunction) -> String {
        self.call(StrBeforeFunction::FUNCTOR, node.arguments())
    }

    fn visit_str_after(&mut self, node: &StrAfterFunction) -> String {
        self.call(StrAfterFunction::FUNCTOR, node.arguments())
    }

    fn visit_str_len(&mut self, node: &StrLenFunction) -> String {
        self.call(StrLenFunction::FUNCTOR, std::slice::from_ref(node.argument()))
    }

    fn visit_ucase(&mut self, node: &UCaseFunction) -> String {
        self.call(UCaseFunction::FUNCTOR, std::slice::from_ref(node.argument()))
    }

    fn visit_lcase(&mut self, node: &LCaseFunction) -> String {
        self.call(LCaseFunction::FUNCTOR, std::slice::from_ref(node.argument()))
    }

    fn visit_substr(&mut self, node: &SubStrFunction) -> String {
        self.call(SubStrFunction::FUNCTOR, node.arguments())
    }

    fn visit_encode_for_uri(&mut self, node: &EncodeForUriFunction) -> String {
        self.call(
            EncodeForUriFunction::FUNCTOR,
            std::slice::from_ref(node.argument()),
        )
    }

    // Extension functions are called by IRI
    fn visit_unary_numeric(&mut self, node: &UnaryNumericFunction) -> String {
        let functor = format!("<{}>", node.kind().functor());
        self.call(&functor, std::slice::from_ref(node.argument()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expression;
    use crate::model::Literal;
    use crate::registry::functions::math::NumericFunction;

    #[test]
    fn test_format_nested_call() {
        let expr = Expression::Contains(ContainsFunction::new(
            Expression::LCase(LCaseFunction::new(Expression::variable("s").into_ref())).into_ref(),
            Expression::constant(Literal::lang_tagged("x", "en")).into_ref(),
        ));
        assert_eq!(expr.to_string(), "CONTAINS(LCASE(?s), \"x\"@en)");
    }

    #[test]
    fn test_format_variadic_and_extension() {
        assert_eq!(
            Expression::Concat(ConcatFunction::new(Vec::<ExprRef>::new())).to_string(),
            "CONCAT()"
        );

        let expr = Expression::UnaryNumeric(UnaryNumericFunction::new(
            NumericFunction::Sine,
            Expression::variable("a").into_ref(),
        ));
        assert_eq!(
            expr.to_string(),
            "<http://www.w3.org/2005/xpath-functions/math#sin>(?a)"
        );
    }
}
