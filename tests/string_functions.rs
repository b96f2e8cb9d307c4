//! End-to-end behaviour of the string built-ins through the registry

mod common;

use common::{constant, init_logging, plain, var};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use sparql_expr::model::xsd;
use sparql_expr::{BindingTable, Expression, FunctionRegistry, Literal, SparqlExprError, Term};

#[fixture]
fn registry() -> FunctionRegistry {
    init_logging();
    FunctionRegistry::standard()
}

fn eval(registry: &FunctionRegistry, functor: &str, args: Vec<Literal>) -> Result<Term, SparqlExprError> {
    let expr = registry.build(functor, args.into_iter().map(constant))?;
    let value = expr.evaluate(&BindingTable::with_empty_row(), 0)?;
    Ok(value.expect("functions always produce a value"))
}

#[rstest]
#[case(1, None, "hello")]
#[case(2, None, "ello")]
#[case(0, None, "hello")]
#[case(2, Some(100), "ello")]
#[case(10, Some(5), "")]
#[case(2, Some(-1), "")]
#[case(1, Some(0), "")]
#[case(5, Some(1), "o")]
fn substr_clamps_instead_of_failing(
    registry: FunctionRegistry,
    #[case] start: i64,
    #[case] length: Option<i64>,
    #[case] expected: &str,
) {
    let mut args = vec![Literal::plain("hello"), Literal::integer(start)];
    args.extend(length.map(Literal::integer));
    assert_eq!(eval(&registry, "SUBSTR", args).unwrap(), plain(expected));
}

#[rstest]
#[case::huge_integer_start(("99999999999999999999", xsd::INTEGER), None, "")]
#[case::huge_negative_integer_start(("-99999999999999999999", xsd::INTEGER), None, "hello")]
#[case::max_decimal_start(("79228162514264337593543950335", xsd::DECIMAL), None, "")]
#[case::huge_double_start(("1e300", xsd::DOUBLE), None, "")]
#[case::infinite_start(("INF", xsd::DOUBLE), None, "")]
#[case::huge_integer_length(("2", xsd::INTEGER), Some(("99999999999999999999", xsd::INTEGER)), "ello")]
#[case::max_decimal_length(("3", xsd::INTEGER), Some(("79228162514264337593543950335", xsd::DECIMAL)), "llo")]
#[case::huge_double_length(("4", xsd::INTEGER), Some(("1.7976931348623157E308", xsd::DOUBLE)), "lo")]
#[case::min_length(("1", xsd::INTEGER), Some(("-9223372036854775808", xsd::LONG)), "")]
#[case::max_start_and_length(("9223372036854775807", xsd::LONG), Some(("9223372036854775807", xsd::LONG)), "")]
fn substr_absorbs_extreme_indices(
    registry: FunctionRegistry,
    #[case] start: (&str, &str),
    #[case] length: Option<(&str, &str)>,
    #[case] expected: &str,
) {
    let mut args = vec![Literal::plain("hello"), Literal::typed(start.0, start.1)];
    args.extend(length.map(|(lexical, datatype)| Literal::typed(lexical, datatype)));
    assert_eq!(eval(&registry, "SUBSTR", args).unwrap(), plain(expected));
}

#[rstest]
#[case(1, None)]
#[case(-4, Some(2))]
#[case(7, Some(-7))]
fn substr_of_empty_source_is_empty_xsd_string(
    registry: FunctionRegistry,
    #[case] start: i64,
    #[case] length: Option<i64>,
) {
    let mut args = vec![Literal::plain(""), Literal::integer(start)];
    args.extend(length.map(Literal::integer));
    assert_eq!(
        eval(&registry, "SUBSTR", args).unwrap(),
        Term::from(Literal::string(""))
    );
}

#[rstest]
fn substr_index_errors(registry: FunctionRegistry) {
    let err = eval(
        &registry,
        "SUBSTR",
        vec![Literal::plain("hello"), Literal::string("1")],
    )
    .unwrap_err();
    assert_eq!(err, SparqlExprError::non_numeric_index("SUBSTR"));

    let err = eval(
        &registry,
        "SUBSTR",
        vec![Literal::plain("hello"), Literal::typed("1x", xsd::INTEGER)],
    )
    .unwrap_err();
    assert!(matches!(err, SparqlExprError::ConversionFailure { .. }));
}

#[rstest]
fn concat_metadata(registry: FunctionRegistry) {
    assert_eq!(
        eval(&registry, "CONCAT", vec![]).unwrap(),
        Term::from(Literal::string(""))
    );
    assert_eq!(
        eval(
            &registry,
            "CONCAT",
            vec![Literal::lang_tagged("a", "en"), Literal::lang_tagged("b", "en")]
        )
        .unwrap(),
        Term::from(Literal::lang_tagged("ab", "en"))
    );
    assert_eq!(
        eval(&registry, "CONCAT", vec![Literal::string("a"), Literal::plain("b")]).unwrap(),
        plain("ab")
    );
    assert_eq!(
        eval(&registry, "CONCAT", vec![Literal::string("a"), Literal::string("b")]).unwrap(),
        Term::from(Literal::string("ab"))
    );
}

#[rstest]
#[case::plain(Literal::plain("Chat"))]
#[case::tagged(Literal::lang_tagged("Chat", "fr"))]
#[case::string(Literal::string("Chat"))]
fn case_conversion_preserves_metadata(registry: FunctionRegistry, #[case] input: Literal) {
    assert_eq!(
        eval(&registry, "UCASE", vec![input.clone()]).unwrap(),
        Term::from(input.with_lexical_form("CHAT"))
    );
    assert_eq!(
        eval(&registry, "LCASE", vec![input.clone()]).unwrap(),
        Term::from(input.with_lexical_form("chat"))
    );
}

#[rstest]
fn xpath_aliases_share_semantics(registry: FunctionRegistry) {
    let keyword = eval(&registry, "STRAFTER", vec![Literal::plain("a-b"), Literal::plain("-")]);
    let alias = eval(
        &registry,
        "http://www.w3.org/2005/xpath-functions#substring-after",
        vec![Literal::plain("a-b"), Literal::plain("-")],
    );
    assert_eq!(keyword.unwrap(), alias.unwrap());
}

#[rstest]
fn strlen_and_encode(registry: FunctionRegistry) {
    assert_eq!(
        eval(&registry, "STRLEN", vec![Literal::lang_tagged("chat", "en")]).unwrap(),
        Term::from(Literal::integer(4))
    );
    assert_eq!(
        eval(&registry, "ENCODE_FOR_URI", vec![Literal::string("~a b/ç")]).unwrap(),
        plain("~a%20b%2F%C3%A7")
    );
}

#[rstest]
fn unbound_and_non_literal_arguments(registry: FunctionRegistry) {
    let mut table = BindingTable::new();
    let row = table.push_row([("iri", Term::iri("urn:x"))]);

    let expr = registry.build("UCASE", [var("missing")]).unwrap();
    assert_eq!(
        expr.evaluate(&table, row).unwrap_err(),
        SparqlExprError::null_operand("UCASE")
    );

    let expr = registry.build("STRLEN", [var("iri")]).unwrap();
    assert_eq!(
        expr.evaluate(&table, row).unwrap_err(),
        SparqlExprError::non_literal("STRLEN")
    );
}

#[test]
fn numeric_extensions_return_doubles() {
    let registry = FunctionRegistry::standard();
    let expr = registry
        .build(
            "http://www.w3.org/2005/xpath-functions/math#sqrt",
            [constant(Literal::typed("6.25", xsd::DECIMAL))],
        )
        .unwrap();
    assert_eq!(
        expr.evaluate(&BindingTable::with_empty_row(), 0).unwrap(),
        Some(Term::from(Literal::double(2.5)))
    );
    assert_eq!(
        expr.to_string(),
        "<http://www.w3.org/2005/xpath-functions/math#sqrt>(\"6.25\"^^<http://www.w3.org/2001/XMLSchema#decimal>)"
    );
    assert!(matches!(expr, Expression::UnaryNumeric(_)));
}
