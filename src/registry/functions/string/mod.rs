//! String functions: CONCAT, CONTAINS, STRSTARTS, STRENDS, STRBEFORE, STRAFTER,
//! STRLEN, UCASE, LCASE, SUBSTR and ENCODE_FOR_URI

mod concat;
mod contains;
mod encode;
mod ends_with;
mod length;
mod lower;
mod starts_with;
mod str_after;
mod str_before;
mod substring;
mod upper;

pub use concat::ConcatFunction;
pub use contains::ContainsFunction;
pub use encode::EncodeForUriFunction;
pub use ends_with::StrEndsFunction;
pub use length::StrLenFunction;
pub use lower::LCaseFunction;
pub use starts_with::StrStartsFunction;
pub use str_after::StrAfterFunction;
pub use str_before::StrBeforeFunction;
pub use substring::SubStrFunction;
pub use upper::UCaseFunction;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

use super::literal_argument;
use crate::ast::{ExprRef, Expression};
use crate::core::Result;
use crate::evaluator::{EvaluationContext, RowId, check_compatible};
use crate::model::Literal;
use crate::registry::FunctionRegistry;

/// XPath namespace used for the `fn:` aliases
pub const XPATH_FUNCTIONS_NAMESPACE: &str = "http://www.w3.org/2005/xpath-functions#";

/// Bytes ENCODE_FOR_URI leaves as is: ASCII letters, digits and `-_.~`
pub(crate) const URI_UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Register all SPARQL string built-ins under their keyword functors
pub fn register_string_functions(registry: &mut FunctionRegistry) {
    registry.register(ConcatFunction::signature().clone(), |args| {
        Ok(Expression::Concat(ConcatFunction::from_operands(args)?))
    });
    registry.register(ContainsFunction::signature().clone(), |args| {
        Ok(Expression::Contains(ContainsFunction::from_operands(args)?))
    });
    registry.register(StrStartsFunction::signature().clone(), |args| {
        Ok(Expression::StrStarts(StrStartsFunction::from_operands(args)?))
    });
    registry.register(StrEndsFunction::signature().clone(), |args| {
        Ok(Expression::StrEnds(StrEndsFunction::from_operands(args)?))
    });
    registry.register(StrBeforeFunction::signature().clone(), |args| {
        Ok(Expression::StrBefore(StrBeforeFunction::from_operands(args)?))
    });
    registry.register(StrAfterFunction::signature().clone(), |args| {
        Ok(Expression::StrAfter(StrAfterFunction::from_operands(args)?))
    });
    registry.register(StrLenFunction::signature().clone(), |args| {
        Ok(Expression::StrLen(StrLenFunction::from_operands(args)?))
    });
    registry.register(UCaseFunction::signature().clone(), |args| {
        Ok(Expression::UCase(UCaseFunction::from_operands(args)?))
    });
    registry.register(LCaseFunction::signature().clone(), |args| {
        Ok(Expression::LCase(LCaseFunction::from_operands(args)?))
    });
    registry.register(SubStrFunction::signature().clone(), |args| {
        Ok(Expression::SubStr(SubStrFunction::from_operands(args)?))
    });
    registry.register(EncodeForUriFunction::signature().clone(), |args| {
        Ok(Expression::EncodeForUri(EncodeForUriFunction::from_operands(args)?))
    });
}

/// XPath names of the string built-ins, paired with the keyword functor they alias
pub fn xpath_aliases() -> impl Iterator<Item = (String, &'static str)> {
    [
        ("concat", ConcatFunction::FUNCTOR),
        ("contains", ContainsFunction::FUNCTOR),
        ("starts-with", StrStartsFunction::FUNCTOR),
        ("ends-with", StrEndsFunction::FUNCTOR),
        ("substring-before", StrBeforeFunction::FUNCTOR),
        ("substring-after", StrAfterFunction::FUNCTOR),
        ("string-length", StrLenFunction::FUNCTOR),
        ("upper-case", UCaseFunction::FUNCTOR),
        ("lower-case", LCaseFunction::FUNCTOR),
        ("substring", SubStrFunction::FUNCTOR),
        ("encode-for-uri", EncodeForUriFunction::FUNCTOR),
    ]
    .into_iter()
    .map(|(local, functor)| (format!("{XPATH_FUNCTIONS_NAMESPACE}{local}"), functor))
}

/// Evaluate both operands of a binary string function and check they are compatible
fn compatible_arguments(
    functor: &str,
    args: &[ExprRef],
    context: &dyn EvaluationContext,
    row: RowId,
) -> Result<(Literal, Literal)> {
    let first = literal_argument(&args[0], context, row, functor)?;
    let second = literal_argument(&args[1], context, row, functor)?;
    check_compatible(functor, &first, &second)?;
    Ok((first, second))
}
