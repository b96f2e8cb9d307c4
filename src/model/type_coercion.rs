//! Argument predicates and coercions shared by the function library

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;

use super::xsd::{self, NumericKind};
use super::{Literal, Term};
use crate::core::{Result, SparqlExprError};

/// Accepts plain literals, language-tagged literals and `xsd:string` literals
pub fn is_string_literal(literal: &Literal) -> bool {
    match literal.datatype() {
        None => true,
        Some(datatype) => datatype == xsd::STRING,
    }
}

/// Accepts literals whose datatype is one of the XML Schema numeric types
pub fn is_numeric_literal(literal: &Literal) -> bool {
    literal.datatype().is_some_and(xsd::is_numeric)
}

/// Read a numeric literal as an integer index
///
/// Integer lexical forms are parsed directly. Decimal, float and double lexical
/// forms are rounded the way `fn:round` does (halves toward positive infinity).
/// Values beyond the `i64` range saturate; only ill-formed lexical forms fail.
pub fn to_integer(literal: &Literal, function: &str) -> Result<i64> {
    let lexical = literal.lexical_form().trim();
    let failure = || SparqlExprError::conversion_failure(function, literal.lexical_form());

    match literal.datatype().and_then(xsd::numeric_kind) {
        Some(NumericKind::Integer) => match lexical.parse::<i64>() {
            Ok(value) => Ok(value),
            Err(_) if is_integer_lexical(lexical) => Ok(saturated(lexical.starts_with('-'))),
            Err(_) => Err(failure()),
        },
        Some(NumericKind::Decimal) => {
            let value = Decimal::from_str(lexical).map_err(|_| failure())?;
            let floor = value.floor();
            let rounded = if value - floor >= Decimal::new(5, 1) {
                floor.checked_add(Decimal::ONE)
            } else {
                Some(floor)
            };
            Ok(rounded
                .and_then(|rounded| rounded.to_i64())
                .unwrap_or_else(|| saturated(value.is_sign_negative())))
        }
        Some(NumericKind::Float) | Some(NumericKind::Double) => {
            let value = parse_xsd_double(lexical)
                .filter(|value| !value.is_nan())
                .ok_or_else(failure)?;
            let floor = value.floor();
            let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
            // float to int casts saturate, infinities included
            Ok(rounded as i64)
        }
        None => Err(SparqlExprError::non_numeric_index(function)),
    }
}

fn saturated(negative: bool) -> i64 {
    if negative { i64::MIN } else { i64::MAX }
}

/// Read a numeric literal as a double
pub fn to_f64(literal: &Literal, function: &str) -> Result<f64> {
    let lexical = literal.lexical_form().trim();
    let failure = || SparqlExprError::conversion_failure(function, literal.lexical_form());

    match literal.datatype().and_then(xsd::numeric_kind) {
        Some(NumericKind::Integer) => match lexical.parse::<i64>() {
            Ok(value) => Ok(value as f64),
            // Out of i64 range but still a valid xsd:integer
            Err(_) if is_integer_lexical(lexical) => lexical.parse::<f64>().map_err(|_| failure()),
            Err(_) => Err(failure()),
        },
        Some(NumericKind::Decimal) => Decimal::from_str(lexical)
            .ok()
            .and_then(|value| value.to_f64())
            .ok_or_else(failure),
        Some(NumericKind::Float) | Some(NumericKind::Double) => {
            parse_xsd_double(lexical).ok_or_else(failure)
        }
        None => Err(SparqlExprError::type_mismatch(function, "non-numeric argument")),
    }
}

fn is_integer_lexical(lexical: &str) -> bool {
    let digits = lexical.strip_prefix(['+', '-']).unwrap_or(lexical);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_xsd_double(lexical: &str) -> Option<f64> {
    match lexical {
        "INF" | "+INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        // Rust also accepts "inf"/"infinity" spellings that XML Schema does not
        other if other.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => None,
        other => other.parse::<f64>().ok(),
    }
}

/// Effective boolean value of an evaluated operand
///
/// Booleans use their value (ill-formed lexical forms are false), string-like
/// literals are true when non-empty, numerics are false when zero, NaN or
/// ill-formed. IRIs, blank nodes and other typed literals have no EBV.
pub fn effective_boolean_value(value: Option<&Term>, function: &str) -> Result<bool> {
    let term = value.ok_or_else(|| SparqlExprError::null_operand(function))?;
    let Term::Literal(literal) = term else {
        return Err(SparqlExprError::type_mismatch(
            function,
            format!("{} has no effective boolean value", term.kind_name()),
        ));
    };

    match literal.datatype() {
        None => Ok(!literal.lexical_form().is_empty()),
        Some(xsd::STRING) => Ok(!literal.lexical_form().is_empty()),
        Some(xsd::BOOLEAN) => Ok(matches!(literal.lexical_form().trim(), "true" | "1")),
        Some(datatype) if xsd::is_numeric(datatype) => Ok(to_f64(literal, function)
            .map(|value| value != 0.0 && !value.is_nan())
            .unwrap_or(false)),
        Some(datatype) => Err(SparqlExprError::type_mismatch(
            function,
            format!("<{datatype}> has no effective boolean value"),
        )),
    }
}
