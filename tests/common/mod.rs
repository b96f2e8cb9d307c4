//! Shared helpers for the integration tests

#![allow(dead_code)]

use sparql_expr::{ExprRef, Expression, Literal, Term};

/// Install a test logger once per test binary
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn constant(literal: Literal) -> ExprRef {
    Expression::constant(literal).into_ref()
}

pub fn var(name: &str) -> ExprRef {
    Expression::variable(name).into_ref()
}

pub fn plain(lexical: &str) -> Term {
    Term::from(Literal::plain(lexical))
}
