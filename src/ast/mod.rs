//! Expression trees for SPARQL scalar expressions
//!
//! Trees are built bottom-up from [`Expression`] nodes and never mutated. Structural
//! change goes through [`Expression::rewrite`]; external algorithms plug in through
//! [`ExpressionVisitor`] and [`ExpressionProcessor`].

mod expression;
mod format;
mod transform;
mod visitor;

pub use expression::*;
pub use format::*;
pub use transform::*;
pub use visitor::*;
