//! RDF term model consumed and produced by expression evaluation

mod literal;
pub mod type_coercion;
pub mod xsd;

pub use literal::{Literal, Term};
pub use type_coercion::effective_boolean_value;
