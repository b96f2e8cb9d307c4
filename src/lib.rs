//! SPARQL scalar-expression core
//!
//! Evaluates SPARQL string and numeric functions over RDF literals, following the
//! language's exact rules for plain, language-tagged and typed literals.
//!
//! ```
//! use sparql_expr::{BindingTable, Expression, FunctionRegistry, Literal, Term};
//!
//! let registry = FunctionRegistry::standard();
//! let expr = registry
//!     .build("UCASE", [Expression::variable("name").into_ref()])
//!     .unwrap();
//!
//! let mut rows = BindingTable::new();
//! let row = rows.push_row([("name", Term::from(Literal::lang_tagged("chat", "fr")))]);
//! assert_eq!(
//!     expr.evaluate(&rows, row).unwrap(),
//!     Some(Term::from(Literal::lang_tagged("CHAT", "fr")))
//! );
//! ```

pub mod ast;
pub mod config;
pub mod core;
pub mod evaluator;
pub mod model;
pub mod registry;
pub mod update;

// Primary API
pub use ast::{
    ConstantFolder, ExprRef, Expression, ExpressionProcessor, ExpressionTransformer,
    ExpressionVisitor, FunctionNode, IdentityTransformer, Operands, SparqlFormatter,
    VariableSubstitution,
};
pub use config::{RegistryConfig, RegistryConfigBuilder};
pub use crate::core::{ErrorCode, Result, SparqlExprError};
pub use evaluator::{
    BindingTable, EmptyContext, EvaluationContext, RowId, StandardProcessor, check_compatible,
    is_compatible,
};
pub use model::{Literal, Term, effective_boolean_value};
pub use registry::{FunctionRegistry, FunctionSignature};
pub use update::{Dataset, Graph, GraphName, MemoryDataset, TransferCommand, TransferKind};
