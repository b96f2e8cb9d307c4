//! Evaluation support: row contexts, argument compatibility and the standard processor

mod compatibility;
mod context;
mod processor;

pub use compatibility::{check_compatible, is_compatible};
pub use context::{BindingTable, EmptyContext, EvaluationContext, RowId};
pub use processor::StandardProcessor;
