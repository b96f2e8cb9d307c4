//! Function library and the registry that builds function nodes by name

pub mod function;
pub mod functions;
pub mod signature;

pub use function::{FunctionFactory, FunctionRegistry};
pub use signature::{FunctionSignature, ParameterInfo, ValueType};
