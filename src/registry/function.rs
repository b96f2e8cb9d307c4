//! Registry mapping functors to expression factories

use indexmap::IndexMap;
use log::{debug, warn};
use std::fmt;
use std::sync::Arc;

use super::functions::{register_math_functions, register_string_functions, xpath_aliases};
use super::signature::FunctionSignature;
use crate::ast::{ExprRef, Expression, Operands};
use crate::config::RegistryConfig;
use crate::core::{Result, SparqlExprError};

/// Builds a function node from its operands
pub type FunctionFactory = Arc<dyn Fn(Operands) -> Result<Expression> + Send + Sync>;

#[derive(Clone)]
struct RegisteredFunction {
    signature: FunctionSignature,
    factory: FunctionFactory,
}

impl RegisteredFunction {
    fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            signature: self.signature.renamed(name),
            factory: Arc::clone(&self.factory),
        }
    }
}

/// Functions available to whoever builds expression trees by name
///
/// Entries keep registration order, so `functors()` lists built-ins in the order
/// their families were installed.
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: IndexMap<String, RegisteredFunction>,
    case_insensitive: bool,
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("function_count", &self.functions.len())
            .field("case_insensitive", &self.case_insensitive)
            .finish()
    }
}

impl FunctionRegistry {
    /// Create an empty registry with exact functor matching
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in family installed
    pub fn standard() -> Self {
        Self::with_config(&RegistryConfig::default())
    }

    /// Registry with the families selected by `config`
    pub fn with_config(config: &RegistryConfig) -> Self {
        let mut registry = Self {
            functions: IndexMap::new(),
            case_insensitive: config.case_insensitive_functors,
        };

        if config.sparql_builtins || config.xpath_aliases {
            let mut builtins = Self::new();
            register_string_functions(&mut builtins);
            if config.xpath_aliases {
                for (alias, functor) in xpath_aliases() {
                    builtins.alias(alias, functor);
                }
            }
            for (name, entry) in builtins.functions {
                // XPath aliases are IRIs, keyword functors never contain a colon
                if name.contains(':') || config.sparql_builtins {
                    registry.insert(entry);
                }
            }
        }
        if config.math_extensions {
            register_math_functions(&mut registry);
        }

        debug!(
            "Function registry built with {} functions ({config:?})",
            registry.len()
        );
        registry
    }

    /// Register a function; a later registration under the same functor replaces the earlier one
    pub fn register<F>(&mut self, signature: FunctionSignature, factory: F)
    where
        F: Fn(Operands) -> Result<Expression> + Send + Sync + 'static,
    {
        self.insert(RegisteredFunction {
            signature,
            factory: Arc::new(factory),
        });
    }

    /// Make `target` reachable under another functor; does nothing if `target` is unknown
    pub fn alias(&mut self, alias: impl Into<String>, target: &str) {
        let alias = alias.into();
        match self.functions.get(target) {
            Some(entry) => {
                let entry = entry.renamed(alias);
                self.insert(entry);
            }
            None => warn!("Cannot alias '{alias}' to unknown function '{target}'"),
        }
    }

    fn insert(&mut self, entry: RegisteredFunction) {
        let name = entry.signature.name.clone();
        if self.functions.insert(name.clone(), entry).is_some() {
            warn!("Function '{name}' registered twice, keeping the latest registration");
        }
    }

    fn lookup(&self, functor: &str) -> Option<&RegisteredFunction> {
        self.functions.get(functor).or_else(|| {
            self.case_insensitive
                .then(|| self.functions.get(&functor.to_ascii_uppercase()))
                .flatten()
        })
    }

    /// Build a function node, validating the functor and the number of operands
    pub fn build(
        &self,
        functor: &str,
        operands: impl IntoIterator<Item = ExprRef>,
    ) -> Result<Expression> {
        let entry = self
            .lookup(functor)
            .ok_or_else(|| SparqlExprError::unknown_function(functor))?;
        let operands: Operands = operands.into_iter().collect();
        entry.signature.check_arity(operands.len())?;
        (entry.factory)(operands)
    }

    pub fn contains(&self, functor: &str) -> bool {
        self.lookup(functor).is_some()
    }

    pub fn signature(&self, functor: &str) -> Option<&FunctionSignature> {
        self.lookup(functor).map(|entry| &entry.signature)
    }

    /// Registered functors in registration order
    pub fn functors(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
