//! Evaluation context supplying variable bindings per row

use rustc_hash::FxHashMap;

use crate::model::Term;

/// Identifier of one candidate result row
pub type RowId = usize;

/// Variable bindings consumed by expression evaluation
///
/// The surrounding query engine owns the shape of a row; expressions only ask it
/// to resolve a variable name. Implementations must be safe to share between
/// threads evaluating different rows.
pub trait EvaluationContext: Send + Sync {
    /// Value bound to `variable` in `row`, `None` when unbound
    fn resolve(&self, variable: &str, row: RowId) -> Option<Term>;
}

/// Context with no bindings at all
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyContext;

impl EvaluationContext for EmptyContext {
    fn resolve(&self, _variable: &str, _row: RowId) -> Option<Term> {
        None
    }
}

/// Row-oriented binding table
#[derive(Debug, Default, Clone)]
pub struct BindingTable {
    rows: Vec<FxHashMap<String, Term>>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding a single row without bindings, for variable-free expressions
    pub fn with_empty_row() -> Self {
        Self {
            rows: vec![FxHashMap::default()],
        }
    }

    /// Append a row and return its identifier
    pub fn push_row<I, K>(&mut self, bindings: I) -> RowId
    where
        I: IntoIterator<Item = (K, Term)>,
        K: Into<String>,
    {
        let row = bindings
            .into_iter()
            .map(|(name, term)| (name.into(), term))
            .collect();
        self.rows.push(row);
        self.rows.len() - 1
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Bindings of one row
    pub fn row(&self, row: RowId) -> Option<&FxHashMap<String, Term>> {
        self.rows.get(row)
    }
}

impl EvaluationContext for BindingTable {
    fn resolve(&self, variable: &str, row: RowId) -> Option<Term> {
        self.rows.get(row)?.get(variable).cloned()
    }
}
