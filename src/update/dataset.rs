//! Dataset and graph interfaces consumed by the update layer

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

use crate::core::Result;
use crate::model::Term;

/// An RDF triple
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl Triple {
    pub fn new(
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// Name of a graph within a dataset
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GraphName {
    /// The unnamed default graph
    Default,
    /// A graph named by IRI
    Named(String),
}

impl GraphName {
    pub fn named(iri: impl Into<String>) -> Self {
        Self::Named(iri.into())
    }
}

impl fmt::Display for GraphName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("DEFAULT"),
            Self::Named(iri) => write!(f, "<{iri}>"),
        }
    }
}

/// A mutable set of triples
pub trait Graph: Send + Sync {
    /// Snapshot of the triples in the graph
    fn triples(&self) -> Vec<Triple>;

    /// Add every triple of `other` to this graph
    fn merge(&mut self, other: &dyn Graph);

    /// Remove every triple
    fn clear(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Release a handle obtained for modification, flushing pending changes
    fn dispose(&mut self) {}
}

/// Shared handle to a graph open for modification
pub type GraphHandle = Arc<RwLock<dyn Graph>>;

/// Collection of graphs addressed by name
pub trait Dataset: Send + Sync {
    fn has_graph(&self, name: &GraphName) -> bool;

    /// Graph open for modification, created empty when absent
    fn get_modifiable_graph(&self, name: &GraphName) -> Result<GraphHandle>;

    /// Remove a named graph; the default graph is cleared instead. Returns whether the graph existed.
    fn remove_graph(&self, name: &GraphName) -> bool;
}
