//! ADD, COPY and MOVE between graphs of a dataset

use log::debug;
use std::fmt;

use super::dataset::{Dataset, GraphName};
use crate::core::{Result, SparqlExprError};

/// Which transfer to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferKind {
    /// Merge the source into the destination
    Add,
    /// Replace the destination with the source
    Copy,
    /// Replace the destination with the source, then drop the source
    Move,
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "ADD"),
            Self::Copy => write!(f, "COPY"),
            Self::Move => write!(f, "MOVE"),
        }
    }
}

/// Graph-to-graph transfer command
///
/// In silent mode every failure is logged and discarded at [`TransferCommand::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCommand {
    kind: TransferKind,
    source: GraphName,
    destination: GraphName,
    silent: bool,
}

impl TransferCommand {
    pub fn new(kind: TransferKind, source: GraphName, destination: GraphName) -> Self {
        Self {
            kind,
            source,
            destination,
            silent: false,
        }
    }

    pub fn add(source: GraphName, destination: GraphName) -> Self {
        Self::new(TransferKind::Add, source, destination)
    }

    pub fn copy(source: GraphName, destination: GraphName) -> Self {
        Self::new(TransferKind::Copy, source, destination)
    }

    pub fn move_graph(source: GraphName, destination: GraphName) -> Self {
        Self::new(TransferKind::Move, source, destination)
    }

    /// Swallow failures instead of returning them
    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn kind(&self) -> TransferKind {
        self.kind
    }

    pub fn source(&self) -> &GraphName {
        &self.source
    }

    pub fn destination(&self) -> &GraphName {
        &self.destination
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Run the command against `dataset`
    pub fn apply(&self, dataset: &dyn Dataset) -> Result<()> {
        match self.execute(dataset) {
            Ok(()) => {
                debug!("{self} completed");
                Ok(())
            }
            Err(err) if self.silent => {
                debug!("{self} failed silently: {err}");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn execute(&self, dataset: &dyn Dataset) -> Result<()> {
        if self.source == self.destination {
            return Ok(());
        }
        if !dataset.has_graph(&self.source) {
            return Err(SparqlExprError::graph_not_found(self.source.to_string()));
        }

        let source = dataset.get_modifiable_graph(&self.source)?;
        let destination = dataset.get_modifiable_graph(&self.destination)?;
        {
            let source = source.read();
            let mut destination = destination.write();
            if self.kind != TransferKind::Add {
                destination.clear();
            }
            destination.merge(&*source);
            destination.dispose();
        }

        source.write().dispose();
        if self.kind == TransferKind::Move {
            dataset.remove_graph(&self.source);
        }
        Ok(())
    }
}

impl fmt::Display for TransferCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if self.silent {
            write!(f, " SILENT")?;
        }
        write!(f, " {} TO {}", self.source, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Literal, Term};
    use crate::update::{Graph, MemoryDataset, MemoryGraph, Triple};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn triple(object: &str) -> Triple {
        Triple::new(Term::iri("urn:s"), Term::iri("urn:p"), Literal::plain(object))
    }

    fn dataset() -> MemoryDataset {
        let dataset = MemoryDataset::new();
        dataset.insert_graph(GraphName::named("urn:a"), MemoryGraph::from_iter([triple("a")]));
        dataset.insert_graph(GraphName::named("urn:b"), MemoryGraph::from_iter([triple("b")]));
        dataset
    }

    #[test]
    fn test_add_merges() {
        let dataset = dataset();
        TransferCommand::add(GraphName::named("urn:a"), GraphName::named("urn:b"))
            .apply(&dataset)
            .unwrap();
        assert_eq!(
            dataset.triples(&GraphName::named("urn:b")),
            Some(vec![triple("b"), triple("a")])
        );
        assert!(dataset.has_graph(&GraphName::named("urn:a")));
    }

    #[test]
    fn test_copy_replaces() {
        let dataset = dataset();
        TransferCommand::copy(GraphName::named("urn:a"), GraphName::named("urn:b"))
            .apply(&dataset)
            .unwrap();
        assert_eq!(dataset.triples(&GraphName::named("urn:b")), Some(vec![triple("a")]));
        assert_eq!(dataset.triples(&GraphName::named("urn:a")), Some(vec![triple("a")]));
    }

    #[test]
    fn test_move_drops_source() {
        let dataset = dataset();
        TransferCommand::move_graph(GraphName::named("urn:a"), GraphName::named("urn:new"))
            .apply(&dataset)
            .unwrap();
        assert_eq!(dataset.triples(&GraphName::named("urn:new")), Some(vec![triple("a")]));
        assert!(!dataset.has_graph(&GraphName::named("urn:a")));
    }

    #[test]
    fn test_same_graph_is_noop() {
        let dataset = dataset();
        TransferCommand::move_graph(GraphName::named("urn:a"), GraphName::named("urn:a"))
            .apply(&dataset)
            .unwrap();
        assert_eq!(dataset.triples(&GraphName::named("urn:a")), Some(vec![triple("a")]));
    }

    #[test]
    fn test_missing_source() {
        let dataset = dataset();
        let command = TransferCommand::copy(GraphName::named("urn:none"), GraphName::Default);

        let err = command.apply(&dataset).unwrap_err();
        assert!(matches!(err, SparqlExprError::GraphNotFound { .. }));
        assert_eq!(err.to_string(), "SE0201: graph <urn:none> does not exist");

        command.clone().silent(true).apply(&dataset).unwrap();
        assert!(dataset.triples(&GraphName::Default).is_some_and(|t| t.is_empty()));
    }

    #[test]
    fn test_display() {
        let command =
            TransferCommand::add(GraphName::Default, GraphName::named("urn:g")).silent(true);
        assert_eq!(command.to_string(), "ADD SILENT DEFAULT TO <urn:g>");
        assert!(command.is_silent());
        assert_eq!(command.kind(), TransferKind::Add);
    }

    struct CountingGraph {
        inner: MemoryGraph,
        disposed: Arc<AtomicUsize>,
    }

    impl Graph for CountingGraph {
        fn triples(&self) -> Vec<Triple> {
            self.inner.triples()
        }

        fn merge(&mut self, other: &dyn Graph) {
            self.inner.merge(other);
        }

        fn clear(&mut self) {
            self.inner.clear();
        }

        fn len(&self) -> usize {
            self.inner.len()
        }

        fn dispose(&mut self) {
            self.disposed.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_handles_are_disposed() {
        let dataset = dataset();
        let disposed = Arc::new(AtomicUsize::new(0));
        let graph = CountingGraph {
            inner: MemoryGraph::new(),
            disposed: Arc::clone(&disposed),
        };
        dataset.insert_graph(GraphName::named("urn:counted"), graph);

        TransferCommand::add(GraphName::named("urn:a"), GraphName::named("urn:counted"))
            .apply(&dataset)
            .unwrap();
        assert_eq!(disposed.load(Ordering::SeqCst), 1);
        assert_eq!(
            dataset.triples(&GraphName::named("urn:counted")),
            Some(vec![triple("a")])
        );
    }
}
