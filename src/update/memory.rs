//! In-memory dataset

use indexmap::IndexSet;
use log::trace;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

use super::dataset::{Dataset, Graph, GraphHandle, GraphName, Triple};
use crate::core::Result;

/// Graph backed by an insertion-ordered set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryGraph {
    triples: IndexSet<Triple>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple; returns false when it was already present
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }
}

impl FromIterator<Triple> for MemoryGraph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

impl Graph for MemoryGraph {
    fn triples(&self) -> Vec<Triple> {
        self.triples.iter().cloned().collect()
    }

    fn merge(&mut self, other: &dyn Graph) {
        self.triples.extend(other.triples());
    }

    fn clear(&mut self) {
        self.triples.clear();
    }

    fn len(&self) -> usize {
        self.triples.len()
    }
}

/// Dataset holding every graph in memory
///
/// The default graph always exists. Graphs are individually locked so a
/// transfer can read one graph while writing another.
#[derive(Clone)]
pub struct MemoryDataset {
    graphs: Arc<RwLock<FxHashMap<GraphName, GraphHandle>>>,
}

impl Default for MemoryDataset {
    fn default() -> Self {
        let mut graphs: FxHashMap<GraphName, GraphHandle> = FxHashMap::default();
        let default_graph: GraphHandle = Arc::new(RwLock::new(MemoryGraph::new()));
        graphs.insert(GraphName::Default, default_graph);
        Self {
            graphs: Arc::new(RwLock::new(graphs)),
        }
    }
}

impl MemoryDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a graph
    pub fn insert_graph<G: Graph + 'static>(&self, name: GraphName, graph: G) {
        let handle: GraphHandle = Arc::new(RwLock::new(graph));
        self.graphs.write().insert(name, handle);
    }

    /// Snapshot of a graph's triples, `None` when the graph does not exist
    pub fn triples(&self, name: &GraphName) -> Option<Vec<Triple>> {
        let graph = self.graphs.read().get(name).cloned()?;
        let triples = graph.read().triples();
        Some(triples)
    }

    /// Number of graphs, including the default graph
    pub fn graph_count(&self) -> usize {
        self.graphs.read().len()
    }
}

impl Dataset for MemoryDataset {
    fn has_graph(&self, name: &GraphName) -> bool {
        self.graphs.read().contains_key(name)
    }

    fn get_modifiable_graph(&self, name: &GraphName) -> Result<GraphHandle> {
        let mut graphs = self.graphs.write();
        let handle = graphs.entry(name.clone()).or_insert_with(|| {
            trace!("creating graph {name}");
            let graph: GraphHandle = Arc::new(RwLock::new(MemoryGraph::new()));
            graph
        });
        Ok(Arc::clone(handle))
    }

    fn remove_graph(&self, name: &GraphName) -> bool {
        match name {
            GraphName::Default => {
                let graph = self.graphs.read().get(name).cloned();
                if let Some(graph) = &graph {
                    graph.write().clear();
                }
                graph.is_some()
            }
            GraphName::Named(_) => self.graphs.write().remove(name).is_some(),
        }
    }
}
