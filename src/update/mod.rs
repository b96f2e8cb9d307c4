//! Graph-transfer commands (ADD, COPY, MOVE) and the dataset interface they run against

mod dataset;
mod memory;
mod transfer;

pub use dataset::{Dataset, Graph, GraphHandle, GraphName, Triple};
pub use memory::{MemoryDataset, MemoryGraph};
pub use transfer::{TransferCommand, TransferKind};
