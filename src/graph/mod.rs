mod adjacency;
mod graph;
mod io;

pub use adjacency::AdjacencyList;
pub use io::read_adjacency;
pub(crate) use graph::Graph;
