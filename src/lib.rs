//! hopgraph — undirected graph with breadth-first hop distances.
//!
//! Vertices are any hashable key. Edges are added incrementally and kept in
//! per-vertex adjacency lists; distances are computed by BFS on demand.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{bfs_levels, Graph, GraphBuilder, Vertices};
pub use types::{GraphError, GraphResult, Hops, Vertex};
