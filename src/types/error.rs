//! Error types for the hopgraph library.

use std::fmt::Debug;

use thiserror::Error;

/// All errors that can occur in the hopgraph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<V: Debug> {
    /// Vertex is not a member of the graph.
    #[error("Vertex {0:?} not found")]
    VertexNotFound(V),
}

/// Convenience result type for graph operations.
pub type GraphResult<T, V> = Result<T, GraphError<V>>;
