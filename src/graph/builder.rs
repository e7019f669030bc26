//! Fluent API for building Graph instances.

use log::debug;

use crate::types::Vertex;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
pub struct GraphBuilder<V: Vertex> {
    capacity: usize,
    nodes: Vec<V>,
    edges: Vec<(V, V)>,
    dedup_edges: bool,
}

impl<V: Vertex> GraphBuilder<V> {
    /// Create a new builder that keeps repeated edges, like [`Graph::new`].
    pub fn new() -> Self {
        Self {
            capacity: 0,
            nodes: Vec::new(),
            edges: Vec::new(),
            dedup_edges: false,
        }
    }

    /// Pre-size the graph for `capacity` vertices.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Collapse repeated edges instead of listing them twice.
    pub fn dedup_edges(mut self, dedup: bool) -> Self {
        self.dedup_edges = dedup;
        self
    }

    /// Add an isolated vertex.
    pub fn node(mut self, v: V) -> Self {
        self.nodes.push(v);
        self
    }

    /// Add an edge. Both endpoints become vertices.
    pub fn edge(mut self, u: V, v: V) -> Self {
        self.edges.push((u, v));
        self
    }

    /// Add several edges.
    pub fn edges<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        self.edges.extend(edges);
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph<V> {
        let mut graph = Graph::with_capacity(self.capacity);
        if self.dedup_edges {
            for (u, v) in &self.edges {
                graph.add_node(u.clone());
                graph.add_node(v.clone());
            }
            for (u, v) in &self.edges {
                if let Err(err) = graph.add_edge(u, v) {
                    debug!("skipping edge: {}", err);
                }
            }
        } else {
            graph.extend_edges(self.edges);
        }

        for v in self.nodes {
            graph.add_node(v);
        }

        debug!(
            "builder produced {} vertices, {} edges (dedup: {})",
            graph.vertex_count(),
            graph.edge_count(),
            self.dedup_edges
        );
        graph
    }
}

impl<V: Vertex> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
