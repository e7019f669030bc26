//! Core graph structure — vertices with symmetric adjacency lists.

use std::collections::hash_map::Keys;
use std::collections::HashMap;

use log::debug;

use crate::types::{GraphError, GraphResult, Hops, Vertex};

use super::traversal::bfs_levels;

/// An undirected graph over vertices of type `V`.
///
/// The key set of `adjacency` is the vertex set: every vertex owns a
/// (possibly empty) neighbor list, and every neighbor is itself a vertex.
/// If `v` is listed under `u` then `u` is listed under `v`.
#[derive(Debug, Clone)]
pub struct Graph<V: Vertex> {
    /// Vertex -> neighbors in the order their edges were added.
    adjacency: HashMap<V, Vec<V>>,
}

impl<V: Vertex> Graph<V> {
    /// Build a graph from a list of edges.
    ///
    /// Repeated pairs are kept, so `(1, 2)` given twice lists `2` twice
    /// under `1`. Use [`GraphBuilder::dedup_edges`](super::GraphBuilder::dedup_edges)
    /// to collapse them instead.
    pub fn new<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let edges: Vec<(V, V)> = edges.into_iter().collect();
        let mut graph = Self::with_capacity(edges.len());
        graph.extend_edges(edges);

        debug!(
            "built graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        graph
    }

    /// Create an empty graph.
    pub fn empty() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Create an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(capacity),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges, counting duplicates and self-loops once each.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Whether `n` is a vertex of this graph.
    pub fn contains(&self, n: &V) -> bool {
        self.adjacency.contains_key(n)
    }

    /// Iterate over the vertices. Order is unspecified.
    pub fn vertices(&self) -> Vertices<'_, V> {
        Vertices {
            inner: self.adjacency.keys(),
        }
    }

    /// Alias for [`Graph::vertices`].
    pub fn iter(&self) -> Vertices<'_, V> {
        self.vertices()
    }

    /// Neighbors of `n`, in the order their edges were added.
    pub fn neighbors_of(&self, n: &V) -> GraphResult<&[V], V> {
        self.adjacency
            .get(n)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::VertexNotFound(n.clone()))
    }

    /// Length of the neighbor list of `n`.
    pub fn degree(&self, n: &V) -> GraphResult<usize, V> {
        self.neighbors_of(n).map(<[V]>::len)
    }

    /// Whether `v` is listed as a neighbor of `u`.
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|neighbors| neighbors.contains(v))
    }

    /// Add a vertex with no edges. Does nothing if it already exists.
    pub fn add_node(&mut self, v: V) {
        self.adjacency.entry(v).or_default();
    }

    /// Connect two existing vertices.
    ///
    /// Both endpoints must already be vertices; nothing is modified otherwise.
    /// An edge that is already present is left alone.
    pub fn add_edge(&mut self, u: &V, v: &V) -> GraphResult<(), V> {
        if !self.contains(u) {
            return Err(GraphError::VertexNotFound(u.clone()));
        }
        if !self.contains(v) {
            return Err(GraphError::VertexNotFound(v.clone()));
        }

        if self.has_edge(u, v) {
            debug!("edge {:?} -- {:?} already present", u, v);
            return Ok(());
        }

        self.link(u.clone(), v.clone());
        Ok(())
    }

    /// Breadth-first search from `start`.
    ///
    /// Returns one `(vertex, hops)` pair per vertex in the graph, in
    /// unspecified order. Vertices unreachable from `start` get `None`.
    pub fn bfs(&self, start: &V) -> GraphResult<Vec<(V, Option<Hops>)>, V> {
        let mut levels = bfs_levels(self, start)?;
        Ok(self
            .vertices()
            .map(|v| (v.clone(), levels.remove(v)))
            .collect())
    }

    /// Shortest hop distance between `n1` and `n2`.
    ///
    /// `Ok(None)` means both are vertices but `n2` is unreachable from `n1`.
    pub fn distance(&self, n1: &V, n2: &V) -> GraphResult<Option<Hops>, V> {
        if !self.contains(n2) {
            return Err(GraphError::VertexNotFound(n2.clone()));
        }
        let levels = bfs_levels(self, n1)?;
        Ok(levels.get(n2).copied())
    }

    /// Insert every endpoint, then link every pair in input order.
    pub(crate) fn extend_edges(&mut self, edges: Vec<(V, V)>) {
        for (u, v) in &edges {
            self.add_node(u.clone());
            self.add_node(v.clone());
        }
        for (u, v) in edges {
            self.link(u, v);
        }
    }

    /// Append each endpoint to the other's list. Both must be vertices.
    fn link(&mut self, u: V, v: V) {
        if let Some(neighbors) = self.adjacency.get_mut(&u) {
            neighbors.push(v.clone());
        }
        if let Some(neighbors) = self.adjacency.get_mut(&v) {
            neighbors.push(u);
        }
    }
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: Vertex> FromIterator<(V, V)> for Graph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Iterator over the vertices of a [`Graph`].
pub struct Vertices<'a, V> {
    inner: Keys<'a, V, Vec<V>>,
}

impl<'a, V> Iterator for Vertices<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Vertices<'_, V> {}

impl<'a, V: Vertex> IntoIterator for &'a Graph<V> {
    type Item = &'a V;
    type IntoIter = Vertices<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices()
    }
}
