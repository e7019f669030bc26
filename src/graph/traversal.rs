//! Graph traversal algorithms (BFS).

use std::collections::{HashMap, VecDeque};

use log::trace;

use crate::types::{GraphError, GraphResult, Hops, Vertex};

use super::Graph;

/// BFS from `start`, returning the hop level of every reached vertex.
///
/// Neighbors are expanded in adjacency order. Vertices absent from the
/// returned map are unreachable from `start`.
pub fn bfs_levels<V: Vertex>(graph: &Graph<V>, start: &V) -> GraphResult<HashMap<V, Hops>, V> {
    if !graph.contains(start) {
        return Err(GraphError::VertexNotFound(start.clone()));
    }

    let mut levels: HashMap<V, Hops> = HashMap::with_capacity(graph.vertex_count());
    let mut queue: VecDeque<(V, Hops)> = VecDeque::new();

    levels.insert(start.clone(), 0);
    queue.push_back((start.clone(), 0));

    while let Some((current, depth)) = queue.pop_front() {
        trace!("expanding {:?} at depth {}", current, depth);

        for neighbor in graph.neighbors_of(&current)? {
            if levels.contains_key(neighbor) {
                continue;
            }
            levels.insert(neighbor.clone(), depth + 1);
            queue.push_back((neighbor.clone(), depth + 1));
        }
    }

    Ok(levels)
}
