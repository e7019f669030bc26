//! Shared types for the hopgraph library.

pub mod error;

use std::fmt::Debug;
use std::hash::Hash;

pub use error::{GraphError, GraphResult};

/// Anything usable as a vertex identifier.
///
/// Blanket-implemented for every hashable, comparable, cloneable type.
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Vertex for T {}

/// Hop count between two vertices.
pub type Hops = u32;
