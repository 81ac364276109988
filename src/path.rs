use std::fmt;

use itertools::Itertools;

/// Represents an ordered sequence of vertices in which consecutive pairs are
/// connected by a directed edge.
///
/// The depth of a path is its hop count: one less than the number of
/// vertices, so a path holding only its start vertex has depth 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<V> {
    vertices: Vec<V>,
}

impl<V> Path<V> {
    /// Create a path holding a single start vertex.
    #[must_use]
    pub fn new(start: V) -> Self {
        Path {
            vertices: vec![start],
        }
    }

    /// Create a path from a vertex sequence.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty; a path always has a start vertex.
    #[must_use]
    pub fn from_vertices(vertices: Vec<V>) -> Self {
        assert!(!vertices.is_empty(), "a path must have at least one vertex");

        Path { vertices }
    }

    /// The number of vertices on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the path holds no vertices. Always false for a constructed path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The hop count of the path.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.vertices.len() - 1
    }

    /// The first vertex.
    #[must_use]
    pub fn start(&self) -> &V {
        &self.vertices[0]
    }

    /// The last vertex.
    #[must_use]
    pub fn end(&self) -> &V {
        &self.vertices[self.vertices.len() - 1]
    }

    /// Iterate over the vertices in order.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    /// Consume the path, returning its vertex sequence.
    #[must_use]
    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }
}

impl<V: fmt::Display> fmt::Display for Path<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vertices.iter().join(","))
    }
}
