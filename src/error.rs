/// Errors reported by graph operations.
///
/// Every variant is a recoverable condition returned to the caller; a failed
/// mutating call leaves the graph exactly as it was before the call.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// The vertex table is full; `insert_vertex` refused to grow past the
    /// capacity fixed at construction.
    #[error("vertex capacity {capacity} exceeded")]
    CapacityExceeded { capacity: usize },

    /// No live vertex carries the requested label.
    #[error("no vertex with the requested value")]
    VertexNotFound,

    /// A vertex position outside the live range `[0, num_vertices)`.
    #[error("position {0} is out of the live vertex range")]
    InvalidPosition(usize),

    /// No edge record runs between the two positions.
    #[error("no edge from position {from} to position {to}")]
    EdgeNotFound { from: usize, to: usize },

    /// The graph contains a cycle, so no topological order exists.
    #[error("graph contains a cycle")]
    CycleDetected,
}
