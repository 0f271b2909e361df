//! Topological ordering of activity-on-vertex (AOV) networks.

use crate::{error::GraphError, graph::Graph};

impl<T, E> Graph<T, E> {
    /// Orders the vertices so that every edge runs from an earlier position
    /// in the result to a later one, or reports [`GraphError::CycleDetected`]
    /// when no such order exists.
    ///
    /// Kahn's algorithm over a working copy of the in-degree counters; the
    /// counters owned by the graph are never touched, so repeated calls are
    /// idempotent.  The pending set is a LIFO stack, which fixes which of
    /// several ready vertices comes next but not the acyclicity verdict.
    ///
    /// On an undirected graph every edge is a mirrored pair, so any edge at
    /// all yields `CycleDetected`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
    pub fn topological_sort(&self) -> Result<Vec<usize>, GraphError> {
        let n = self.num_vertices();
        let mut in_degrees: Vec<usize> = self.vertices.iter().map(|slot| slot.in_degree).collect();
        let mut pending: Vec<usize> = (0..n).filter(|&pos| in_degrees[pos] == 0).collect();
        let mut order = Vec::with_capacity(n);

        while let Some(pos) = pending.pop() {
            order.push(pos);
            for record in &self.vertices[pos].out {
                in_degrees[record.dest] -= 1;
                if in_degrees[record.dest] == 0 {
                    pending.push(record.dest);
                }
            }
        }

        if order.len() < n {
            return Err(GraphError::CycleDetected);
        }
        Ok(order)
    }
}
