//! Critical-path analysis of activity-on-edge (AOE) networks.
//!
//! An AOE network is a directed acyclic graph whose edge weights are
//! activity durations.  The analysis computes, for every vertex (event), the
//! earliest time it can fire and the latest time it may fire without
//! delaying the overall schedule, then reports the zero-slack edges — the
//! activities on a longest source-to-sink path.

use std::ops::{Add, Sub};

use num_traits::{Bounded, Zero};

use crate::{error::GraphError, graph::Graph};

/// Result of [`Graph::critical_path`], indexed by vertex position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CriticalPath<E> {
    /// Earliest firing time `ve` of each vertex.
    pub earliest: Vec<E>,
    /// Latest permissible firing time `vl` of each vertex.
    pub latest: Vec<E>,
    /// The zero-slack edges as `(source, destination)` position pairs, in
    /// ascending source order.  Several disjoint critical paths may
    /// contribute edges.
    pub edges: Vec<(usize, usize)>,
    /// Total schedule length: the largest earliest time.
    pub length: E,
}

impl<T, E> Graph<T, E>
where
    E: Copy + Ord + Zero + Bounded + Add<Output = E> + Sub<Output = E>,
{
    /// Runs the two-pass longest-path analysis.
    ///
    /// Both relaxation passes walk an explicitly computed topological order
    /// (and its reverse) rather than raw position order, so vertices may be
    /// inserted in any order.  Cyclic graphs fail with
    /// [`GraphError::CycleDetected`] before anything is computed.
    ///
    /// The backward pass seeds sinks (vertices with no outgoing edges) to
    /// the schedule length and every other vertex to `E::max_value()` before
    /// tightening, so graphs with several sources or sinks come out right.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
    pub fn critical_path(&self) -> Result<CriticalPath<E>, GraphError> {
        let order = self.topological_sort()?;
        let n = self.num_vertices();

        // Forward pass: ve[j] = max(ve[j], ve[i] + w) in topological order.
        let mut earliest = vec![E::zero(); n];
        for &from in &order {
            for record in &self.vertices[from].out {
                let candidate = earliest[from] + record.weight;
                if candidate > earliest[record.dest] {
                    earliest[record.dest] = candidate;
                }
            }
        }
        let length = earliest.iter().copied().max().unwrap_or_else(E::zero);

        // Backward pass: vl[i] = min(vl[i], vl[j] - w) in reverse
        // topological order.
        let mut latest = vec![E::max_value(); n];
        for (pos, slot) in self.vertices.iter().enumerate() {
            if slot.out.is_empty() {
                latest[pos] = length;
            }
        }
        for &from in order.iter().rev() {
            for record in &self.vertices[from].out {
                let candidate = latest[record.dest] - record.weight;
                if candidate < latest[from] {
                    latest[from] = candidate;
                }
            }
        }

        // An edge (i -> j, w) is critical iff its activity has no slack:
        // ve[i] == vl[j] - w.
        let mut edges = Vec::new();
        for (from, slot) in self.vertices.iter().enumerate() {
            for record in &slot.out {
                if earliest[from] == latest[record.dest] - record.weight {
                    edges.push((from, record.dest));
                }
            }
        }

        Ok(CriticalPath {
            earliest,
            latest,
            edges,
            length,
        })
    }
}
