//! The core adjacency-list graph.
//!
//! A [`Graph`] owns a dense table of vertex slots.  A vertex's *position*
//! (its table index) is its identity; positions are contiguous in
//! `[0, num_vertices)` and stay dense across removals because
//! [`Graph::remove_vertex`] relocates the last slot into the freed index.
//! Positions are therefore only stable between structural mutations, and
//! callers must not cache them across a removal.
//!
//! Each slot holds the user label, an incrementally maintained in-degree
//! counter, and the vertex's outgoing edge row.  Rows are plain vectors
//! rather than linked chains; new records are appended, and no algorithm in
//! this crate relies on row order beyond that.

use std::fmt::{self, Display};
use std::mem;

use crate::{directedness::Directedness, error::GraphError};

#[derive(Clone, Debug)]
pub(crate) struct EdgeRecord<E> {
    pub(crate) dest: usize,
    pub(crate) weight: E,
}

#[derive(Clone, Debug)]
pub(crate) struct VertexSlot<T, E> {
    pub(crate) value: T,
    pub(crate) in_degree: usize,
    pub(crate) out: Vec<EdgeRecord<E>>,
}

/// One outgoing edge as seen by a neighbor query: the destination position
/// and a borrow of the edge weight.
#[derive(Debug, Eq, PartialEq)]
pub struct Neighbor<'g, E> {
    pub dest: usize,
    pub weight: &'g E,
}

impl<E> Clone for Neighbor<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Neighbor<'_, E> {}

/// A mutable labeled graph over vertex labels `T` and edge weights `E`,
/// bounded by a vertex capacity fixed at construction.
///
/// The graph is a plain exclusively-owned value: mutations take `&mut self`,
/// queries and algorithms take `&self`.  Nothing in here is thread-aware;
/// callers that share a graph across threads must serialize access
/// externally.
#[derive(Clone, Debug)]
pub struct Graph<T, E> {
    pub(crate) directedness: Directedness,
    pub(crate) capacity: usize,
    pub(crate) vertices: Vec<VertexSlot<T, E>>,
    pub(crate) num_edges: usize,
}

impl<T, E> Graph<T, E> {
    pub fn new(directedness: Directedness, capacity: usize) -> Self {
        Self {
            directedness,
            capacity,
            vertices: Vec::new(),
            num_edges: 0,
        }
    }

    pub fn directed(capacity: usize) -> Self {
        Self::new(Directedness::Directed, capacity)
    }

    pub fn undirected(capacity: usize) -> Self {
        Self::new(Directedness::Undirected, capacity)
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    pub fn is_directed(&self) -> bool {
        self.directedness.is_directed()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of logical edges.  An undirected edge counts once even though
    /// it is stored as two mirrored records.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The live position range `0..num_vertices`.
    pub fn positions(&self) -> std::ops::Range<usize> {
        0..self.vertices.len()
    }

    /// Gets the label stored at a position, or `None` when out of range.
    pub fn value(&self, pos: usize) -> Option<&T> {
        self.vertices.get(pos).map(|slot| &slot.value)
    }

    /// Gets an iterator over all labels in position order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.vertices.iter().map(|slot| &slot.value)
    }

    /// Count of edges terminating at the vertex, maintained incrementally by
    /// the mutating operations.  `None` when out of range.
    pub fn in_degree(&self, pos: usize) -> Option<usize> {
        self.vertices.get(pos).map(|slot| slot.in_degree)
    }

    pub fn out_degree(&self, pos: usize) -> Option<usize> {
        self.vertices.get(pos).map(|slot| slot.out.len())
    }

    pub(crate) fn check_position(&self, pos: usize) -> Result<(), GraphError> {
        if pos < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidPosition(pos))
        }
    }

    /// Appends a vertex at the next free position and returns that position.
    ///
    /// Fails with [`GraphError::CapacityExceeded`], without mutating
    /// anything, once `num_vertices` has reached the capacity bound.
    pub fn insert_vertex(&mut self, value: T) -> Result<usize, GraphError> {
        if self.vertices.len() >= self.capacity {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.vertices.push(VertexSlot {
            value,
            in_degree: 0,
            out: Vec::new(),
        });
        Ok(self.vertices.len() - 1)
    }

    /// Finds the position of a vertex by label with a linear scan.  When
    /// duplicate labels exist, the *first* match in position order wins.
    pub fn find_vertex(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.vertices.iter().position(|slot| slot.value == *value)
    }

    /// Removes the vertex at `pos` along with every edge touching it, and
    /// returns its label.
    ///
    /// Removal keeps the position space dense: the last slot is relocated
    /// into the freed index and every record in the graph that pointed at the
    /// old last index is rewritten.  The rewrite runs only after both edge
    /// deletion phases have settled, and it visits every row, not just the
    /// moved vertex's neighbors.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub fn remove_vertex(&mut self, pos: usize) -> Result<T, GraphError> {
        self.check_position(pos)?;

        // Phase (a): drop the vertex's own row, fixing destination
        // in-degrees and the logical edge count.  In undirected mode a
        // self-loop occupies two records of this row but is one edge, and
        // each remaining record accounts for one whole logical edge whose
        // mirror goes away in phase (b).
        let out = mem::take(&mut self.vertices[pos].out);
        for record in &out {
            if record.dest != pos {
                self.vertices[record.dest].in_degree -= 1;
            }
        }
        if self.directedness.is_directed() {
            self.num_edges -= out.len();
        } else {
            let self_loop_records = out.iter().filter(|r| r.dest == pos).count();
            self.num_edges -= (out.len() - self_loop_records) + self_loop_records / 2;
        }

        // Phase (b): drop every record in the other rows that targets `pos`.
        // In directed mode these are incoming edges in their own right; in
        // undirected mode they are the mirrors already counted above.
        let directed = self.directedness.is_directed();
        for (i, slot) in self.vertices.iter_mut().enumerate() {
            if i == pos {
                continue;
            }
            let before = slot.out.len();
            slot.out.retain(|record| record.dest != pos);
            if directed {
                self.num_edges -= before - slot.out.len();
            }
        }

        // Phase (c): compact.  The old last slot moves into the freed index,
        // so any record still pointing at the old last index is rewritten.
        let last = self.vertices.len() - 1;
        let removed = self.vertices.swap_remove(pos);
        if pos != last {
            for slot in &mut self.vertices {
                for record in &mut slot.out {
                    if record.dest == last {
                        record.dest = pos;
                    }
                }
            }
        }
        Ok(removed.value)
    }

    /// Inserts an edge between the vertices labeled `v1` and `v2`, resolving
    /// both endpoints by [`Graph::find_vertex`].  Fails with
    /// [`GraphError::VertexNotFound`], mutating nothing, if either label is
    /// absent.
    pub fn insert_edge(&mut self, v1: &T, v2: &T, weight: E) -> Result<(), GraphError>
    where
        T: PartialEq,
        E: Clone,
    {
        let from = self.find_vertex(v1).ok_or(GraphError::VertexNotFound)?;
        let to = self.find_vertex(v2).ok_or(GraphError::VertexNotFound)?;
        self.insert_edge_at(from, to, weight)
    }

    /// Position-addressed edge insertion.  Appends a record `from -> to` and
    /// bumps `to`'s in-degree; in undirected mode the mirror record and the
    /// symmetric in-degree bump happen in the same call.  One logical edge is
    /// counted either way.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, weight))
    )]
    pub fn insert_edge_at(&mut self, from: usize, to: usize, weight: E) -> Result<(), GraphError>
    where
        E: Clone,
    {
        self.check_position(from)?;
        self.check_position(to)?;
        if !self.directedness.is_directed() {
            self.vertices[to].out.push(EdgeRecord {
                dest: from,
                weight: weight.clone(),
            });
            self.vertices[from].in_degree += 1;
        }
        self.vertices[from].out.push(EdgeRecord { dest: to, weight });
        self.vertices[to].in_degree += 1;
        self.num_edges += 1;
        Ok(())
    }

    /// Removes the edge record `from -> to` and returns its weight; in
    /// undirected mode the mirror record is removed in the same call.
    ///
    /// Fails with [`GraphError::InvalidPosition`] for a position outside the
    /// live range and with [`GraphError::EdgeNotFound`] when no such record
    /// exists; neither failure mutates the graph.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<E, GraphError> {
        self.check_position(from)?;
        self.check_position(to)?;
        let index = self.vertices[from]
            .out
            .iter()
            .position(|record| record.dest == to)
            .ok_or(GraphError::EdgeNotFound { from, to })?;
        let record = self.vertices[from].out.remove(index);
        self.vertices[to].in_degree -= 1;
        if !self.directedness.is_directed() {
            // The mirror is an invariant of undirected insertion; for a
            // self-loop it is the second record in the same row.
            let mirror = self.vertices[to]
                .out
                .iter()
                .position(|record| record.dest == from)
                .expect("undirected edge is missing its mirror record");
            self.vertices[to].out.remove(mirror);
            self.vertices[from].in_degree -= 1;
        }
        self.num_edges -= 1;
        Ok(record.weight)
    }

    /// Looks up the weight of the edge `from -> to`.
    pub fn weight(&self, from: usize, to: usize) -> Result<&E, GraphError> {
        self.check_position(from)?;
        self.check_position(to)?;
        self.vertices[from]
            .out
            .iter()
            .find(|record| record.dest == to)
            .map(|record| &record.weight)
            .ok_or(GraphError::EdgeNotFound { from, to })
    }

    /// Gets an iterator over the vertex's outgoing row.  Empty when `pos` is
    /// out of range.
    pub fn neighbors(&self, pos: usize) -> impl Iterator<Item = Neighbor<'_, E>> + '_ {
        self.vertices
            .get(pos)
            .into_iter()
            .flat_map(|slot| slot.out.iter())
            .map(|record| Neighbor {
                dest: record.dest,
                weight: &record.weight,
            })
    }

    /// The first record of the vertex's row, or `None` when out of range or
    /// the row is empty.
    pub fn first_neighbor(&self, pos: usize) -> Option<Neighbor<'_, E>> {
        self.neighbors(pos).next()
    }

    /// The record immediately following the first one whose destination is
    /// `after_dest`, or `None` when out of range or exhausted.
    pub fn next_neighbor(&self, pos: usize, after_dest: usize) -> Option<Neighbor<'_, E>> {
        let slot = self.vertices.get(pos)?;
        let index = slot.out.iter().position(|record| record.dest == after_dest)?;
        slot.out.get(index + 1).map(|record| Neighbor {
            dest: record.dest,
            weight: &record.weight,
        })
    }
}

/// Human-readable adjacency dump, one line per vertex.
impl<T, E> Display for Graph<T, E>
where
    T: Display,
    E: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, slot) in self.vertices.iter().enumerate() {
            write!(f, "{}: {} (in-degree {})", pos, slot.value, slot.in_degree)?;
            for record in &slot.out {
                write!(f, " -> {} [{}]", record.dest, record.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
