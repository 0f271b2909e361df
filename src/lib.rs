//! Capacity-bounded adjacency-list graphs with AOV/AOE network analyses.
//!
//! The centerpiece is [`Graph`], a mutable labeled graph over a dense,
//! position-indexed vertex table with per-vertex outgoing edge rows.  On top
//! of it sit depth- and breadth-first traversal ([`search`]), topological
//! ordering with cycle detection ([`mod@topo`]), and critical-path analysis
//! of edge-weighted schedules ([`mod@critical_path`]).

pub mod critical_path;
pub mod directedness;
pub mod error;
pub mod graph;
pub mod search;
pub mod topo;
pub mod tracing_support;

pub use critical_path::CriticalPath;
pub use directedness::Directedness;
pub use error::GraphError;
pub use graph::{Graph, Neighbor};
pub use search::{BfsIterator, DfsIterator};
