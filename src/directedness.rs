/// Whether a graph treats its edges as one-way or symmetric.
///
/// Chosen once at construction and fixed for the lifetime of the graph.  In
/// an undirected graph one logical edge is stored as two mirrored records,
/// one in each endpoint's row; every mutation keeps the pair in lockstep.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Directedness {
    Directed,
    Undirected,
}

impl Directedness {
    pub fn is_directed(self) -> bool {
        matches!(self, Directedness::Directed)
    }
}
