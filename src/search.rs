//! Graph traversal.
//!
//! [`DfsIterator`] and [`BfsIterator`] borrow the graph and yield vertex
//! positions.  Each traversal owns a fresh visited marker sized to the
//! current vertex count; no marker state survives a call.  The whole-graph
//! entry points restart from every not-yet-visited vertex in ascending
//! position order, so disconnected graphs are covered by a sequence of
//! trees; the `*_forest` methods expose that grouping directly.
//!
//! The caller-supplied "visit effect" is the iterator contract: apply the
//! effect to each yielded position.

use std::collections::VecDeque;

use bitvec::prelude::*;

use crate::{error::GraphError, graph::Graph};

pub struct DfsIterator<'g, T, E> {
    graph: &'g Graph<T, E>,
    visited: BitVec,
    seeds: std::vec::IntoIter<usize>,
    stack: Vec<usize>,
}

impl<'g, T, E> DfsIterator<'g, T, E> {
    fn new(graph: &'g Graph<T, E>, seeds: Vec<usize>) -> Self {
        Self {
            graph,
            visited: bitvec![0; graph.num_vertices()],
            seeds: seeds.into_iter(),
            stack: Vec::new(),
        }
    }

    /// Pushes the next unvisited seed, if any.  Each successful pull starts
    /// a new tree of the traversal forest.
    fn pull_seed(&mut self) -> bool {
        for seed in self.seeds.by_ref() {
            if !self.visited[seed] {
                self.stack.push(seed);
                return true;
            }
        }
        false
    }

    fn next_in_tree(&mut self) -> Option<usize> {
        while let Some(pos) = self.stack.pop() {
            if self.visited[pos] {
                continue;
            }
            self.visited.set(pos, true);
            // Pushing the row in reverse makes the stack pop neighbors in
            // row order, matching the recursive preorder.
            let successors: Vec<usize> = self.graph.neighbors(pos).map(|n| n.dest).collect();
            for dest in successors.into_iter().rev() {
                if !self.visited[dest] {
                    self.stack.push(dest);
                }
            }
            return Some(pos);
        }
        None
    }
}

impl<T, E> Iterator for DfsIterator<'_, T, E> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pos) = self.next_in_tree() {
                return Some(pos);
            }
            if !self.pull_seed() {
                return None;
            }
        }
    }
}

pub struct BfsIterator<'g, T, E> {
    graph: &'g Graph<T, E>,
    visited: BitVec,
    seeds: std::vec::IntoIter<usize>,
    queue: VecDeque<usize>,
}

impl<'g, T, E> BfsIterator<'g, T, E> {
    fn new(graph: &'g Graph<T, E>, seeds: Vec<usize>) -> Self {
        Self {
            graph,
            visited: bitvec![0; graph.num_vertices()],
            seeds: seeds.into_iter(),
            queue: VecDeque::new(),
        }
    }

    fn pull_seed(&mut self) -> bool {
        for seed in self.seeds.by_ref() {
            if !self.visited[seed] {
                self.visited.set(seed, true);
                self.queue.push_back(seed);
                return true;
            }
        }
        false
    }

    fn next_in_component(&mut self) -> Option<usize> {
        let pos = self.queue.pop_front()?;
        for neighbor in self.graph.neighbors(pos) {
            // Marking at first discovery keeps a vertex from being enqueued
            // twice.
            if !self.visited[neighbor.dest] {
                self.visited.set(neighbor.dest, true);
                self.queue.push_back(neighbor.dest);
            }
        }
        Some(pos)
    }
}

impl<T, E> Iterator for BfsIterator<'_, T, E> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pos) = self.next_in_component() {
                return Some(pos);
            }
            if !self.pull_seed() {
                return None;
            }
        }
    }
}

impl<T, E> Graph<T, E> {
    /// Depth-first traversal of the whole graph, restarting from each
    /// unvisited vertex in ascending position order.
    pub fn dfs(&self) -> DfsIterator<'_, T, E> {
        DfsIterator::new(self, self.positions().collect())
    }

    /// Depth-first traversal of the vertices reachable from `pos`.
    pub fn dfs_from(&self, pos: usize) -> Result<DfsIterator<'_, T, E>, GraphError> {
        self.check_position(pos)?;
        Ok(DfsIterator::new(self, vec![pos]))
    }

    /// Breadth-first traversal of the whole graph, same restart discipline
    /// as [`Graph::dfs`].
    pub fn bfs(&self) -> BfsIterator<'_, T, E> {
        BfsIterator::new(self, self.positions().collect())
    }

    /// Breadth-first traversal of the vertices reachable from `pos`.
    pub fn bfs_from(&self, pos: usize) -> Result<BfsIterator<'_, T, E>, GraphError> {
        self.check_position(pos)?;
        Ok(BfsIterator::new(self, vec![pos]))
    }

    /// The DFS forest: one preorder visit sequence per
    /// (weakly-)connected component, components in ascending order of their
    /// lowest position.
    pub fn dfs_forest(&self) -> Vec<Vec<usize>> {
        let mut iter = self.dfs();
        let mut forest = Vec::new();
        while iter.pull_seed() {
            let mut tree = Vec::new();
            while let Some(pos) = iter.next_in_tree() {
                tree.push(pos);
            }
            forest.push(tree);
        }
        forest
    }

    /// The BFS forest, shaped like [`Graph::dfs_forest`].
    pub fn bfs_forest(&self) -> Vec<Vec<usize>> {
        let mut iter = self.bfs();
        let mut forest = Vec::new();
        while iter.pull_seed() {
            let mut component = Vec::new();
            while let Some(pos) = iter.next_in_component() {
                component.push(pos);
            }
            forest.push(component);
        }
        forest
    }
}
