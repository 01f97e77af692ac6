//! Alternating paths explored by the improvement search.
//!
//! A path starts at a source node and walks edges whose flags strictly
//! alternate. It carries everything the search needs to decide whether
//! flipping it helps:
//!
//! ```text
//! score = Σ weight(unmarked edges) − Σ weight(marked edges)
//! ```
//!
//! Edges are identified by arena index, so two distinct edges with equal
//! endpoints and weight never alias.

use std::collections::HashSet;

use crate::edge::{Edge, EdgeFlag, EdgeIndex, Side};

#[derive(Debug, Clone)]
pub struct AlternatingPath {
    edges: Vec<EdgeIndex>,
    members: HashSet<EdgeIndex>,
    visited_sources: HashSet<usize>,
    visited_dests: HashSet<usize>,
    start: usize,
    frontier: (Side, usize),
    last_flag: EdgeFlag,
    score: i64,
}

impl AlternatingPath {
    /// Length-1 path leaving the source end of `edge`.
    #[must_use]
    pub fn seed(index: EdgeIndex, edge: &Edge) -> Self {
        let mut path = Self {
            edges: Vec::new(),
            members: HashSet::new(),
            visited_sources: HashSet::from([edge.source()]),
            visited_dests: HashSet::new(),
            start: edge.source(),
            frontier: (Side::Source, edge.source()),
            last_flag: edge.flag(),
            score: 0,
        };
        path.push(index, edge);
        path
    }

    /// Copy of this path with `edge` appended at the frontier.
    #[must_use]
    pub fn extend(&self, index: EdgeIndex, edge: &Edge) -> Self {
        let mut path = self.clone();
        path.push(index, edge);
        path
    }

    fn push(&mut self, index: EdgeIndex, edge: &Edge) {
        let side = self.frontier.0.opposite();
        let node = edge.node(side);
        match side {
            Side::Source => self.visited_sources.insert(node),
            Side::Dest => self.visited_dests.insert(node),
        };
        self.frontier = (side, node);
        self.last_flag = edge.flag();
        self.score += match edge.flag() {
            EdgeFlag::Unmarked => i64::from(edge.weight()),
            EdgeFlag::Marked => -i64::from(edge.weight()),
        };
        self.edges.push(index);
        self.members.insert(index);
    }

    #[must_use]
    pub fn contains(&self, index: EdgeIndex) -> bool {
        self.members.contains(&index)
    }

    /// Whether the path may step onto `node`.
    ///
    /// Nodes are never revisited, except that the path may close back onto
    /// its start source, which turns it into an alternating cycle. Revisiting
    /// any other node would leave it with two marked edges after a flip.
    #[must_use]
    pub fn can_enter(&self, side: Side, node: usize) -> bool {
        match side {
            Side::Source => node == self.start || !self.visited_sources.contains(&node),
            Side::Dest => !self.visited_dests.contains(&node),
        }
    }

    /// The source the path started from.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The node at the open end of the path and the side it sits on.
    #[must_use]
    pub fn frontier(&self) -> (Side, usize) {
        self.frontier
    }

    #[must_use]
    pub fn last_flag(&self) -> EdgeFlag {
        self.last_flag
    }

    /// Change in total matched weight if this path were flipped.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(source: usize, dest: usize, weight: u32) -> Edge {
        let mut edge = Edge::new(source, dest, weight);
        edge.toggle();
        edge
    }

    #[test]
    fn seed_sits_on_destination() {
        let edge = Edge::new(2, 5, 4);
        let path = AlternatingPath::seed(EdgeIndex(0), &edge);
        assert_eq!(path.start(), 2);
        assert_eq!(path.frontier(), (Side::Dest, 5));
        assert_eq!(path.score(), 4);
        assert_eq!(path.len(), 1);
        assert_eq!(path.last_flag(), EdgeFlag::Unmarked);
        assert!(path.contains(EdgeIndex(0)));
    }

    #[test]
    fn marked_edges_subtract() {
        let first = Edge::new(0, 0, 10);
        let second = marked(1, 0, 3);
        let path = AlternatingPath::seed(EdgeIndex(0), &first).extend(EdgeIndex(1), &second);
        assert_eq!(path.score(), 7);
        assert_eq!(path.frontier(), (Side::Source, 1));
        assert_eq!(path.last_flag(), EdgeFlag::Marked);
        assert_eq!(path.edges(), &[EdgeIndex(0), EdgeIndex(1)]);
    }

    #[test]
    fn extend_leaves_original_untouched() {
        let first = Edge::new(0, 0, 1);
        let second = marked(1, 0, 1);
        let path = AlternatingPath::seed(EdgeIndex(0), &first);
        let longer = path.extend(EdgeIndex(1), &second);
        assert_eq!(path.len(), 1);
        assert_eq!(longer.len(), 2);
        assert!(!path.contains(EdgeIndex(1)));
    }

    #[test]
    fn visited_nodes_are_refused_except_start() {
        // 0 -M- 0 -U- 1 -M- 1
        let path = AlternatingPath::seed(EdgeIndex(0), &marked(0, 0, 1))
            .extend(EdgeIndex(1), &Edge::new(1, 0, 5))
            .extend(EdgeIndex(2), &marked(1, 1, 1));
        assert!(!path.can_enter(Side::Dest, 0));
        assert!(!path.can_enter(Side::Dest, 1));
        assert!(path.can_enter(Side::Dest, 2));
        assert!(path.can_enter(Side::Source, 0), "closing the cycle is allowed");
        assert!(!path.can_enter(Side::Source, 1));
        assert!(path.can_enter(Side::Source, 2));
    }
}
