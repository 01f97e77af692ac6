//! Weighted bipartite matchmaking graph.
//!
//! Sources are offers, destinations are requests. All edges live in one
//! arena; each node keeps a list of arena indices, so an edge is shared by
//! its source and destination lists without aliasing.
//!
//! ## Algorithm
//!
//! 1. [`find_initial_matching`](MatchmakingGraph::find_initial_matching):
//!    greedy warm start, valid but not good
//! 2. [`improve_match`](MatchmakingGraph::improve_match): breadth-first
//!    search for one alternating path with positive score, then flip it
//! 3. Repeat 2 until no such path exists
//!
//! Every flip strictly increases the total matched weight, which is bounded
//! by the sum of all edge weights, so the loop terminates. The result is a
//! local optimum under single-path improvement.

use std::collections::{HashSet, VecDeque};

use civmatch_types::{CivmatchError, InitialMatching, Result};

use crate::{
    edge::{Edge, EdgeFlag, EdgeIndex, Side},
    path::AlternatingPath,
};

#[derive(Debug, Clone)]
pub struct MatchmakingGraph {
    edges: Vec<Edge>,
    source_edges: Vec<Vec<EdgeIndex>>,
    dest_edges: Vec<Vec<EdgeIndex>>,
    initial_matching: InitialMatching,
}

impl MatchmakingGraph {
    /// Empty graph over `source_count` offers and `dest_count` requests.
    #[must_use]
    pub fn new(source_count: usize, dest_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            source_edges: vec![Vec::new(); source_count],
            dest_edges: vec![Vec::new(); dest_count],
            initial_matching: InitialMatching::default(),
        }
    }

    /// Select how the greedy warm start tracks used endpoints.
    #[must_use]
    pub fn with_initial_matching(mut self, mode: InitialMatching) -> Self {
        self.initial_matching = mode;
        self
    }

    /// Add an edge between `source` and `dest`.
    ///
    /// The graph does not deduplicate; callers add at most one edge per pair.
    ///
    /// # Panics
    /// If an index is out of range or `weight` is zero. Both can only come
    /// from a bug in the caller's edge construction.
    pub fn add_edge(&mut self, source: usize, dest: usize, weight: u32) -> EdgeIndex {
        self.try_add_edge(source, dest, weight)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Checked variant of [`add_edge`](Self::add_edge).
    pub fn try_add_edge(&mut self, source: usize, dest: usize, weight: u32) -> Result<EdgeIndex> {
        if source >= self.source_edges.len() {
            return Err(CivmatchError::SourceIndexOutOfRange {
                index: source,
                count: self.source_edges.len(),
            });
        }
        if dest >= self.dest_edges.len() {
            return Err(CivmatchError::DestIndexOutOfRange {
                index: dest,
                count: self.dest_edges.len(),
            });
        }
        if weight == 0 {
            return Err(CivmatchError::NonPositiveWeight {
                source_index: source,
                dest_index: dest,
            });
        }

        let index = EdgeIndex(self.edges.len());
        self.edges.push(Edge::new(source, dest, weight));
        self.source_edges[source].push(index);
        self.dest_edges[dest].push(index);
        Ok(index)
    }

    /// Greedy warm start.
    ///
    /// Clears any existing matching, then walks sources in index order and
    /// marks, for each unused source, its first edge into an unused
    /// destination.
    pub fn find_initial_matching(&mut self) {
        for edge in &mut self.edges {
            if edge.is_marked() {
                edge.toggle();
            }
        }

        let mut used = UsedEndpoints::new(self.initial_matching);
        for source in 0..self.source_edges.len() {
            if used.source_used(source) {
                continue;
            }
            let pick = self.source_edges[source]
                .iter()
                .copied()
                .find(|&index| !used.dest_used(self.edges[index.0].dest()));
            if let Some(index) = pick {
                let edge = &mut self.edges[index.0];
                edge.toggle();
                used.mark(source, edge.dest());
                tracing::trace!(
                    source,
                    dest = edge.dest(),
                    weight = edge.weight(),
                    "Initial match"
                );
            }
        }
    }

    /// Try to apply exactly one augmenting path.
    ///
    /// Returns `true` if the total matched weight strictly increased, `false`
    /// if no single alternating path can improve the current matching.
    ///
    /// Paths whose [`SearchBound`] shows that neither they nor any extension
    /// can gain weight are dropped before they are queued. Dropping them does
    /// not change which usable path is found first.
    pub fn improve_match(&mut self) -> bool {
        let bound = SearchBound::new(self);
        let mut queue = VecDeque::new();
        let mut pruned = 0_usize;
        for adjacency in &self.source_edges {
            // A matched source may only start along its own matched edge.
            let seeds = match adjacency.iter().find(|i| self.edges[i.0].is_marked()) {
                Some(matched) => std::slice::from_ref(matched),
                None => adjacency.as_slice(),
            };
            for &index in seeds {
                let edge = &self.edges[index.0];
                let path = AlternatingPath::seed(index, edge);
                let headroom = bound.seed_headroom(edge);
                if bound.is_hopeless(&path, headroom) {
                    pruned += 1;
                } else {
                    queue.push_back((path, headroom));
                }
            }
        }

        let mut explored = 0_usize;
        while let Some((path, headroom)) = queue.pop_front() {
            explored += 1;
            if self.can_use_path(&path) {
                self.flip_path(&path);
                return true;
            }

            let wanted = path.last_flag().opposite();
            let (side, node) = path.frontier();
            let next_side = side.opposite();
            for &index in self.incident(side, node) {
                let edge = &self.edges[index.0];
                if edge.flag() != wanted || path.contains(index) {
                    continue;
                }
                if !path.can_enter(next_side, edge.node(next_side)) {
                    continue;
                }
                let next = path.extend(index, edge);
                let headroom = bound.after_step(&next, edge, headroom);
                if bound.is_hopeless(&next, headroom) {
                    pruned += 1;
                } else {
                    queue.push_back((next, headroom));
                }
            }
        }

        tracing::trace!(explored, pruned, "No augmenting path");
        false
    }

    /// Greedy warm start followed by improvement until a local optimum.
    ///
    /// Returns the number of augmenting paths applied.
    pub fn find_best_matching(&mut self) -> usize {
        self.find_initial_matching();
        let mut improvements = 0;
        while self.improve_match() {
            improvements += 1;
        }
        improvements
    }

    /// Currently marked edges, in source order.
    pub fn matching_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.source_edges
            .iter()
            .flatten()
            .map(|index| &self.edges[index.0])
            .filter(|edge| edge.is_marked())
    }

    /// Sum of the weights of all marked edges.
    #[must_use]
    pub fn total_matched_weight(&self) -> u64 {
        self.matching_edges().map(|e| u64::from(e.weight())).sum()
    }

    /// Check that no two marked edges share a source or a destination.
    pub fn verify_matching(&self) -> Result<()> {
        for (side, lists) in [(Side::Source, &self.source_edges), (Side::Dest, &self.dest_edges)] {
            for (node, adjacency) in lists.iter().enumerate() {
                let marked = adjacency
                    .iter()
                    .filter(|i| self.edges[i.0].is_marked())
                    .count();
                if marked > 1 {
                    return Err(CivmatchError::InvalidMatching {
                        reason: format!("{side:?} {node} has {marked} marked edges"),
                    });
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn edge(&self, index: EdgeIndex) -> Option<&Edge> {
        self.edges.get(index.0)
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn source_count(&self) -> usize {
        self.source_edges.len()
    }

    #[must_use]
    pub fn dest_count(&self) -> usize {
        self.dest_edges.len()
    }

    /// Edges leaving `source`, or an empty slice if out of range.
    #[must_use]
    pub fn source_edges(&self, source: usize) -> &[EdgeIndex] {
        self.source_edges
            .get(source)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Edges entering `dest`, or an empty slice if out of range.
    #[must_use]
    pub fn dest_edges(&self, dest: usize) -> &[EdgeIndex] {
        self.dest_edges
            .get(dest)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn incident(&self, side: Side, node: usize) -> &[EdgeIndex] {
        match side {
            Side::Source => &self.source_edges[node],
            Side::Dest => &self.dest_edges[node],
        }
    }

    /// A path is usable if flipping it gains weight and leaves its frontier
    /// with no marked edge outside the path. Interior nodes are safe because
    /// the path alternates; the start node is safe by how paths are seeded.
    fn can_use_path(&self, path: &AlternatingPath) -> bool {
        if path.score() <= 0 {
            return false;
        }
        let (side, node) = path.frontier();
        self.incident(side, node)
            .iter()
            .all(|&index| !self.edges[index.0].is_marked() || path.contains(index))
    }

    fn flip_path(&mut self, path: &AlternatingPath) {
        for index in path.edges() {
            self.edges[index.0].toggle();
        }
        tracing::debug!(
            path_len = path.len(),
            gain = path.score(),
            total = self.total_matched_weight(),
            "Augmenting path applied"
        );
    }
}

/// Upper bound on the weight an alternating path can still gain.
///
/// A node entered along an unmarked edge either ends the path or has to
/// leave along its own marked edge, so it adds at most its heaviest unmarked
/// edge minus its matched weight. Summing that over the nodes a path has not
/// visited yet bounds every extension of the path. A matched start source
/// can also be re-entered once to close a cycle, worth at most its heaviest
/// unmarked edge.
///
/// Paths from a matched start enter sources along unmarked edges; paths
/// from a free start enter destinations. Each path only draws on the side
/// it can enter.
struct SearchBound {
    source_gain: Vec<i64>,
    dest_gain: Vec<i64>,
    source_total: i64,
    dest_total: i64,
    source_heaviest: Vec<i64>,
    source_matched: Vec<i64>,
    dest_matched: Vec<i64>,
}

impl SearchBound {
    fn new(graph: &MatchmakingGraph) -> Self {
        let profile = |lists: &[Vec<EdgeIndex>]| -> (Vec<i64>, Vec<i64>) {
            lists
                .iter()
                .map(|adjacency| {
                    let mut heaviest = 0;
                    let mut matched = 0;
                    for index in adjacency {
                        let edge = &graph.edges[index.0];
                        let weight = i64::from(edge.weight());
                        if edge.is_marked() {
                            matched = weight;
                        } else {
                            heaviest = heaviest.max(weight);
                        }
                    }
                    (heaviest, matched)
                })
                .unzip()
        };
        let (source_heaviest, source_matched) = profile(graph.source_edges.as_slice());
        let (dest_heaviest, dest_matched) = profile(graph.dest_edges.as_slice());

        let gain = |heaviest: &[i64], matched: &[i64]| -> Vec<i64> {
            heaviest
                .iter()
                .zip(matched)
                .map(|(h, m)| (h - m).max(0))
                .collect()
        };
        let source_gain = gain(&source_heaviest, &source_matched);
        let dest_gain = gain(&dest_heaviest, &dest_matched);

        Self {
            source_total: source_gain.iter().sum(),
            dest_total: dest_gain.iter().sum(),
            source_gain,
            dest_gain,
            source_heaviest,
            source_matched,
            dest_matched,
        }
    }

    /// Headroom of the one-edge path along `edge`.
    fn seed_headroom(&self, edge: &Edge) -> i64 {
        let start = edge.source();
        if edge.is_marked() {
            self.source_total - self.source_gain[start] + self.source_heaviest[start]
        } else {
            self.dest_total - self.dest_gain[edge.dest()]
        }
    }

    /// Headroom left after `path` stepped along `edge` onto its frontier.
    fn after_step(&self, path: &AlternatingPath, edge: &Edge, headroom: i64) -> i64 {
        if edge.is_marked() {
            return headroom;
        }
        match path.frontier() {
            (Side::Source, node) if node == path.start() => headroom - self.source_heaviest[node],
            (Side::Source, node) => headroom - self.source_gain[node],
            (Side::Dest, node) => headroom - self.dest_gain[node],
        }
    }

    /// Whether no extension of `path`, itself included, can score above zero.
    fn is_hopeless(&self, path: &AlternatingPath, headroom: i64) -> bool {
        // After an unmarked step the frontier's own marked edge is still owed.
        let owed = match (path.last_flag(), path.frontier()) {
            (EdgeFlag::Marked, _) => 0,
            (EdgeFlag::Unmarked, (Side::Source, node)) if node == path.start() => 0,
            (EdgeFlag::Unmarked, (Side::Source, node)) => self.source_matched[node],
            (EdgeFlag::Unmarked, (Side::Dest, node)) => self.dest_matched[node],
        };
        path.score() - owed + headroom <= 0
    }
}

/// Endpoints consumed by the greedy warm start.
enum UsedEndpoints {
    Split {
        sources: HashSet<usize>,
        dests: HashSet<usize>,
    },
    Shared(HashSet<usize>),
}

impl UsedEndpoints {
    fn new(mode: InitialMatching) -> Self {
        match mode {
            InitialMatching::SplitIndexSets => Self::Split {
                sources: HashSet::new(),
                dests: HashSet::new(),
            },
            InitialMatching::SharedIndexSet => Self::Shared(HashSet::new()),
        }
    }

    fn source_used(&self, source: usize) -> bool {
        match self {
            Self::Split { sources, .. } => sources.contains(&source),
            Self::Shared(used) => used.contains(&source),
        }
    }

    fn dest_used(&self, dest: usize) -> bool {
        match self {
            Self::Split { dests, .. } => dests.contains(&dest),
            Self::Shared(used) => used.contains(&dest),
        }
    }

    fn mark(&mut self, source: usize, dest: usize) {
        match self {
            Self::Split { sources, dests } => {
                sources.insert(source);
                dests.insert(dest);
            }
            Self::Shared(used) => {
                used.insert(source);
                used.insert(dest);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matching(graph: &MatchmakingGraph) -> Vec<(usize, usize, u32)> {
        graph
            .matching_edges()
            .map(|e| (e.source(), e.dest(), e.weight()))
            .collect()
    }

    #[test]
    fn add_edge_links_both_sides() {
        let mut graph = MatchmakingGraph::new(2, 3);
        let index = graph.add_edge(1, 2, 4);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.source_edges(1), &[index]);
        assert_eq!(graph.dest_edges(2), &[index]);
        assert!(graph.source_edges(0).is_empty());
        assert_eq!(graph.edge(index).map(Edge::weight), Some(4));
    }

    #[test]
    fn try_add_edge_rejects_contract_violations() {
        let mut graph = MatchmakingGraph::new(1, 1);
        assert!(matches!(
            graph.try_add_edge(1, 0, 1),
            Err(CivmatchError::SourceIndexOutOfRange { index: 1, count: 1 })
        ));
        assert!(matches!(
            graph.try_add_edge(0, 3, 1),
            Err(CivmatchError::DestIndexOutOfRange { index: 3, count: 1 })
        ));
        assert!(matches!(
            graph.try_add_edge(0, 0, 0),
            Err(CivmatchError::NonPositiveWeight { .. })
        ));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    #[should_panic(expected = "CM_ERR_100")]
    fn add_edge_out_of_range_panics() {
        let mut graph = MatchmakingGraph::new(1, 1);
        graph.add_edge(5, 0, 1);
    }

    #[test]
    #[should_panic(expected = "CM_ERR_102")]
    fn add_edge_zero_weight_panics() {
        let mut graph = MatchmakingGraph::new(1, 1);
        graph.add_edge(0, 0, 0);
    }

    #[test]
    fn initial_matching_takes_first_free_destination() {
        let mut graph = MatchmakingGraph::new(2, 2);
        graph.add_edge(0, 0, 1);
        graph.add_edge(0, 1, 10);
        graph.add_edge(1, 0, 10);
        graph.add_edge(1, 1, 1);
        graph.find_initial_matching();
        assert_eq!(matching(&graph), vec![(0, 0, 1), (1, 1, 1)]);
    }

    #[test]
    fn improve_match_finds_swap() {
        let mut graph = MatchmakingGraph::new(2, 2);
        graph.add_edge(0, 0, 1);
        graph.add_edge(0, 1, 10);
        graph.add_edge(1, 0, 10);
        graph.add_edge(1, 1, 1);
        graph.find_initial_matching();
        assert_eq!(graph.total_matched_weight(), 2);

        while graph.improve_match() {}
        assert_eq!(matching(&graph), vec![(0, 1, 10), (1, 0, 10)]);
        assert_eq!(graph.total_matched_weight(), 20);
    }

    #[test]
    fn improve_match_on_empty_graph_is_false() {
        let mut graph = MatchmakingGraph::new(0, 0);
        assert!(!graph.improve_match());
        assert_eq!(graph.find_best_matching(), 0);
        assert_eq!(graph.matching_edges().count(), 0);
    }

    #[test]
    fn improve_match_extends_into_free_destination() {
        // Greedy pairs 0-0; source 1 can only reach 0, so 0 must move to 1.
        let mut graph = MatchmakingGraph::new(2, 2);
        graph.add_edge(0, 0, 5);
        graph.add_edge(0, 1, 5);
        graph.add_edge(1, 0, 5);
        let improvements = graph.find_best_matching();
        assert_eq!(improvements, 1);
        assert_eq!(matching(&graph), vec![(0, 1, 5), (1, 0, 5)]);
    }

    #[test]
    fn improve_match_swaps_for_heavier_edge() {
        let mut graph = MatchmakingGraph::new(2, 1);
        graph.add_edge(0, 0, 2);
        graph.add_edge(1, 0, 5);
        graph.find_best_matching();
        assert_eq!(matching(&graph), vec![(1, 0, 5)]);
    }

    #[test]
    fn alternating_cycle_is_flipped() {
        // Greedy takes 0-0 and 1-1 (weight 2); the cycle 0-1 / 1-0 is worth 8.
        let mut graph = MatchmakingGraph::new(2, 2);
        graph.add_edge(0, 0, 1);
        graph.add_edge(0, 1, 4);
        graph.add_edge(1, 1, 1);
        graph.add_edge(1, 0, 4);
        graph.find_best_matching();
        assert_eq!(graph.total_matched_weight(), 8);
        assert!(graph.verify_matching().is_ok());
    }

    #[test]
    fn revisiting_a_destination_never_breaks_validity() {
        // Greedy leaves 0-0 and 1-1 marked, 2 free. The walk
        // 2→0, 0←0, 0→1, 1←1, 1→0 scores +1 but re-enters destination 0,
        // which would end up with two marked edges. No valid improvement
        // exists, so the search must give up.
        let mut graph = MatchmakingGraph::new(3, 2);
        graph.add_edge(0, 0, 5);
        graph.add_edge(0, 1, 5);
        graph.add_edge(1, 1, 5);
        graph.add_edge(1, 0, 5);
        graph.add_edge(2, 0, 1);
        graph.find_initial_matching();
        assert_eq!(matching(&graph), vec![(0, 0, 5), (1, 1, 5)]);

        assert!(!graph.improve_match());
        assert!(graph.verify_matching().is_ok());
        assert_eq!(graph.total_matched_weight(), 10);
    }

    #[test]
    fn matched_source_only_starts_along_its_matched_edge() {
        // Local optimum, not global: source 0 keeps the weight-1 edge it got
        // from the greedy pass because no path seeded from a source can move
        // it onto the free destination 1.
        let mut graph = MatchmakingGraph::new(1, 2);
        graph.add_edge(0, 0, 1);
        graph.add_edge(0, 1, 5);
        assert_eq!(graph.find_best_matching(), 0);
        assert_eq!(matching(&graph), vec![(0, 0, 1)]);
    }

    #[test]
    fn second_improve_on_optimum_is_false_and_stable() {
        let mut graph = MatchmakingGraph::new(2, 2);
        graph.add_edge(0, 0, 3);
        graph.add_edge(1, 1, 4);
        graph.find_best_matching();
        let before = matching(&graph);
        assert!(!graph.improve_match());
        assert_eq!(matching(&graph), before);
    }

    #[test]
    fn initial_matching_resets_previous_marks() {
        let mut graph = MatchmakingGraph::new(2, 2);
        graph.add_edge(0, 1, 10);
        graph.add_edge(1, 0, 10);
        graph.add_edge(0, 0, 1);
        graph.find_best_matching();
        graph.find_initial_matching();
        assert!(graph.verify_matching().is_ok());
        assert_eq!(matching(&graph), vec![(0, 1, 10), (1, 0, 10)]);
    }

    #[test]
    fn shared_index_set_blocks_numerically_equal_destination() {
        let build = |mode| {
            let mut graph = MatchmakingGraph::new(2, 2).with_initial_matching(mode);
            graph.add_edge(0, 1, 3);
            graph.add_edge(1, 0, 3);
            graph
        };

        let mut split = build(InitialMatching::SplitIndexSets);
        split.find_initial_matching();
        assert_eq!(matching(&split), vec![(0, 1, 3), (1, 0, 3)]);

        // Source 1 counts as used once destination 1 is taken.
        let mut shared = build(InitialMatching::SharedIndexSet);
        shared.find_initial_matching();
        assert_eq!(matching(&shared), vec![(0, 1, 3)]);

        // Improvement converges to the same matching either way.
        split.find_best_matching();
        shared.find_best_matching();
        assert_eq!(matching(&split), matching(&shared));
    }

    #[test]
    fn uniform_complete_graph_settles_without_search() {
        // Greedy already pairs everyone at full weight, so every seed is
        // dropped by the bound instead of fanning out into all n! paths.
        let n = 40;
        let mut graph = MatchmakingGraph::new(n, n);
        for s in 0..n {
            for d in 0..n {
                graph.add_edge(s, d, 10);
            }
        }
        assert_eq!(graph.find_best_matching(), 0);
        assert_eq!(graph.matching_edges().count(), n);
        assert_eq!(graph.total_matched_weight(), 400);
    }

    #[test]
    fn search_bound_separates_hopeless_from_promising_seeds() {
        let mut graph = MatchmakingGraph::new(2, 2);
        let matched = graph.add_edge(0, 0, 5);
        graph.add_edge(0, 1, 5);
        let free = graph.add_edge(1, 0, 5);
        graph.find_initial_matching();

        // Moving 0 to destination 1 frees destination 0 for source 1.
        let bound = SearchBound::new(&graph);
        for index in [matched, free] {
            let edge = &graph.edges[index.0];
            let path = AlternatingPath::seed(index, edge);
            assert!(!bound.is_hopeless(&path, bound.seed_headroom(edge)));
        }

        // With both sources matched at full weight nothing can gain.
        let mut full = MatchmakingGraph::new(2, 2);
        let a = full.add_edge(0, 0, 5);
        full.add_edge(0, 1, 5);
        full.add_edge(1, 0, 5);
        full.add_edge(1, 1, 5);
        full.find_initial_matching();
        let bound = SearchBound::new(&full);
        let edge = &full.edges[a.0];
        assert!(bound.is_hopeless(&AlternatingPath::seed(a, edge), bound.seed_headroom(edge)));
    }

    #[test]
    fn search_bound_never_drops_a_usable_path() {
        // Greedy takes 0-0 (weight 1); the cycle through 0-1 / 1-0 gains 18.
        let mut graph = MatchmakingGraph::new(2, 2);
        let low = graph.add_edge(0, 0, 1);
        let across = graph.add_edge(0, 1, 10);
        graph.add_edge(1, 0, 10);
        graph.add_edge(1, 1, 1);
        graph.find_initial_matching();
        let bound = SearchBound::new(&graph);

        let seed = AlternatingPath::seed(low, &graph.edges[low.0]);
        let headroom = bound.seed_headroom(&graph.edges[low.0]);
        assert!(!bound.is_hopeless(&seed, headroom));

        // 0 -M- 0 -U- 1 -M- 1 -U- 0 closes back onto the start.
        let mut path = seed;
        let mut headroom = headroom;
        let steps = [
            graph.dest_edges(0)[1],
            graph.source_edges(1)[1],
            across,
        ];
        for index in steps {
            let edge = &graph.edges[index.0];
            path = path.extend(index, edge);
            headroom = bound.after_step(&path, edge, headroom);
            assert!(!bound.is_hopeless(&path, headroom));
        }
        assert_eq!(path.score(), 18);
        assert!(graph.can_use_path(&path));
    }

    #[test]
    fn verify_matching_reports_shared_endpoint() {
        let mut graph = MatchmakingGraph::new(1, 2);
        let a = graph.add_edge(0, 0, 1);
        let b = graph.add_edge(0, 1, 1);
        graph.edges[a.0].toggle();
        graph.edges[b.0].toggle();
        let err = graph.verify_matching().unwrap_err();
        assert!(err.to_string().contains("CM_ERR_103"));
    }
}
