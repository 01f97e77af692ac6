//! A single candidate pairing in the matchmaking graph.

/// Position of an edge in the graph's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct EdgeIndex(pub usize);

/// Which half of the bipartite graph a node lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Offer indices.
    Source,
    /// Request indices.
    Dest,
}

impl Side {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Source => Self::Dest,
            Self::Dest => Self::Source,
        }
    }
}

/// Whether an edge is currently part of the matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EdgeFlag {
    #[default]
    Unmarked,
    Marked,
}

impl EdgeFlag {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Unmarked => Self::Marked,
            Self::Marked => Self::Unmarked,
        }
    }
}

/// An (offer, request, weight) triple plus its matching flag.
///
/// Endpoints and weight never change after construction. Only the graph
/// flips the flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: usize,
    dest: usize,
    weight: u32,
    flag: EdgeFlag,
}

impl Edge {
    /// Create an unmarked edge.
    ///
    /// # Panics
    /// If `weight` is zero. Callers filter incompatible pairs beforehand.
    #[must_use]
    pub fn new(source: usize, dest: usize, weight: u32) -> Self {
        assert!(weight > 0, "edge ({source}, {dest}) must have a positive weight");
        Self {
            source,
            dest,
            weight,
            flag: EdgeFlag::Unmarked,
        }
    }

    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    #[must_use]
    pub fn dest(&self) -> usize {
        self.dest
    }

    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    #[must_use]
    pub fn flag(&self) -> EdgeFlag {
        self.flag
    }

    #[must_use]
    pub fn is_marked(&self) -> bool {
        self.flag == EdgeFlag::Marked
    }

    /// The endpoint on `side`.
    #[must_use]
    pub fn node(&self, side: Side) -> usize {
        match side {
            Side::Source => self.source,
            Side::Dest => self.dest,
        }
    }

    pub(crate) fn toggle(&mut self) {
        self.flag = self.flag.opposite();
    }
}
