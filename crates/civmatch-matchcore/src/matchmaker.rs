//! Per-tick matchmaking session.
//!
//! A [`Matchmaker`] is owned by the simulation context, one per resource
//! domain. Each tick runs:
//!
//! ```text
//! Empty ──post_offer / post_request──▶ Accumulating ──run_match──▶ Empty
//! ```
//!
//! `run_match` matches everything pending, confirms each pair to both
//! participants, and then discards *all* pending entries, matched or not.
//! A participant that still wants to supply or consume must post again on
//! its next update.

use std::fmt;

use civmatch_types::{
    MatchOffer, MatchRequest, MatchmakerConfig, ResourceOffer, ResourceRequest, TickId,
    constants,
};
use serde::{Deserialize, Serialize};

use crate::{
    MatchmakingGraph,
    determinism::compute_match_root,
    report::{MatchReport, MatchedPair},
};

/// Externally observable session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Nothing posted since the last run.
    Empty,
    /// At least one offer or request is waiting for `run_match`.
    Accumulating,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "EMPTY"),
            Self::Accumulating => write!(f, "ACCUMULATING"),
        }
    }
}

/// Matchmaking session for one offer/request domain.
pub struct Matchmaker<O, R> {
    config: MatchmakerConfig,
    offers: Vec<O>,
    requests: Vec<R>,
    tick: TickId,
}

/// Matchmaker for the built-in resource offer/request pair.
pub type ResourceMatchmaker = Matchmaker<ResourceOffer, ResourceRequest>;

impl<O, R> Matchmaker<O, R> {
    #[must_use]
    pub fn new(config: MatchmakerConfig) -> Self {
        Self {
            config,
            offers: Vec::new(),
            requests: Vec::new(),
            tick: TickId::default(),
        }
    }

    /// Queue an offer for the next run.
    pub fn post_offer(&mut self, offer: O) {
        self.offers.push(offer);
    }

    /// Queue a request for the next run.
    pub fn post_request(&mut self, request: R) {
        self.requests.push(request);
    }

    /// Drop every pending offer and request without matching.
    pub fn reset(&mut self) {
        self.offers.clear();
        self.requests.clear();
    }

    #[must_use]
    pub fn pending_offers(&self) -> &[O] {
        &self.offers
    }

    #[must_use]
    pub fn pending_requests(&self) -> &[R] {
        &self.requests
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.offers.is_empty() && self.requests.is_empty() {
            SessionPhase::Empty
        } else {
            SessionPhase::Accumulating
        }
    }

    /// The tick the next `run_match` will report.
    #[must_use]
    pub fn tick(&self) -> TickId {
        self.tick
    }

    #[must_use]
    pub fn config(&self) -> &MatchmakerConfig {
        &self.config
    }
}

impl<O, R> Matchmaker<O, R>
where
    O: MatchOffer<R>,
    R: MatchRequest<O>,
{
    /// Match all pending offers against all pending requests.
    ///
    /// ## Steps
    ///
    /// 1. Build a graph sized (offers, requests)
    /// 2. Add an edge for every pair the request scores above zero
    /// 3. Greedy warm start, then augmenting paths until a local optimum
    /// 4. Confirm each matched pair to both participants
    /// 5. Discard all pending entries and advance the tick
    pub fn run_match(&mut self) -> MatchReport {
        let tick = self.tick;

        // 1-2. Candidate graph
        let mut graph = MatchmakingGraph::new(self.offers.len(), self.requests.len())
            .with_initial_matching(self.config.initial_matching);
        for (i, offer) in self.offers.iter().enumerate() {
            for (j, request) in self.requests.iter().enumerate() {
                let score = request.quantify_offer(offer);
                if score > constants::NO_EDGE_SCORE {
                    graph.add_edge(i, j, score.unsigned_abs());
                }
            }
        }

        // 3. Matching
        let improvements = graph.find_best_matching();
        debug_assert!(
            graph.verify_matching().is_ok(),
            "matcher produced an invalid matching"
        );

        // 4. Confirmations
        let mut pairs = Vec::new();
        for edge in graph.matching_edges() {
            let offer = &self.offers[edge.source()];
            let request = &self.requests[edge.dest()];
            let offerer = offer.source();
            let requester = request.source();

            offerer.confirm_matchmaking_offer(offer, requester);
            requester.confirm_matchmaking_request(request, offerer);

            tracing::debug!(
                domain = %self.config.domain,
                %tick,
                offerer = %offerer.participant_id(),
                requester = %requester.participant_id(),
                weight = edge.weight(),
                "Pair confirmed"
            );

            pairs.push(MatchedPair {
                offer_index: edge.source(),
                request_index: edge.dest(),
                weight: edge.weight(),
                offerer: offerer.participant_id(),
                requester: requester.participant_id(),
            });
        }

        let report = MatchReport {
            domain: self.config.domain.clone(),
            tick,
            offers: self.offers.len(),
            requests: self.requests.len(),
            candidate_edges: graph.edge_count(),
            improvements,
            match_root: compute_match_root(&pairs),
            total_weight: graph.total_matched_weight(),
            pairs,
        };

        tracing::info!(
            domain = %report.domain,
            tick = report.tick.0,
            offers = report.offers,
            requests = report.requests,
            edges = report.candidate_edges,
            matched = report.matched(),
            total_weight = report.total_weight,
            improvements = report.improvements,
            match_root = report.match_root_hex(),
            "Matchmaking complete"
        );

        // 5. Unmatched entries are discarded, not carried over.
        self.reset();
        self.tick = tick.next();
        report
    }
}

impl<O, R> Default for Matchmaker<O, R> {
    fn default() -> Self {
        Self::new(MatchmakerConfig::default())
    }
}

impl<O, R> fmt::Debug for Matchmaker<O, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matchmaker")
            .field("config", &self.config)
            .field("pending_offers", &self.offers.len())
            .field("pending_requests", &self.requests.len())
            .field("tick", &self.tick)
            .finish()
    }
}
