//! Outcome of one matchmaking run.

use civmatch_types::{ParticipantId, TickId};
use serde::{Deserialize, Serialize};

/// One offer/request pairing chosen by the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedPair {
    /// Position of the offer in that tick's pending offers.
    pub offer_index: usize,
    /// Position of the request in that tick's pending requests.
    pub request_index: usize,
    /// Compatibility score of the pairing.
    pub weight: u32,
    pub offerer: ParticipantId,
    pub requester: ParticipantId,
}

/// Summary of a `run_match` call. Returned to the simulation for logging,
/// statistics and replay checks; the matching itself has already been
/// delivered through participant confirmations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub domain: String,
    pub tick: TickId,
    /// Pending offers at the start of the run.
    pub offers: usize,
    /// Pending requests at the start of the run.
    pub requests: usize,
    /// Compatible (offer, request) pairs, i.e. graph edges.
    pub candidate_edges: usize,
    /// Augmenting paths applied after the greedy warm start.
    pub improvements: usize,
    pub pairs: Vec<MatchedPair>,
    pub total_weight: u64,
    /// See [`compute_match_root`](crate::compute_match_root).
    pub match_root: [u8; 32],
}

impl MatchReport {
    #[must_use]
    pub fn matched(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Offers discarded without a match this tick.
    #[must_use]
    pub fn unmatched_offers(&self) -> usize {
        self.offers.saturating_sub(self.pairs.len())
    }

    /// Requests discarded without a match this tick.
    #[must_use]
    pub fn unmatched_requests(&self) -> usize {
        self.requests.saturating_sub(self.pairs.len())
    }

    #[must_use]
    pub fn match_root_hex(&self) -> String {
        hex::encode(self.match_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with_one_pair(offers: usize, requests: usize) -> MatchReport {
        MatchReport {
            domain: "occupancy".to_string(),
            tick: TickId(3),
            offers,
            requests,
            candidate_edges: 1,
            improvements: 0,
            pairs: vec![MatchedPair {
                offer_index: 0,
                request_index: 0,
                weight: 7,
                offerer: ParticipantId::new(),
                requester: ParticipantId::new(),
            }],
            total_weight: 7,
            match_root: [0; 32],
        }
    }

    #[test]
    fn unmatched_counts() {
        let report = report_with_one_pair(3, 2);
        assert_eq!(report.matched(), 1);
        assert_eq!(report.unmatched_offers(), 2);
        assert_eq!(report.unmatched_requests(), 1);
        assert_eq!(report.match_root_hex(), "00".repeat(32));
    }

    #[test]
    fn inconsistent_report_from_json_does_not_underflow() {
        let mut value = serde_json::to_value(report_with_one_pair(1, 1)).unwrap();
        value["offers"] = 0.into();
        value["requests"] = 0.into();
        let report: MatchReport = serde_json::from_value(value).unwrap();
        assert_eq!(report.unmatched_offers(), 0);
        assert_eq!(report.unmatched_requests(), 0);
    }
}
