//! Match roots for replay verification.
//!
//! Replaying a saved simulation must reproduce every tick's matching. The
//! match root is a hash over the matched pairs that lets a replay compare
//! ticks without storing full reports.

use civmatch_types::constants;
use sha2::{Digest, Sha256};

use crate::report::MatchedPair;

/// Compute the match root over a set of matched pairs.
///
/// Depends on offer index, request index and weight of each pair, in order.
/// Participant identities are left out, since they are regenerated on replay.
#[must_use]
pub fn compute_match_root(pairs: &[MatchedPair]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(constants::MATCH_ROOT_DOMAIN);
    hasher.update((pairs.len() as u64).to_be_bytes());

    for pair in pairs {
        hasher.update((pair.offer_index as u64).to_be_bytes());
        hasher.update((pair.request_index as u64).to_be_bytes());
        hasher.update(pair.weight.to_be_bytes());
    }

    hasher.finalize().into()
}

/// Recompute the root for `pairs` and compare with `expected_root`.
#[must_use]
pub fn verify_match_root(pairs: &[MatchedPair], expected_root: &[u8; 32]) -> bool {
    compute_match_root(pairs) == *expected_root
}
