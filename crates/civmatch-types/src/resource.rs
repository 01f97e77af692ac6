//! Resource offers and requests.
//!
//! These are the reference offer/request pair the simulation uses for
//! housing: a dwelling offers occupancy, a household requests it. Other
//! domains bring their own types and implement [`MatchOffer`] /
//! [`MatchRequest`] directly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{MatchOffer, MatchRequest, Participant, constants};

// ---------------------------------------------------------------------------
// ResourceKind
// ---------------------------------------------------------------------------

/// Name of an abstract resource (e.g. `"occupancy"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ResourceKind(pub String);

impl ResourceKind {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Residential occupancy, the kind housing trades in.
    #[must_use]
    pub fn occupancy() -> Self {
        Self::new(constants::OCCUPANCY_KIND)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// ResourceOffer
// ---------------------------------------------------------------------------

/// A posted willingness to supply `available_quantity` units of `kind`.
#[derive(Clone)]
pub struct ResourceOffer {
    pub kind: ResourceKind,
    pub available_quantity: u32,
    pub source: Participant<ResourceOffer, ResourceRequest>,
}

impl ResourceOffer {
    #[must_use]
    pub fn new(
        kind: ResourceKind,
        available_quantity: u32,
        source: Participant<ResourceOffer, ResourceRequest>,
    ) -> Self {
        Self {
            kind,
            available_quantity,
            source,
        }
    }
}

impl MatchOffer<ResourceRequest> for ResourceOffer {
    fn source(&self) -> &Participant<Self, ResourceRequest> {
        &self.source
    }
}

impl fmt::Debug for ResourceOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceOffer")
            .field("kind", &self.kind)
            .field("available_quantity", &self.available_quantity)
            .field("source", &self.source.participant_id())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// ResourceRequest
// ---------------------------------------------------------------------------

/// A posted desire to consume `kind`: ideally `desired_quantity` units,
/// never fewer than `minimum_quantity`.
#[derive(Clone)]
pub struct ResourceRequest {
    pub kind: ResourceKind,
    pub desired_quantity: u32,
    pub minimum_quantity: u32,
    pub source: Participant<ResourceOffer, ResourceRequest>,
}

impl ResourceRequest {
    #[must_use]
    pub fn new(
        kind: ResourceKind,
        desired_quantity: u32,
        minimum_quantity: u32,
        source: Participant<ResourceOffer, ResourceRequest>,
    ) -> Self {
        Self {
            kind,
            desired_quantity,
            minimum_quantity,
            source,
        }
    }
}

impl MatchRequest<ResourceOffer> for ResourceRequest {
    fn source(&self) -> &Participant<ResourceOffer, Self> {
        &self.source
    }

    /// Scores an offer by how much of the desired quantity it covers.
    ///
    /// Offers of another kind, or below the minimum, score 0. Otherwise the
    /// score scales linearly with coverage of `desired_quantity`, floored
    /// at 1 so that any acceptable offer still yields an edge.
    fn quantify_offer(&self, offer: &ResourceOffer) -> i32 {
        if offer.kind != self.kind || offer.available_quantity < self.minimum_quantity {
            return constants::NO_EDGE_SCORE;
        }
        if self.desired_quantity == 0 {
            return constants::MAX_COMPATIBILITY_SCORE;
        }
        let usable = u64::from(offer.available_quantity.min(self.desired_quantity));
        let max = u64::from(constants::MAX_COMPATIBILITY_SCORE.unsigned_abs());
        let scaled = usable * max / u64::from(self.desired_quantity);
        // scaled <= max, so the conversion cannot fail
        i32::try_from(scaled).unwrap_or(constants::MAX_COMPATIBILITY_SCORE).max(1)
    }
}

impl fmt::Debug for ResourceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceRequest")
            .field("kind", &self.kind)
            .field("desired_quantity", &self.desired_quantity)
            .field("minimum_quantity", &self.minimum_quantity)
            .field("source", &self.source.participant_id())
            .finish()
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
mod helpers {
    use std::sync::Arc;

    use super::{ResourceKind, ResourceOffer, ResourceRequest};
    use crate::RecordingParticipant;

    impl ResourceOffer {
        /// Occupancy offer from a fresh recording participant.
        #[must_use]
        pub fn dummy(available_quantity: u32) -> (Self, Arc<RecordingParticipant>) {
            let participant = RecordingParticipant::new();
            let offer = Self::new(
                ResourceKind::occupancy(),
                available_quantity,
                participant.handle(),
            );
            (offer, participant)
        }
    }

    impl ResourceRequest {
        /// Occupancy request from a fresh recording participant.
        #[must_use]
        pub fn dummy(
            desired_quantity: u32,
            minimum_quantity: u32,
        ) -> (Self, Arc<RecordingParticipant>) {
            let participant = RecordingParticipant::new();
            let request = Self::new(
                ResourceKind::occupancy(),
                desired_quantity,
                minimum_quantity,
                participant.handle(),
            );
            (request, participant)
        }
    }
}
