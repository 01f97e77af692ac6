//! The contract between the matchmaker and the entities it matches.
//!
//! Participants never hand the engine an untyped object. They implement
//! [`MatchmakingParticipant`] and every offer or request carries a shared
//! handle to it, so the engine can call back once a pair is formed.
//!
//! ```text
//! participant ──post──▶ Matchmaker ──run_match──▶ confirm_matchmaking_offer(offer, requester)
//!                                              └─▶ confirm_matchmaking_request(request, offerer)
//! ```

use std::sync::Arc;

use crate::ParticipantId;

/// Shared handle to a participant, as carried by offers and requests.
pub type Participant<O, R> = Arc<dyn MatchmakingParticipant<O, R>>;

/// Capability every matchmaking participant provides.
///
/// Both confirmations default to no-ops: a participant that only ever
/// offers never needs to handle a request confirmation, and vice versa.
/// Implementations that react to a confirmation use interior mutability.
pub trait MatchmakingParticipant<O, R>: Send + Sync {
    /// Stable identity used in logs and match reports.
    fn participant_id(&self) -> ParticipantId;

    /// Called when one of this participant's offers was paired with a
    /// request. `counterparty` is the request's participant.
    fn confirm_matchmaking_offer(&self, offer: &O, counterparty: &Participant<O, R>) {
        let _ = (offer, counterparty);
    }

    /// Called when one of this participant's requests was paired with an
    /// offer. `counterparty` is the offer's participant.
    fn confirm_matchmaking_request(&self, request: &R, counterparty: &Participant<O, R>) {
        let _ = (request, counterparty);
    }
}

/// Supply side of a matchmaking domain.
pub trait MatchOffer<R>: Sized {
    /// The participant that posted this offer.
    fn source(&self) -> &Participant<Self, R>;
}

/// Demand side of a matchmaking domain.
pub trait MatchRequest<O>: Sized {
    /// The participant that posted this request.
    fn source(&self) -> &Participant<O, Self>;

    /// Desirability of `offer` for this request, conventionally in
    /// `0..=MAX_COMPATIBILITY_SCORE`. Anything `<= 0` means incompatible.
    fn quantify_offer(&self, offer: &O) -> i32;
}

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

#[cfg(any(test, feature = "test-helpers"))]
pub use recording::RecordingParticipant;

#[cfg(any(test, feature = "test-helpers"))]
mod recording {
    use std::sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicUsize, Ordering},
    };

    use super::{MatchmakingParticipant, Participant};
    use crate::ParticipantId;

    /// Participant that counts its confirmations and remembers who it was
    /// paired with. Works for any offer/request pair.
    #[derive(Debug, Default)]
    pub struct RecordingParticipant {
        id: ParticipantId,
        offers_confirmed: AtomicUsize,
        requests_confirmed: AtomicUsize,
        counterparties: Mutex<Vec<ParticipantId>>,
    }

    impl RecordingParticipant {
        #[must_use]
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        /// Coerce into the handle type offers and requests carry.
        #[must_use]
        pub fn handle<O: 'static, R: 'static>(self: &Arc<Self>) -> Participant<O, R> {
            Arc::clone(self) as Participant<O, R>
        }

        #[must_use]
        pub fn id(&self) -> ParticipantId {
            self.id
        }

        #[must_use]
        pub fn offers_confirmed(&self) -> usize {
            self.offers_confirmed.load(Ordering::SeqCst)
        }

        #[must_use]
        pub fn requests_confirmed(&self) -> usize {
            self.requests_confirmed.load(Ordering::SeqCst)
        }

        #[must_use]
        pub fn confirmations(&self) -> usize {
            self.offers_confirmed() + self.requests_confirmed()
        }

        #[must_use]
        pub fn counterparties(&self) -> Vec<ParticipantId> {
            self.counterparties
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        fn record(&self, counterparty: ParticipantId) {
            self.counterparties
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(counterparty);
        }
    }

    impl<O, R> MatchmakingParticipant<O, R> for RecordingParticipant {
        fn participant_id(&self) -> ParticipantId {
            self.id
        }

        fn confirm_matchmaking_offer(&self, _offer: &O, counterparty: &Participant<O, R>) {
            self.offers_confirmed.fetch_add(1, Ordering::SeqCst);
            self.record(counterparty.participant_id());
        }

        fn confirm_matchmaking_request(&self, _request: &R, counterparty: &Participant<O, R>) {
            self.requests_confirmed.fetch_add(1, Ordering::SeqCst);
            self.record(counterparty.participant_id());
        }
    }
}
