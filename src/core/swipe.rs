use uuid::Uuid;

use crate::error::CoreError;
use crate::models::{MatchRecord, SwipeAction, SwipeEvent};
use crate::services::store::{write_guard, SharedStore};

/// Policy knobs for match creation.
#[derive(Debug, Clone, Copy)]
pub struct MatchPolicy {
    /// Enforce at most one MatchRecord per unordered user pair.
    ///
    /// When enabled (the default), a repeated mutual-LIKE exchange still
    /// reports a match but appends no duplicate record. Disabling restores
    /// the permissive legacy behavior where every mutual LIKE appends.
    pub dedupe_matches: bool,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            dedupe_matches: true,
        }
    }
}

impl MatchPolicy {
    /// Legacy behavior: one MatchRecord per mutual LIKE exchange.
    pub fn permissive() -> Self {
        Self {
            dedupe_matches: false,
        }
    }
}

/// Records swipe decisions and detects mutual matches.
///
/// When a LIKE is recorded, the processor checks whether the swiped user's
/// earliest decision about the swiper was also a LIKE, and creates a
/// MatchRecord if so. The earliest-event lookup means a LIKE followed by a
/// later PASS still satisfies a third party's mutual check; that mirrors
/// the production behavior and is pending product clarification.
#[derive(Debug, Clone)]
pub struct SwipeProcessor {
    store: SharedStore,
    policy: MatchPolicy,
}

impl SwipeProcessor {
    pub fn new(store: SharedStore) -> Self {
        Self::with_policy(store, MatchPolicy::default())
    }

    pub fn with_policy(store: SharedStore, policy: MatchPolicy) -> Self {
        Self { store, policy }
    }

    /// Record a swipe and report whether it completed a mutual match.
    ///
    /// Preconditions, checked in order, each terminating immediately:
    /// self-reference, unknown swiper, unknown swiped. The event itself is
    /// appended unconditionally once the preconditions pass, PASS and
    /// redundant repeats included.
    ///
    /// The write lock is held across the reverse-event lookup and the match
    /// append, so two racing swipes of the same pair cannot both miss the
    /// reverse event or both append a record.
    pub fn process_swipe(
        &self,
        swiper_id: Uuid,
        swiped_id: Uuid,
        action: SwipeAction,
    ) -> Result<bool, CoreError> {
        if swiper_id == swiped_id {
            return Err(CoreError::SelfReference(swiper_id));
        }

        let mut store = write_guard(&self.store);

        if store.get_user(swiper_id).is_none() {
            return Err(CoreError::user_not_found(swiper_id));
        }
        if store.get_user(swiped_id).is_none() {
            return Err(CoreError::user_not_found(swiped_id));
        }

        store.add_swipe(SwipeEvent::new(swiper_id, swiped_id, action));

        if action != SwipeAction::Like {
            return Ok(false);
        }

        let reciprocated = store
            .find_swipe(swiped_id, swiper_id)
            .map(|reverse| reverse.action == SwipeAction::Like)
            .unwrap_or(false);

        if !reciprocated {
            return Ok(false);
        }

        if self.policy.dedupe_matches && store.find_match(swiper_id, swiped_id).is_some() {
            tracing::debug!(
                "Mutual like between {} and {} already matched, skipping duplicate record",
                swiper_id,
                swiped_id
            );
            return Ok(true);
        }

        store.add_match(MatchRecord::new(swiper_id, swiped_id));
        tracing::info!("Mutual match detected: {} <-> {}", swiper_id, swiped_id);

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::services::store::EntityStore;

    fn seed_user(store: &SharedStore, name: &str) -> User {
        let mut guard = store.write().unwrap();
        guard.add_user(User::new(name, 25, "female", "NYC"))
    }

    #[test]
    fn test_like_without_reciprocation_is_not_a_match() {
        let store = EntityStore::shared();
        let alice = seed_user(&store, "Alice");
        let bob = seed_user(&store, "Bob");

        let processor = SwipeProcessor::new(store.clone());
        let is_match = processor
            .process_swipe(alice.id, bob.id, SwipeAction::Like)
            .unwrap();

        assert!(!is_match);
        let guard = store.read().unwrap();
        assert_eq!(guard.swipe_count(), 1);
        assert_eq!(guard.match_count(), 0);
    }

    #[test]
    fn test_mutual_like_creates_match() {
        let store = EntityStore::shared();
        let alice = seed_user(&store, "Alice");
        let bob = seed_user(&store, "Bob");

        let processor = SwipeProcessor::new(store.clone());
        assert!(!processor
            .process_swipe(bob.id, alice.id, SwipeAction::Like)
            .unwrap());
        assert!(processor
            .process_swipe(alice.id, bob.id, SwipeAction::Like)
            .unwrap());

        let guard = store.read().unwrap();
        assert_eq!(guard.matches_for(alice.id).len(), 1);
        assert_eq!(guard.matches_for(bob.id).len(), 1);
    }

    #[test]
    fn test_pass_is_recorded_but_never_matches() {
        let store = EntityStore::shared();
        let alice = seed_user(&store, "Alice");
        let bob = seed_user(&store, "Bob");

        let processor = SwipeProcessor::new(store.clone());
        assert!(!processor
            .process_swipe(bob.id, alice.id, SwipeAction::Like)
            .unwrap());
        // Bob already liked Alice, but a PASS must not complete the match.
        assert!(!processor
            .process_swipe(alice.id, bob.id, SwipeAction::Pass)
            .unwrap());

        let guard = store.read().unwrap();
        assert_eq!(guard.swipe_count(), 2);
        assert_eq!(guard.match_count(), 0);
    }

    #[test]
    fn test_self_swipe_rejected_for_both_actions() {
        let store = EntityStore::shared();
        let alice = seed_user(&store, "Alice");

        let processor = SwipeProcessor::new(store.clone());
        for action in [SwipeAction::Like, SwipeAction::Pass] {
            let err = processor
                .process_swipe(alice.id, alice.id, action)
                .unwrap_err();
            assert_eq!(err, CoreError::SelfReference(alice.id));
        }

        // Rejected swipes leave no trace in the log.
        assert_eq!(store.read().unwrap().swipe_count(), 0);
    }

    #[test]
    fn test_unknown_swiper_checked_before_unknown_swiped() {
        let store = EntityStore::shared();
        let missing_swiper = Uuid::new_v4();
        let missing_swiped = Uuid::new_v4();

        let processor = SwipeProcessor::new(store);
        let err = processor
            .process_swipe(missing_swiper, missing_swiped, SwipeAction::Like)
            .unwrap_err();

        assert_eq!(err, CoreError::user_not_found(missing_swiper));
    }

    #[test]
    fn test_unknown_swiped_rejected() {
        let store = EntityStore::shared();
        let alice = seed_user(&store, "Alice");
        let missing = Uuid::new_v4();

        let processor = SwipeProcessor::new(store);
        let err = processor
            .process_swipe(alice.id, missing, SwipeAction::Like)
            .unwrap_err();

        assert_eq!(err, CoreError::user_not_found(missing));
    }

    #[test]
    fn test_dedupe_policy_keeps_single_record_per_pair() {
        let store = EntityStore::shared();
        let alice = seed_user(&store, "Alice");
        let bob = seed_user(&store, "Bob");

        let processor = SwipeProcessor::new(store.clone());
        processor
            .process_swipe(bob.id, alice.id, SwipeAction::Like)
            .unwrap();
        processor
            .process_swipe(alice.id, bob.id, SwipeAction::Like)
            .unwrap();

        // Re-submitting the mutual like still reports a match...
        let repeated = processor
            .process_swipe(alice.id, bob.id, SwipeAction::Like)
            .unwrap();
        assert!(repeated);

        // ...but the pair keeps exactly one record.
        assert_eq!(store.read().unwrap().match_count(), 1);
    }

    #[test]
    fn test_permissive_policy_appends_duplicate_records() {
        let store = EntityStore::shared();
        let alice = seed_user(&store, "Alice");
        let bob = seed_user(&store, "Bob");

        let processor = SwipeProcessor::with_policy(store.clone(), MatchPolicy::permissive());
        processor
            .process_swipe(bob.id, alice.id, SwipeAction::Like)
            .unwrap();
        processor
            .process_swipe(alice.id, bob.id, SwipeAction::Like)
            .unwrap();
        processor
            .process_swipe(alice.id, bob.id, SwipeAction::Like)
            .unwrap();

        assert_eq!(store.read().unwrap().match_count(), 2);
    }

    #[test]
    fn test_reverse_lookup_sees_earliest_decision() {
        // Bob likes Carol, then passes on her. Carol's later like still
        // matches against Bob's earliest event.
        let store = EntityStore::shared();
        let bob = seed_user(&store, "Bob");
        let carol = seed_user(&store, "Carol");

        let processor = SwipeProcessor::new(store.clone());
        processor
            .process_swipe(bob.id, carol.id, SwipeAction::Like)
            .unwrap();
        processor
            .process_swipe(bob.id, carol.id, SwipeAction::Pass)
            .unwrap();

        let is_match = processor
            .process_swipe(carol.id, bob.id, SwipeAction::Like)
            .unwrap();

        assert!(is_match);
    }
}
