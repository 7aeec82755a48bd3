use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::models::{MatchRecord, SwipeEvent, User};

/// Store handle shared between the feed and swipe components.
///
/// The store itself is a plain data structure; serialization of access is
/// the lock's job. `SwipeProcessor` holds the write guard across its whole
/// read-reverse-then-append sequence, which is what makes match detection
/// race-free.
pub type SharedStore = Arc<RwLock<EntityStore>>;

/// In-memory source of truth for users, swipe events, and match records.
///
/// Provides primitive operations only: no validation, no dedup, no business
/// rules. Nothing here fails; absence is an explicit `None`. All three
/// collections grow monotonically except on [`EntityStore::reset`], and
/// insertion order is preserved and observable.
#[derive(Debug, Default)]
pub struct EntityStore {
    users: HashMap<Uuid, User>,
    // Insertion order of user ids; `users` alone would iterate arbitrarily.
    user_order: Vec<Uuid>,
    swipes: Vec<SwipeEvent>,
    matches: Vec<MatchRecord>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already wrapped for sharing.
    pub fn shared() -> SharedStore {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Clear all three collections. Test/administrative use only; never
    /// called from request paths.
    pub fn reset(&mut self) {
        self.users.clear();
        self.user_order.clear();
        self.swipes.clear();
        self.matches.clear();
        tracing::debug!("Store reset: all users, swipes, and matches cleared");
    }

    // --- User operations ---

    /// Insert a user keyed by id and return the stored value.
    ///
    /// No uniqueness check beyond the id itself; re-adding an id replaces
    /// the profile but keeps its original position in insertion order.
    pub fn add_user(&mut self, user: User) -> User {
        if !self.users.contains_key(&user.id) {
            self.user_order.push(user.id);
        }
        self.users.insert(user.id, user.clone());
        user
    }

    /// O(1) lookup by id.
    pub fn get_user(&self, user_id: Uuid) -> Option<&User> {
        self.users.get(&user_id)
    }

    /// Snapshot of all users in insertion order.
    pub fn list_users(&self) -> Vec<User> {
        self.user_order
            .iter()
            .filter_map(|id| self.users.get(id))
            .cloned()
            .collect()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    // --- Swipe operations ---

    /// Append a swipe event unconditionally. No dedup, no validation.
    pub fn add_swipe(&mut self, event: SwipeEvent) -> SwipeEvent {
        self.swipes.push(event.clone());
        event
    }

    /// All events made by the given swiper, in insertion order.
    pub fn swipes_by_swiper(&self, swiper_id: Uuid) -> Vec<SwipeEvent> {
        self.swipes
            .iter()
            .filter(|s| s.swiper_id == swiper_id)
            .cloned()
            .collect()
    }

    /// Earliest event for the exact ordered (swiper, swiped) pair.
    ///
    /// Later events for the same pair exist in the log but are not visible
    /// through this lookup.
    pub fn find_swipe(&self, swiper_id: Uuid, swiped_id: Uuid) -> Option<&SwipeEvent> {
        self.swipes
            .iter()
            .find(|s| s.swiper_id == swiper_id && s.swiped_id == swiped_id)
    }

    pub fn swipe_count(&self) -> usize {
        self.swipes.len()
    }

    // --- Match operations ---

    /// Append a match record unconditionally.
    pub fn add_match(&mut self, record: MatchRecord) -> MatchRecord {
        self.matches.push(record.clone());
        record
    }

    /// All records where the given user is either participant.
    pub fn matches_for(&self, user_id: Uuid) -> Vec<MatchRecord> {
        self.matches
            .iter()
            .filter(|m| m.involves(user_id))
            .cloned()
            .collect()
    }

    /// Earliest record covering the unordered pair, in either orientation.
    pub fn find_match(&self, a: Uuid, b: Uuid) -> Option<&MatchRecord> {
        self.matches.iter().find(|m| m.pairs(a, b))
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }
}

/// Acquire the shared read lock.
///
/// A poisoned lock is recovered rather than propagated: the store is plain
/// data and every mutation leaves it structurally valid.
pub(crate) fn read_guard(store: &SharedStore) -> RwLockReadGuard<'_, EntityStore> {
    store.read().unwrap_or_else(PoisonError::into_inner)
}

/// Acquire the shared write lock. Same poison recovery as [`read_guard`].
pub(crate) fn write_guard(store: &SharedStore) -> RwLockWriteGuard<'_, EntityStore> {
    store.write().unwrap_or_else(PoisonError::into_inner)
}
