use std::collections::HashSet;

use uuid::Uuid;

use crate::error::CoreError;
use crate::models::User;
use crate::services::store::{read_guard, SharedStore};

/// Generates the discovery feed of potential matches for a user.
///
/// Filtering rules, applied in this fixed order:
/// 1. Zone: only users whose `zone_id` equals the requester's.
/// 2. Self: exclude the requester.
/// 3. Unseen: exclude users the requester already swiped on (LIKE or PASS).
///
/// The order changes no output today but is part of the contract, so any
/// future tie-break extension stays consistent.
#[derive(Debug, Clone)]
pub struct FeedGenerator {
    store: SharedStore,
}

impl FeedGenerator {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Generate the feed for the given user.
    ///
    /// Purely derived, no side effects; the result preserves store
    /// insertion order, not any relevance ranking. Runs in
    /// O(users + swipes by the requester).
    pub fn generate_feed(&self, user_id: Uuid) -> Result<Vec<User>, CoreError> {
        let store = read_guard(&self.store);

        let requester = store
            .get_user(user_id)
            .cloned()
            .ok_or_else(|| CoreError::user_not_found(user_id))?;

        // Ids the requester already swiped on, regardless of action.
        let seen: HashSet<Uuid> = store
            .swipes_by_swiper(user_id)
            .iter()
            .map(|s| s.swiped_id)
            .collect();

        let feed: Vec<User> = store
            .list_users()
            .into_iter()
            .filter(|u| u.zone_id == requester.zone_id)
            .filter(|u| u.id != user_id)
            .filter(|u| !seen.contains(&u.id))
            .collect();

        tracing::debug!(
            "Generated feed for {}: {} candidates ({} already seen)",
            user_id,
            feed.len(),
            seen.len()
        );

        Ok(feed)
    }
}
