use uuid::Uuid;

use crate::config::Settings;
use crate::core::{FeedGenerator, MatchPolicy, SwipeProcessor};
use crate::error::CoreError;
use crate::models::{MatchRecord, SwipeAction, User};
use crate::services::store::{read_guard, write_guard, EntityStore, SharedStore};

/// Composition root for the matching core.
///
/// Owns the store's lifecycle: constructs it once, hands shared references
/// to [`FeedGenerator`] and [`SwipeProcessor`], and exposes the call
/// contracts the transport layer consumes. The embedding process builds one
/// `Matchmaker` at startup and clones it freely; clones share the same
/// store.
#[derive(Debug, Clone)]
pub struct Matchmaker {
    store: SharedStore,
    feed: FeedGenerator,
    swipes: SwipeProcessor,
}

impl Matchmaker {
    pub fn new() -> Self {
        Self::with_policy(MatchPolicy::default())
    }

    pub fn with_policy(policy: MatchPolicy) -> Self {
        let store = EntityStore::shared();
        Self {
            feed: FeedGenerator::new(store.clone()),
            swipes: SwipeProcessor::with_policy(store.clone(), policy),
            store,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_policy(MatchPolicy {
            dedupe_matches: settings.matching.dedupe_matches,
        })
    }

    /// Shared handle to the underlying store, for callers that compose
    /// their own components on top of it.
    pub fn store(&self) -> SharedStore {
        self.store.clone()
    }

    /// Create and store a new user profile.
    pub fn create_user(
        &self,
        name: impl Into<String>,
        age: u8,
        gender: impl Into<String>,
        zone_id: impl Into<String>,
    ) -> User {
        let user = write_guard(&self.store).add_user(User::new(name, age, gender, zone_id));
        tracing::info!("Created user {} in zone {}", user.id, user.zone_id);
        user
    }

    /// Retrieve a user profile by id.
    pub fn get_user(&self, user_id: Uuid) -> Result<User, CoreError> {
        read_guard(&self.store)
            .get_user(user_id)
            .cloned()
            .ok_or_else(|| CoreError::user_not_found(user_id))
    }

    /// Generate the discovery feed for a user.
    pub fn generate_feed(&self, user_id: Uuid) -> Result<Vec<User>, CoreError> {
        self.feed.generate_feed(user_id)
    }

    /// Record a swipe; `Ok(true)` means it completed a mutual match.
    pub fn process_swipe(
        &self,
        swiper_id: Uuid,
        swiped_id: Uuid,
        action: SwipeAction,
    ) -> Result<bool, CoreError> {
        self.swipes.process_swipe(swiper_id, swiped_id, action)
    }

    /// All mutual matches involving the given user.
    pub fn get_matches(&self, user_id: Uuid) -> Result<Vec<MatchRecord>, CoreError> {
        let store = read_guard(&self.store);
        if store.get_user(user_id).is_none() {
            return Err(CoreError::user_not_found(user_id));
        }
        Ok(store.matches_for(user_id))
    }

    /// Clear all state. Test/administrative use only.
    pub fn reset(&self) {
        write_guard(&self.store).reset();
    }
}

impl Default for Matchmaker {
    fn default() -> Self {
        Self::new()
    }
}
