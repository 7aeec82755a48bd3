use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Directional swipe decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SwipeAction {
    Like,
    Pass,
}

/// User profile.
///
/// Immutable after creation; the zone is an opaque grouping key used for
/// exact-match candidate filtering, not a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub age: u8,
    pub gender: String,
    #[serde(rename = "zoneId")]
    pub zone_id: String,
}

impl User {
    /// Create a profile with a freshly generated id.
    pub fn new(
        name: impl Into<String>,
        age: u8,
        gender: impl Into<String>,
        zone_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            age,
            gender: gender.into(),
            zone_id: zone_id.into(),
        }
    }
}

/// Append-only record of one swipe decision.
///
/// The same ordered (swiper, swiped) pair may appear in any number of
/// events; nothing deduplicates or overwrites them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeEvent {
    #[serde(rename = "swiperId")]
    pub swiper_id: Uuid,
    #[serde(rename = "swipedId")]
    pub swiped_id: Uuid,
    pub action: SwipeAction,
    pub timestamp: DateTime<Utc>,
}

impl SwipeEvent {
    pub fn new(swiper_id: Uuid, swiped_id: Uuid, action: SwipeAction) -> Self {
        Self {
            swiper_id,
            swiped_id,
            action,
            timestamp: Utc::now(),
        }
    }
}

/// Detected mutual LIKE between two users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "user1Id")]
    pub user1_id: Uuid,
    #[serde(rename = "user2Id")]
    pub user2_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl MatchRecord {
    pub fn new(user1_id: Uuid, user2_id: Uuid) -> Self {
        Self {
            user1_id,
            user2_id,
            timestamp: Utc::now(),
        }
    }

    /// Whether the given user is one of the two participants.
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.user1_id == user_id || self.user2_id == user_id
    }

    /// Whether this record covers the given unordered pair.
    pub fn pairs(&self, a: Uuid, b: Uuid) -> bool {
        (self.user1_id == a && self.user2_id == b)
            || (self.user1_id == b && self.user2_id == a)
    }
}
