use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Kind of entity a lookup can fail on.
///
/// Only users are addressable today; the enum keeps the transport layer
/// from string-matching error messages when new kinds appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::User => write!(f, "user"),
        }
    }
}

/// Errors the matching core can produce.
///
/// Both variants are deterministic functions of store state and input;
/// retrying with identical arguments can never resolve them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: Uuid },

    #[error("user {0} cannot swipe on themselves")]
    SelfReference(Uuid),
}

impl CoreError {
    /// Shorthand for the common user-lookup failure.
    pub fn user_not_found(id: Uuid) -> Self {
        CoreError::NotFound {
            kind: EntityKind::User,
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_names_the_id() {
        let id = Uuid::new_v4();
        let err = CoreError::user_not_found(id);

        assert_eq!(err.to_string(), format!("user {} not found", id));
    }

    #[test]
    fn test_self_reference_display() {
        let id = Uuid::new_v4();
        let err = CoreError::SelfReference(id);

        assert!(err.to_string().contains("cannot swipe on themselves"));
    }
}
