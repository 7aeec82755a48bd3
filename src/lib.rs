//! Lume Match - in-memory swipe and mutual-match core for the Lume dating app
//!
//! This library provides the matching core consumed by the transport layer:
//! an in-memory entity store, discovery feed generation, and swipe
//! processing with mutual-match detection. All state is process-resident
//! and lost on restart by design.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use config::Settings;
pub use core::{FeedGenerator, MatchPolicy, SwipeProcessor};
pub use error::{CoreError, EntityKind};
pub use models::{MatchRecord, SwipeAction, SwipeEvent, User};
pub use services::{EntityStore, Matchmaker, SharedStore};
