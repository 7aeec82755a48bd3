// Model exports
pub mod domain;

pub use domain::{MatchRecord, SwipeAction, SwipeEvent, User};
