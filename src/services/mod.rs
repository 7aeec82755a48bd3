// Service exports
pub mod matchmaker;
pub mod store;

pub use matchmaker::Matchmaker;
pub use store::{EntityStore, SharedStore};
