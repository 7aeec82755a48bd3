// Core algorithm exports
pub mod feed;
pub mod swipe;

pub use feed::FeedGenerator;
pub use swipe::{MatchPolicy, SwipeProcessor};
