// Core algorithm exports
pub mod discovery;
pub mod engine;
pub mod filters;
pub mod ledger;
pub mod matcher;
pub mod swipe;

pub use discovery::discover;
pub use engine::MatchEngine;
pub use filters::{accepts, is_compatible, Preference};
pub use ledger::InteractionLedger;
pub use matcher::MatchDetector;
pub use swipe::{swipe, SwipeAction, DISLIKE_ACTION};
