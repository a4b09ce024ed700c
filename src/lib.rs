//! Matchmaker - profile discovery, swipes and mutual matches
//!
//! The matching engine combines a user directory, an append-only swipe
//! ledger and a symmetric compatibility filter. Matches are derived from
//! reciprocal likes on every read.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{is_compatible, InteractionLedger, MatchDetector, MatchEngine, SwipeAction};
pub use error::EngineError;
pub use models::{Interaction, InteractionKind, NewUser, SwipeResult, User};
pub use services::UserDirectory;
