use uuid::Uuid;

use crate::core::ledger::InteractionLedger;
use crate::core::matcher::MatchDetector;
use crate::error::EngineError;
use crate::models::{InteractionKind, SwipeResult};
use crate::services::UserDirectory;

/// The only action string that records a dislike
pub const DISLIKE_ACTION: &str = "dislike";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction {
    Like,
    Dislike,
}

impl SwipeAction {
    /// Anything other than exactly `"dislike"`, including no action, is a like.
    pub fn parse(action: Option<&str>) -> Self {
        match action {
            Some(DISLIKE_ACTION) => SwipeAction::Dislike,
            _ => SwipeAction::Like,
        }
    }
}

impl From<SwipeAction> for InteractionKind {
    fn from(action: SwipeAction) -> Self {
        match action {
            SwipeAction::Like => InteractionKind::Like,
            SwipeAction::Dislike => InteractionKind::Dislike,
        }
    }
}

/// Record a swipe and report whether it completed a match
///
/// Appends exactly one interaction when it succeeds and none when it fails.
/// Callers must hold exclusive access to both the directory and the ledger
/// so the append and the match check see the same state.
pub fn swipe(
    directory: &UserDirectory,
    ledger: &mut InteractionLedger,
    actor_id: Uuid,
    target_id: Uuid,
    action: SwipeAction,
) -> Result<SwipeResult, EngineError> {
    if actor_id == target_id {
        return Err(EngineError::Validation("Cannot swipe on yourself".to_string()));
    }

    let target = directory.get(&target_id).ok_or_else(EngineError::user_not_found)?;

    ledger.record(actor_id, target_id, action.into());

    if action == SwipeAction::Dislike {
        return Ok(SwipeResult::no_match());
    }

    // actor != target, so the like just appended cannot satisfy the reverse half
    if MatchDetector::new(ledger).is_match(&target_id, &actor_id) {
        tracing::info!("New match: {} <-> {}", actor_id, target_id);
        Ok(SwipeResult::matched_with(target.clone()))
    } else {
        Ok(SwipeResult::no_match())
    }
}
