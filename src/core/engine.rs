use uuid::Uuid;

use crate::core::discovery::discover;
use crate::core::ledger::InteractionLedger;
use crate::core::matcher::MatchDetector;
use crate::core::swipe::{swipe, SwipeAction};
use crate::error::EngineError;
use crate::models::{NewUser, ProfileChanges, SwipeResult, User};
use crate::services::{resolve_token, AuthError, UserDirectory};

/// Main matching orchestrator - owns the user directory and the swipe ledger
///
/// Both stores live in one value so a single lock around the engine
/// serializes every read and write across them.
#[derive(Debug, Default, Clone)]
pub struct MatchEngine {
    directory: UserDirectory,
    ledger: InteractionLedger,
}

impl MatchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self) -> &InteractionLedger {
        &self.ledger
    }

    pub fn user_count(&self) -> usize {
        self.directory.len()
    }

    pub fn register(&mut self, new_user: NewUser) -> User {
        let user = self.directory.register(new_user);
        tracing::info!("Registered user {} ({})", user.id, user.username);
        user
    }

    pub fn login(&self, username: &str, password: &str) -> Result<User, EngineError> {
        self.directory
            .find_by_credentials(username, password)
            .cloned()
            .ok_or(EngineError::Auth(AuthError::InvalidCredentials))
    }

    /// Resolve the `user-token` header value to the acting user
    pub fn authenticate(&self, token: Option<&str>) -> Result<User, EngineError> {
        resolve_token(&self.directory, token).cloned().map_err(|e| {
            tracing::warn!("Rejected user token: {}", e);
            EngineError::from(e)
        })
    }

    pub fn update_profile(&mut self, id: &Uuid, changes: ProfileChanges) -> Result<User, EngineError> {
        self.directory
            .update_profile(id, changes)
            .cloned()
            .ok_or_else(EngineError::user_not_found)
    }

    pub fn update_interests(&mut self, id: &Uuid, interests: Vec<String>) -> Result<User, EngineError> {
        self.directory
            .replace_interests(id, interests)
            .cloned()
            .ok_or_else(EngineError::user_not_found)
    }

    /// Candidate profiles for `viewer_id`
    pub fn discover(&self, viewer_id: &Uuid) -> Result<Vec<User>, EngineError> {
        let viewer = self.directory.get(viewer_id).ok_or_else(EngineError::user_not_found)?;
        Ok(discover(&self.directory, &self.ledger, viewer))
    }

    pub fn swipe(&mut self, actor_id: Uuid, target_id: Uuid, action: SwipeAction) -> Result<SwipeResult, EngineError> {
        if self.directory.get(&actor_id).is_none() {
            return Err(EngineError::user_not_found());
        }
        swipe(&self.directory, &mut self.ledger, actor_id, target_id, action)
    }

    pub fn matches_for(&self, user_id: &Uuid) -> Vec<User> {
        MatchDetector::new(&self.ledger).matches_for(&self.directory, user_id)
    }
}
