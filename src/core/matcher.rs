use std::collections::HashSet;

use uuid::Uuid;

use crate::core::ledger::InteractionLedger;
use crate::models::{InteractionKind, User};
use crate::services::UserDirectory;

/// Derives mutual matches from the interaction ledger
///
/// Matches are never stored; every query reads the ledger as it is now.
#[derive(Debug, Clone, Copy)]
pub struct MatchDetector<'a> {
    ledger: &'a InteractionLedger,
}

impl<'a> MatchDetector<'a> {
    pub fn new(ledger: &'a InteractionLedger) -> Self {
        Self { ledger }
    }

    /// Whether `a` and `b` have liked each other
    pub fn is_match(&self, a: &Uuid, b: &Uuid) -> bool {
        self.ledger.find_mutual_like(a, b)
    }

    /// Ids of every user with a mutual like with `user_id`
    pub fn matched_ids(&self, user_id: &Uuid) -> HashSet<Uuid> {
        let liked: HashSet<Uuid> = self
            .ledger
            .find_by_actor(user_id)
            .filter(|i| i.kind == InteractionKind::Like)
            .map(|i| i.target_id)
            .collect();

        self.ledger
            .iter()
            .filter(|i| {
                i.kind == InteractionKind::Like
                    && i.target_id == *user_id
                    && liked.contains(&i.actor_id)
            })
            .map(|i| i.actor_id)
            .collect()
    }

    /// Matched users in directory order. Ids no longer in the directory are skipped.
    pub fn matches_for(&self, directory: &UserDirectory, user_id: &Uuid) -> Vec<User> {
        let matched = self.matched_ids(user_id);
        if matched.is_empty() {
            return Vec::new();
        }

        directory
            .iter()
            .filter(|u| matched.contains(&u.id))
            .cloned()
            .collect()
    }
}
