use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;

use crate::models::{Interaction, InteractionKind};

/// Append-only record of swipe decisions
///
/// Repeated swipes between the same pair are all kept.
#[derive(Debug, Default, Clone)]
pub struct InteractionLedger {
    interactions: Vec<Interaction>,
}

impl InteractionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Interaction> {
        self.interactions.iter()
    }

    /// Append a new interaction. Always succeeds.
    pub fn record(&mut self, actor_id: Uuid, target_id: Uuid, kind: InteractionKind) -> Interaction {
        let interaction = Interaction {
            id: Uuid::new_v4(),
            actor_id,
            target_id,
            kind,
            created_at: Utc::now(),
        };

        self.interactions.push(interaction.clone());

        tracing::debug!(
            "Recorded interaction: {} -> {} ({:?})",
            actor_id,
            target_id,
            kind
        );

        interaction
    }

    pub fn find_by_actor<'a>(&'a self, actor_id: &'a Uuid) -> impl Iterator<Item = &'a Interaction> + 'a {
        self.interactions.iter().filter(move |i| i.actor_id == *actor_id)
    }

    /// Every user `actor_id` has swiped on, like or dislike
    pub fn seen_by(&self, actor_id: &Uuid) -> HashSet<Uuid> {
        self.find_by_actor(actor_id).map(|i| i.target_id).collect()
    }

    /// Whether `actor_id` has recorded at least one like toward `target_id`
    pub fn has_liked(&self, actor_id: &Uuid, target_id: &Uuid) -> bool {
        self.find_by_actor(actor_id)
            .any(|i| i.target_id == *target_id && i.kind == InteractionKind::Like)
    }

    /// True iff `a` liked `b` and `b` liked `a`
    pub fn find_mutual_like(&self, a: &Uuid, b: &Uuid) -> bool {
        self.has_liked(a, b) && self.has_liked(b, a)
    }
}
