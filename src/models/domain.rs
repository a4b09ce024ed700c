use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered user profile
///
/// The password digest is serialized under `password` so existing clients
/// keep reading the same shape they always did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    #[serde(rename = "password")]
    pub password_hash: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: Option<DateTime<Utc>>,
    #[serde(default)]
    pub preference: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Input for registering a user; the password is still in plain text here
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub preference: Option<String>,
    pub interests: Option<Vec<String>>,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn preference(mut self, preference: impl Into<String>) -> Self {
        self.preference = Some(preference.into());
        self
    }
}

/// Partial profile update. Missing or empty values keep the stored ones.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub preference: Option<String>,
}

/// Swipe decision recorded in the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Like,
    Dislike,
}

/// One append-only ledger entry: `actor_id` swiped `kind` on `target_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "actorId")]
    pub actor_id: Uuid,
    #[serde(rename = "targetId")]
    pub target_id: Uuid,
    pub kind: InteractionKind,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Outcome of a swipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeResult {
    #[serde(rename = "match")]
    pub matched: bool,
    #[serde(rename = "matchedUser")]
    pub matched_user: Option<User>,
}

impl SwipeResult {
    pub fn no_match() -> Self {
        Self {
            matched: false,
            matched_user: None,
        }
    }

    pub fn matched_with(user: User) -> Self {
        Self {
            matched: true,
            matched_user: Some(user),
        }
    }
}
