use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::EngineError;
use crate::models::domain::{NewUser, ProfileChanges};

/// Request to register a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub name: Option<String>,
    pub gender: Option<String>,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<String>,
    pub preference: Option<String>,
    pub interests: Option<Vec<String>>,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = EngineError;

    fn try_from(req: CreateUserRequest) -> Result<Self, Self::Error> {
        let date_of_birth = req
            .date_of_birth
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .map(parse_date_of_birth)
            .transpose()?;

        Ok(NewUser {
            username: req.username,
            password: req.password,
            name: req.name,
            gender: req.gender,
            date_of_birth,
            preference: req.preference,
            interests: req.interests,
        })
    }
}

/// Login credentials. Blank values simply fail to match any user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request to update profile fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub gender: Option<String>,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<String>,
    pub preference: Option<String>,
}

impl TryFrom<UpdateProfileRequest> for ProfileChanges {
    type Error = EngineError;

    fn try_from(req: UpdateProfileRequest) -> Result<Self, Self::Error> {
        let date_of_birth = req
            .date_of_birth
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .map(parse_date_of_birth)
            .transpose()?;

        Ok(ProfileChanges {
            name: req.name,
            gender: req.gender,
            date_of_birth,
            preference: req.preference,
        })
    }
}

/// Request to replace the interest list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateInterestsRequest {
    pub interests: Vec<String>,
}

/// Request to swipe on another user
///
/// `action` stays a raw string; see [`crate::core::SwipeAction::parse`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SwipeRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "targetUserId")]
    pub target_user_id: String,
    #[serde(default)]
    pub action: Option<String>,
}

/// Accepts either a full RFC 3339 timestamp or a bare `YYYY-MM-DD` date
pub fn parse_date_of_birth(raw: &str) -> Result<DateTime<Utc>, EngineError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| EngineError::Validation(format!("Invalid dateOfBirth: {}", raw)))
}
