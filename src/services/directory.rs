use uuid::Uuid;

use crate::models::{NewUser, ProfileChanges, User};
use crate::services::password::hash_password;

/// In-memory user store
///
/// Users are kept in registration order, which is also the enumeration
/// order discovery and match listings follow.
#[derive(Debug, Default, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn get(&self, id: &Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == *id)
    }

    fn get_mut(&mut self, id: &Uuid) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == *id)
    }

    /// Register a user. Username uniqueness is not enforced.
    pub fn register(&mut self, new_user: NewUser) -> User {
        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username,
            password_hash: hash_password(&new_user.password),
            name: new_user.name.unwrap_or_default(),
            gender: new_user.gender.unwrap_or_default(),
            date_of_birth: new_user.date_of_birth,
            preference: new_user.preference.unwrap_or_default(),
            interests: new_user.interests.unwrap_or_default(),
        };

        self.users.push(user.clone());
        user
    }

    /// First user whose username and password digest both match
    pub fn find_by_credentials(&self, username: &str, password: &str) -> Option<&User> {
        let digest = hash_password(password);
        self.users
            .iter()
            .find(|u| u.username == username && u.password_hash == digest)
    }

    /// Apply a partial profile update, returning `None` for an unknown id
    pub fn update_profile(&mut self, id: &Uuid, changes: ProfileChanges) -> Option<&User> {
        let user = self.get_mut(id)?;

        if let Some(name) = non_empty(changes.name) {
            user.name = name;
        }
        if let Some(gender) = non_empty(changes.gender) {
            user.gender = gender;
        }
        if let Some(dob) = changes.date_of_birth {
            user.date_of_birth = Some(dob);
        }
        if let Some(preference) = non_empty(changes.preference) {
            user.preference = preference;
        }

        Some(&*user)
    }

    pub fn replace_interests(&mut self, id: &Uuid, interests: Vec<String>) -> Option<&User> {
        let user = self.get_mut(id)?;
        user.interests = interests;
        Some(&*user)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
