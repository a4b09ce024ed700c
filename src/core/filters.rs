use crate::models::User;

pub const MALE: &str = "Male";
pub const FEMALE: &str = "Female";

/// Who a user wants to be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    Men,
    Women,
    Both,
    Other,
}

impl Preference {
    /// Parse a stored preference. Matching is exact; anything unknown is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Men" => Some(Preference::Men),
            "Women" => Some(Preference::Women),
            "Both" => Some(Preference::Both),
            "Other" => Some(Preference::Other),
            _ => None,
        }
    }

    /// Whether someone of `gender` satisfies this preference
    #[inline]
    pub fn admits(self, gender: &str) -> bool {
        match self {
            Preference::Men => gender == MALE,
            Preference::Women => gender == FEMALE,
            Preference::Both => gender == MALE || gender == FEMALE,
            Preference::Other => true,
        }
    }
}

/// One-directional check: would `seeker` want to see `other`?
///
/// Unknown or empty preferences admit nobody.
#[inline]
pub fn accepts(seeker: &User, other: &User) -> bool {
    Preference::parse(&seeker.preference)
        .map(|pref| pref.admits(&other.gender))
        .unwrap_or(false)
}

/// Mutual compatibility between a viewer and a candidate
///
/// Both sides must accept each other, so the relation is symmetric.
#[inline]
pub fn is_compatible(viewer: &User, candidate: &User) -> bool {
    accepts(viewer, candidate) && accepts(candidate, viewer)
}
