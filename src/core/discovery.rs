use crate::core::filters::is_compatible;
use crate::core::ledger::InteractionLedger;
use crate::models::User;
use crate::services::UserDirectory;

/// Candidate profiles for `viewer`, in directory order
///
/// Pipeline:
/// 1. Drop the viewer themselves
/// 2. Drop anyone the viewer already swiped on (like or dislike)
/// 3. Keep only mutually compatible users
pub fn discover(directory: &UserDirectory, ledger: &InteractionLedger, viewer: &User) -> Vec<User> {
    let seen = ledger.seen_by(&viewer.id);

    let candidates: Vec<User> = directory
        .iter()
        .filter(|u| u.id != viewer.id)
        .filter(|u| !seen.contains(&u.id))
        .filter(|u| is_compatible(viewer, u))
        .cloned()
        .collect();

    tracing::debug!(
        "Discovery for {}: {} candidates ({} already seen, {} users total)",
        viewer.id,
        candidates.len(),
        seen.len(),
        directory.len()
    );

    candidates
}
