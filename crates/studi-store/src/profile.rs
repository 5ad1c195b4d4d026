//! Query functions for the single stored user profile.

use tracing::info;

use crate::error::StoreError;
use crate::kv::{KEY_USER_INPUT, Store};
use crate::models::UserProfile;

/// Replace the stored profile wholesale (single slot, no history).
pub fn save_profile(store: &Store, profile: &UserProfile) -> Result<(), StoreError> {
    store.put(KEY_USER_INPUT, profile)?;
    info!(name = %profile.name, goal = %profile.goal, "saved user profile");
    Ok(())
}

/// Fetch the stored profile, if any.
pub fn load_profile(store: &Store) -> Result<Option<UserProfile>, StoreError> {
    store.get(KEY_USER_INPUT)
}

/// Fetch the stored profile or fail with [`StoreError::MissingProfile`].
pub fn require_profile(store: &Store) -> Result<UserProfile, StoreError> {
    load_profile(store)?.ok_or(StoreError::MissingProfile)
}
