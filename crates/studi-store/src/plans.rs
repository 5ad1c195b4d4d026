//! Query functions for the saved-plan collection and the current-plan slot.
//!
//! The collection is read and written whole on every mutation; there are no
//! partial updates. Ordering is newest first, maintained by prepending on
//! append.

use chrono::Utc;
use tracing::info;
use ulid::Ulid;

use crate::error::StoreError;
use crate::kv::{KEY_CURRENT_PLAN, KEY_SAVED_PLANS, Store};
use crate::models::{GeneratedPlan, SavedPlan};

/// Persist the last generated plan. Overwritten on each generation.
pub fn save_current_plan(store: &Store, plan: &GeneratedPlan) -> Result<(), StoreError> {
    store.put(KEY_CURRENT_PLAN, plan)
}

/// Fetch the last generated plan, if any.
pub fn load_current_plan(store: &Store) -> Result<Option<GeneratedPlan>, StoreError> {
    store.get(KEY_CURRENT_PLAN)
}

/// Wrap a generated plan into the saved collection.
///
/// Mints a fresh ULID, derives the title from the profile goal, stamps the
/// creation time, prepends the entry, and persists the whole collection.
/// Returns the new entry.
pub fn append_plan(store: &Store, content: GeneratedPlan) -> Result<SavedPlan, StoreError> {
    let saved = SavedPlan {
        id: Ulid::new().to_string(),
        title: format!("{} Plan", content.profile.goal),
        created_at: Utc::now(),
        content,
    };

    let mut all = load_saved(store)?;
    all.insert(0, saved.clone());
    store.put(KEY_SAVED_PLANS, &all)?;
    info!(id = %saved.id, title = %saved.title, "saved plan");

    Ok(saved)
}

/// List saved plans, newest first (as stored).
pub fn list_plans(store: &Store) -> Result<Vec<SavedPlan>, StoreError> {
    load_saved(store)
}

/// Fetch one saved plan by id.
pub fn find_plan(store: &Store, id: &str) -> Result<Option<SavedPlan>, StoreError> {
    Ok(load_saved(store)?.into_iter().find(|p| p.id == id))
}

/// Fetch one saved plan by id or fail with [`StoreError::PlanNotFound`].
pub fn require_plan(store: &Store, id: &str) -> Result<SavedPlan, StoreError> {
    find_plan(store, id)?.ok_or_else(|| StoreError::PlanNotFound(id.to_owned()))
}

/// Delete one saved plan by id. Returns `true` if an entry was removed.
///
/// Deleting an absent id leaves the stored collection untouched and returns
/// `false`.
pub fn delete_plan(store: &Store, id: &str) -> Result<bool, StoreError> {
    let mut all = load_saved(store)?;
    let before = all.len();
    all.retain(|p| p.id != id);
    if all.len() == before {
        return Ok(false);
    }
    store.put(KEY_SAVED_PLANS, &all)?;
    info!(id, "deleted saved plan");
    Ok(true)
}

fn load_saved(store: &Store) -> Result<Vec<SavedPlan>, StoreError> {
    Ok(store.get(KEY_SAVED_PLANS)?.unwrap_or_default())
}
