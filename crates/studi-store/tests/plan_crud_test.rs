//! Integration tests for the studi-store query layer.
//!
//! These exercise the profile slot, the current-plan slot, and saved-plan
//! CRUD against a real store rooted in a temporary directory. Each test
//! gets its own directory so tests are fully isolated.

use studi_store::models::StudyStyle;
use studi_store::{Store, StoreError, plans, profile};
use studi_test_utils::{create_test_store, sample_plan, sample_profile};

// -----------------------------------------------------------------------
// Tests: profile slot
// -----------------------------------------------------------------------

#[test]
fn save_then_load_profile_roundtrips() {
    let (store, _guard) = create_test_store();
    let p = sample_profile("dsa", StudyStyle::MixedStyle, 10);

    profile::save_profile(&store, &p).expect("save_profile should succeed");
    let loaded = profile::load_profile(&store)
        .expect("load_profile should succeed")
        .expect("profile should be present");
    assert_eq!(loaded, p);
}

#[test]
fn load_profile_on_empty_store_is_none() {
    let (store, _guard) = create_test_store();
    let loaded = profile::load_profile(&store).expect("load_profile should succeed");
    assert!(loaded.is_none());
}

#[test]
fn second_save_replaces_profile() {
    let (store, _guard) = create_test_store();

    profile::save_profile(&store, &sample_profile("dsa", StudyStyle::MixedStyle, 10))
        .expect("first save should succeed");
    let replacement = sample_profile("python", StudyStyle::NotesReading, 21);
    profile::save_profile(&store, &replacement).expect("second save should succeed");

    let loaded = profile::load_profile(&store)
        .expect("load_profile should succeed")
        .expect("profile should be present");
    assert_eq!(loaded, replacement);
}

#[test]
fn require_profile_on_empty_store_is_missing_profile() {
    let (store, _guard) = create_test_store();
    let result = profile::require_profile(&store);
    assert!(matches!(result, Err(StoreError::MissingProfile)));
}

// -----------------------------------------------------------------------
// Tests: current-plan slot
// -----------------------------------------------------------------------

#[test]
fn current_plan_roundtrips() {
    let (store, _guard) = create_test_store();
    let plan = sample_plan(sample_profile("dsa", StudyStyle::VideoLearning, 14));

    plans::save_current_plan(&store, &plan).expect("save_current_plan should succeed");
    let loaded = plans::load_current_plan(&store)
        .expect("load_current_plan should succeed")
        .expect("current plan should be present");
    assert_eq!(loaded, plan);
}

#[test]
fn current_plan_is_overwritten_by_next_save() {
    let (store, _guard) = create_test_store();

    let first = sample_plan(sample_profile("dsa", StudyStyle::VideoLearning, 14));
    let second = sample_plan(sample_profile("sql", StudyStyle::CodingPractice, 7));
    plans::save_current_plan(&store, &first).expect("first save should succeed");
    plans::save_current_plan(&store, &second).expect("second save should succeed");

    let loaded = plans::load_current_plan(&store)
        .expect("load_current_plan should succeed")
        .expect("current plan should be present");
    assert_eq!(loaded, second);
}

#[test]
fn current_plan_survives_reopen() {
    let (store, guard) = create_test_store();
    let plan = sample_plan(sample_profile("frontend", StudyStyle::MixedStyle, 10));
    plans::save_current_plan(&store, &plan).expect("save_current_plan should succeed");
    drop(store);

    let reopened = Store::open(guard.path()).expect("reopen should succeed");
    let loaded = plans::load_current_plan(&reopened)
        .expect("load_current_plan should succeed")
        .expect("current plan should be present");
    assert_eq!(loaded, plan);
}

// -----------------------------------------------------------------------
// Tests: saved-plan collection
// -----------------------------------------------------------------------

#[test]
fn append_then_find_returns_identical_content() {
    let (store, _guard) = create_test_store();
    let content = sample_plan(sample_profile("dsa", StudyStyle::MixedStyle, 10));

    let saved = plans::append_plan(&store, content.clone()).expect("append_plan should succeed");
    let found = plans::find_plan(&store, &saved.id)
        .expect("find_plan should succeed")
        .expect("appended plan should be found");

    assert_eq!(found.id, saved.id);
    assert_eq!(found.content, content);
}

#[test]
fn append_derives_title_from_goal() {
    let (store, _guard) = create_test_store();
    let content = sample_plan(sample_profile("python", StudyStyle::NotesReading, 7));

    let saved = plans::append_plan(&store, content).expect("append_plan should succeed");
    assert_eq!(saved.title, "python Plan");
}

#[test]
fn list_is_newest_first() {
    let (store, _guard) = create_test_store();

    let first = plans::append_plan(&store, sample_plan(sample_profile("dsa", StudyStyle::MixedStyle, 10)))
        .expect("first append should succeed");
    let second = plans::append_plan(
        &store,
        sample_plan(sample_profile("sql", StudyStyle::CodingPractice, 14)),
    )
    .expect("second append should succeed");

    let all = plans::list_plans(&store).expect("list_plans should succeed");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, second.id);
    assert_eq!(all[1].id, first.id);
}

#[test]
fn list_on_empty_store_is_empty() {
    let (store, _guard) = create_test_store();
    let all = plans::list_plans(&store).expect("list_plans should succeed");
    assert!(all.is_empty());
}

#[test]
fn ids_are_unique_across_appends() {
    let (store, _guard) = create_test_store();

    let mut ids = Vec::new();
    for _ in 0..5 {
        let saved = plans::append_plan(
            &store,
            sample_plan(sample_profile("dsa", StudyStyle::MixedStyle, 10)),
        )
        .expect("append_plan should succeed");
        ids.push(saved.id);
    }

    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5, "expected 5 distinct ids, got: {ids:?}");
}

#[test]
fn find_unknown_id_is_none() {
    let (store, _guard) = create_test_store();
    let found = plans::find_plan(&store, "01ARZ3NDEKTSV4RRFFQ69G5FAV").expect("find should succeed");
    assert!(found.is_none());
}

#[test]
fn require_unknown_plan_is_plan_not_found() {
    let (store, _guard) = create_test_store();
    let result = plans::require_plan(&store, "01ARZ3NDEKTSV4RRFFQ69G5FAV");
    assert!(matches!(result, Err(StoreError::PlanNotFound(_))));
}

#[test]
fn delete_existing_shrinks_list_and_forgets_id() {
    let (store, _guard) = create_test_store();

    let keep = plans::append_plan(&store, sample_plan(sample_profile("dsa", StudyStyle::MixedStyle, 10)))
        .expect("append should succeed");
    let doomed = plans::append_plan(
        &store,
        sample_plan(sample_profile("backend", StudyStyle::VideoLearning, 7)),
    )
    .expect("append should succeed");

    let removed = plans::delete_plan(&store, &doomed.id).expect("delete_plan should succeed");
    assert!(removed);

    let all = plans::list_plans(&store).expect("list_plans should succeed");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, keep.id);

    let found = plans::find_plan(&store, &doomed.id).expect("find_plan should succeed");
    assert!(found.is_none());
}

#[test]
fn delete_absent_id_is_noop_returning_false() {
    let (store, _guard) = create_test_store();

    let saved = plans::append_plan(&store, sample_plan(sample_profile("dsa", StudyStyle::MixedStyle, 10)))
        .expect("append should succeed");

    let removed = plans::delete_plan(&store, "nope").expect("delete_plan should succeed");
    assert!(!removed);

    let all = plans::list_plans(&store).expect("list_plans should succeed");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, saved.id);
}

// -----------------------------------------------------------------------
// Tests: full profile -> plan -> save -> delete workflow
// -----------------------------------------------------------------------

#[test]
fn full_save_list_delete_workflow() {
    let (store, _guard) = create_test_store();

    // 1. Intake saves a profile.
    let p = sample_profile("database", StudyStyle::MixedStyle, 12);
    profile::save_profile(&store, &p).expect("save_profile should succeed");

    // 2. Generation produces a current plan.
    let current = sample_plan(p);
    plans::save_current_plan(&store, &current).expect("save_current_plan should succeed");

    // 3. Saving wraps the current plan into the collection.
    let reloaded = plans::load_current_plan(&store)
        .expect("load_current_plan should succeed")
        .expect("current plan should be present");
    let saved = plans::append_plan(&store, reloaded).expect("append_plan should succeed");
    assert_eq!(saved.title, "database Plan");

    // 4. The dashboard lists it.
    let all = plans::list_plans(&store).expect("list_plans should succeed");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, saved.id);

    // 5. Deleting empties the collection again.
    assert!(plans::delete_plan(&store, &saved.id).expect("delete should succeed"));
    let all = plans::list_plans(&store).expect("list_plans should succeed");
    assert!(all.is_empty());
}
