//! Shared test utilities for studi integration tests.
//!
//! Each test gets its own store rooted in a fresh temporary directory; the
//! returned `TempDir` guard keeps the directory alive for the duration of
//! the test.

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use studi_store::Store;
use studi_store::models::{DayEntry, GeneratedPlan, StudyStyle, TaskItem, TaskKind, UserProfile};

/// Create an isolated store in a fresh temporary directory.
///
/// Returns `(store, guard)`. Keep the guard in scope; dropping it deletes
/// the directory.
pub fn create_test_store() -> (Store, TempDir) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let store = Store::open(dir.path()).expect("failed to open store");
    (store, dir)
}

/// A profile with fixed values suitable for most tests.
pub fn sample_profile(goal: &str, style: StudyStyle, hours: u32) -> UserProfile {
    UserProfile {
        name: "Asha".to_owned(),
        goal: goal.to_owned(),
        style,
        hours,
        saved_at: Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap(),
    }
}

/// A minimal one-day generated plan wrapping `profile`.
pub fn sample_plan(profile: UserProfile) -> GeneratedPlan {
    GeneratedPlan {
        day_count: 1,
        days: vec![DayEntry {
            day: 1,
            tasks: vec![TaskItem {
                kind: TaskKind::Video,
                label: "Watch Video: Arrays".to_owned(),
                link: Some("https://www.youtube.com/results?search_query=Arrays".to_owned()),
            }],
            hours: profile.hours.div_ceil(7),
        }],
        generated_at: Utc.with_ymd_and_hms(2026, 1, 5, 9, 30, 0).unwrap(),
        profile,
    }
}
