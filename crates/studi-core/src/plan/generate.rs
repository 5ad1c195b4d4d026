//! Deterministic plan generation.
//!
//! Turns a stored profile and a requested day count into a day-by-day
//! schedule. Pure logic apart from the `generated_at` stamp: the same
//! profile and day count always produce the same day structure.

use chrono::Utc;
use thiserror::Error;
use tracing::debug;

use studi_store::models::{DayEntry, GeneratedPlan, StudyStyle, TaskItem, TaskKind, UserProfile};

use crate::catalog;

/// Label of the weekly mock-test day.
const MOCK_TEST_LABEL: &str = "Weekly Revision & Mock Test";
/// Label of the every-sixth-day revision day.
const REVISION_LABEL: &str = "Revision of last 5 days";

/// Errors from plan generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// Day counts below 1 cannot form a schedule.
    #[error("day count must be at least 1 (got {0})")]
    InvalidDayCount(u32),
}

/// Generate a day-by-day plan from `profile` spanning `day_count` days.
///
/// Day classification, in order of precedence:
/// 1. `day % 7 == 0`: a single mock-test task. Checked first, so it wins on
///    days that are multiples of both 6 and 7 (day 42, 84, ...).
/// 2. `day % 6 == 0`: a single revision task.
/// 3. Otherwise a study day: the next topic from the subject's pool,
///    expressed as one task per matching style rule.
///
/// The topic cursor advances only on study days, wrapping around the pool.
/// Daily hours are `ceil(weekly hours / 7)`, constant across the plan.
pub fn generate(profile: &UserProfile, day_count: u32) -> Result<GeneratedPlan, GenerateError> {
    if day_count == 0 {
        return Err(GenerateError::InvalidDayCount(day_count));
    }

    let hours_per_day = profile.hours.div_ceil(7);
    let pool = catalog::topics_for_goal(&profile.goal);
    let mut cursor = 0usize;

    let mut days = Vec::with_capacity(day_count as usize);
    for day in 1..=day_count {
        let tasks = if day % 7 == 0 {
            vec![TaskItem {
                kind: TaskKind::MockTest,
                label: MOCK_TEST_LABEL.to_owned(),
                link: None,
            }]
        } else if day % 6 == 0 {
            vec![TaskItem {
                kind: TaskKind::Revision,
                label: REVISION_LABEL.to_owned(),
                link: None,
            }]
        } else {
            let topic = pool[cursor % pool.len()];
            cursor += 1;
            style_tasks(&profile.style, topic)
        };

        days.push(DayEntry {
            day,
            tasks,
            hours: hours_per_day,
        });
    }

    debug!(goal = %profile.goal, day_count, "generated plan");

    Ok(GeneratedPlan {
        profile: profile.clone(),
        day_count,
        days,
        generated_at: Utc::now(),
    })
}

/// Tasks for one study day, in the fixed Video, Notes, Practice order.
///
/// A style outside the four known labels matches no rule and yields an
/// empty list.
fn style_tasks(style: &StudyStyle, topic: &str) -> Vec<TaskItem> {
    let mut tasks = Vec::new();

    if matches!(style, StudyStyle::VideoLearning | StudyStyle::MixedStyle) {
        tasks.push(TaskItem {
            kind: TaskKind::Video,
            label: format!("Watch Video: {topic}"),
            link: Some(catalog::video_search_url(topic)),
        });
    }
    if matches!(style, StudyStyle::NotesReading | StudyStyle::MixedStyle) {
        tasks.push(TaskItem {
            kind: TaskKind::Notes,
            label: "Read Notes: GFG Notes".to_owned(),
            link: Some(catalog::notes_url().to_owned()),
        });
    }
    if matches!(style, StudyStyle::CodingPractice | StudyStyle::MixedStyle) {
        tasks.push(TaskItem {
            kind: TaskKind::Practice,
            label: "Practice: Coding Practice".to_owned(),
            link: Some(catalog::practice_url().to_owned()),
        });
    }

    tasks
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use studi_test_utils::sample_profile;

    #[test]
    fn produces_one_entry_per_day() {
        let profile = sample_profile("dsa", StudyStyle::MixedStyle, 10);
        let plan = generate(&profile, 30).expect("generate should succeed");

        assert_eq!(plan.day_count, 30);
        assert_eq!(plan.days.len(), 30);
        for (i, entry) in plan.days.iter().enumerate() {
            assert_eq!(entry.day, i as u32 + 1);
        }
    }

    #[test]
    fn hours_per_day_is_weekly_ceiling() {
        let cases = [(7, 1), (10, 2), (14, 2), (15, 3), (1, 1)];
        for (weekly, expected) in cases {
            let profile = sample_profile("dsa", StudyStyle::MixedStyle, weekly);
            let plan = generate(&profile, 3).expect("generate should succeed");
            for entry in &plan.days {
                assert_eq!(
                    entry.hours, expected,
                    "weekly hours {weekly} should give {expected} per day"
                );
            }
        }
    }

    #[test]
    fn zero_day_count_is_rejected() {
        let profile = sample_profile("dsa", StudyStyle::MixedStyle, 10);
        let result = generate(&profile, 0);
        assert_eq!(result.unwrap_err(), GenerateError::InvalidDayCount(0));
    }

    #[test]
    fn mixed_style_emits_three_tasks_in_order() {
        let profile = sample_profile("dsa", StudyStyle::MixedStyle, 10);
        let plan = generate(&profile, 1).expect("generate should succeed");

        let kinds: Vec<TaskKind> = plan.days[0].tasks.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TaskKind::Video, TaskKind::Notes, TaskKind::Practice]
        );
    }

    #[test]
    fn video_task_links_topic_search() {
        let profile = sample_profile("dsa", StudyStyle::VideoLearning, 10);
        let plan = generate(&profile, 1).expect("generate should succeed");

        let tasks = &plan.days[0].tasks;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].label, "Watch Video: Arrays");
        assert_eq!(
            tasks[0].link.as_deref(),
            Some("https://www.youtube.com/results?search_query=Arrays")
        );
    }

    #[test]
    fn notes_style_emits_single_notes_task() {
        let profile = sample_profile("dsa", StudyStyle::NotesReading, 10);
        let plan = generate(&profile, 1).expect("generate should succeed");

        let tasks = &plan.days[0].tasks;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].kind, TaskKind::Notes);
        assert_eq!(tasks[0].label, "Read Notes: GFG Notes");
        assert_eq!(
            tasks[0].link.as_deref(),
            Some("https://www.geeksforgeeks.org/explore")
        );
    }

    #[test]
    fn practice_style_emits_single_practice_task() {
        let profile = sample_profile("dsa", StudyStyle::CodingPractice, 10);
        let plan = generate(&profile, 1).expect("generate should succeed");

        let tasks = &plan.days[0].tasks;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].kind, TaskKind::Practice);
        assert_eq!(
            tasks[0].link.as_deref(),
            Some("https://leetcode.com/problemset/all/")
        );
    }

    #[test]
    fn unknown_style_yields_taskless_study_days() {
        let profile = sample_profile("dsa", StudyStyle::Other("Speed Reading".to_owned()), 10);
        let plan = generate(&profile, 7).expect("generate should succeed");

        // Study days carry no tasks under an unrecognized style.
        assert!(plan.days[0].tasks.is_empty());
        assert!(plan.days[4].tasks.is_empty());
        // Special days are unaffected by style.
        assert_eq!(plan.days[5].tasks.len(), 1);
        assert_eq!(plan.days[5].tasks[0].kind, TaskKind::Revision);
        assert_eq!(plan.days[6].tasks.len(), 1);
        assert_eq!(plan.days[6].tasks[0].kind, TaskKind::MockTest);
    }

    #[test]
    fn plan_embeds_profile_copy() {
        let profile = sample_profile("frontend", StudyStyle::MixedStyle, 12);
        let plan = generate(&profile, 5).expect("generate should succeed");
        assert_eq!(plan.profile, profile);
    }
}
