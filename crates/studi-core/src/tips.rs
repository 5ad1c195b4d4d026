//! Study strategy tips, personalized from the stored profile.

use studi_store::models::UserProfile;

/// The fixed tip list shown by the `tips` command.
pub fn strategy_tips(profile: &UserProfile) -> Vec<String> {
    vec![
        format!(
            "Hi {}, your goal: {}, study style: {}.",
            profile.name, profile.goal, profile.style
        ),
        "Use Pomodoro: 25min study + 5min break.".to_owned(),
        "Follow Learn -> Practice -> Test.".to_owned(),
        format!(
            "Weekly hours: {}, keep 1 revision day/week.",
            profile.hours
        ),
        "Solve one problem daily.".to_owned(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use studi_store::models::StudyStyle;
    use studi_test_utils::sample_profile;

    #[test]
    fn five_tips_are_returned() {
        let tips = strategy_tips(&sample_profile("dsa", StudyStyle::MixedStyle, 10));
        assert_eq!(tips.len(), 5);
    }

    #[test]
    fn greeting_is_personalized() {
        let tips = strategy_tips(&sample_profile("python", StudyStyle::NotesReading, 8));
        assert_eq!(
            tips[0],
            "Hi Asha, your goal: python, study style: Notes Reading."
        );
    }

    #[test]
    fn hours_tip_carries_weekly_hours() {
        let tips = strategy_tips(&sample_profile("dsa", StudyStyle::MixedStyle, 21));
        assert!(tips[3].contains("Weekly hours: 21"), "got: {}", tips[3]);
    }
}
