//! `studi intake` command: validate and save the user profile.

use anyhow::{Result, bail};
use chrono::Utc;
use clap::ValueEnum;
use tracing::warn;

use studi_core::catalog::Subject;
use studi_store::models::{StudyStyle, UserProfile};
use studi_store::{Store, profile};

/// Study style as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    Video,
    Notes,
    Practice,
    Mixed,
}

impl StyleArg {
    pub fn to_style(self) -> StudyStyle {
        match self {
            Self::Video => StudyStyle::VideoLearning,
            Self::Notes => StudyStyle::NotesReading,
            Self::Practice => StudyStyle::CodingPractice,
            Self::Mixed => StudyStyle::MixedStyle,
        }
    }
}

/// Run the intake command: validate the inputs and replace the stored profile.
pub fn run_intake(
    store: &Store,
    name: &str,
    goal: &str,
    style: StyleArg,
    hours: u32,
) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("name must not be empty");
    }
    if hours == 0 {
        bail!("weekly hours must be at least 1");
    }

    // Unknown goals are stored as-is; generation falls back to the default
    // topic pool.
    if Subject::parse(goal).is_none() {
        warn!(goal, "unknown goal, plans will use the default topics");
        println!("Warning: unknown goal {goal:?}; plans will use the dsa topic list.");
    }

    let profile_rec = UserProfile {
        name: name.to_owned(),
        goal: goal.to_owned(),
        style: style.to_style(),
        hours,
        saved_at: Utc::now(),
    };
    profile::save_profile(store, &profile_rec)?;

    println!("Profile saved.");
    println!();
    println!("  Name:   {}", profile_rec.name);
    println!("  Goal:   {}", profile_rec.goal);
    println!("  Style:  {}", profile_rec.style);
    println!("  Hours:  {}/week", profile_rec.hours);
    println!();
    println!("Next: run `studi generate` to build a plan.");

    Ok(())
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
