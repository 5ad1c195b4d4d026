use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Kind of a single study task within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Video,
    Notes,
    Practice,
    Revision,
    MockTest,
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Video => "video",
            Self::Notes => "notes",
            Self::Practice => "practice",
            Self::Revision => "revision",
            Self::MockTest => "mock_test",
        };
        f.write_str(s)
    }
}

impl FromStr for TaskKind {
    type Err = TaskKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "video" => Ok(Self::Video),
            "notes" => Ok(Self::Notes),
            "practice" => Ok(Self::Practice),
            "revision" => Ok(Self::Revision),
            "mock_test" => Ok(Self::MockTest),
            other => Err(TaskKindParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`TaskKind`] string.
#[derive(Debug, Clone)]
pub struct TaskKindParseError(pub String);

impl fmt::Display for TaskKindParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid task kind: {:?}", self.0)
    }
}

impl std::error::Error for TaskKindParseError {}

// ---------------------------------------------------------------------------

/// Preferred learning modality -- drives which task kinds the generator emits.
///
/// The four known labels are closed, but any other string found in stored
/// data is preserved in [`StudyStyle::Other`] so it round-trips untouched.
/// An `Other` style matches no emission rule and yields task-free study days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudyStyle {
    VideoLearning,
    NotesReading,
    CodingPractice,
    MixedStyle,
    Other(String),
}

impl StudyStyle {
    /// Total conversion from a stored label. Never fails; unknown labels
    /// land in [`StudyStyle::Other`].
    pub fn from_label(s: &str) -> Self {
        match s {
            "Video Learning" => Self::VideoLearning,
            "Notes Reading" => Self::NotesReading,
            "Coding Practice" => Self::CodingPractice,
            "Mixed Style" => Self::MixedStyle,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for StudyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::VideoLearning => "Video Learning",
            Self::NotesReading => "Notes Reading",
            Self::CodingPractice => "Coding Practice",
            Self::MixedStyle => "Mixed Style",
            Self::Other(other) => other,
        };
        f.write_str(s)
    }
}

impl Serialize for StudyStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for StudyStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_label(&s))
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// The active user's study preferences, captured once at intake and
/// overwritten wholesale on the next intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    /// Free-text subject key; catalog lookup falls back to a default when
    /// this matches no known subject.
    pub goal: String,
    pub style: StudyStyle,
    /// Weekly study hours.
    pub hours: u32,
    pub saved_at: DateTime<Utc>,
}

/// One actionable item within a study day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    pub kind: TaskKind,
    /// Plain text, never markup.
    pub label: String,
    pub link: Option<String>,
}

/// A single day of the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    /// 1-based day number.
    pub day: u32,
    pub tasks: Vec<TaskItem>,
    /// Study hours for this day, constant across a plan.
    pub hours: u32,
}

/// Output of one generation run. Transient until explicitly saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    /// Embedded copy of the profile the plan was generated from.
    pub profile: UserProfile,
    pub day_count: u32,
    pub days: Vec<DayEntry>,
    pub generated_at: DateTime<Utc>,
}

/// A durable entry in the saved-plan collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlan {
    /// ULID string, unique within the collection.
    pub id: String,
    /// Derived at save time, e.g. "dsa Plan".
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub content: GeneratedPlan,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
