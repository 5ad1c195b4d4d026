//! Static topic catalog: subject areas, their ordered topic lists, and the
//! external resource URLs study tasks link to.

use std::fmt;

// ---------------------------------------------------------------------------
// Subjects
// ---------------------------------------------------------------------------

/// A subject area with a built-in topic sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Dsa,
    Python,
    Database,
    Frontend,
    Backend,
    Sql,
}

/// All known subjects, in catalog order.
pub const SUBJECTS: [Subject; 6] = [
    Subject::Dsa,
    Subject::Python,
    Subject::Database,
    Subject::Frontend,
    Subject::Backend,
    Subject::Sql,
];

impl Subject {
    /// Strict, case-insensitive parse. `None` for unknown keys.
    pub fn parse(goal: &str) -> Option<Self> {
        match goal.trim().to_ascii_lowercase().as_str() {
            "dsa" => Some(Self::Dsa),
            "python" => Some(Self::Python),
            "database" => Some(Self::Database),
            "frontend" => Some(Self::Frontend),
            "backend" => Some(Self::Backend),
            "sql" => Some(Self::Sql),
            _ => None,
        }
    }

    /// Total lookup used by the generator: unknown goals fall back to
    /// [`Subject::Dsa`].
    pub fn from_goal(goal: &str) -> Self {
        Self::parse(goal).unwrap_or(Self::Dsa)
    }

    /// Ordered topic list for this subject. Never empty.
    pub fn topics(self) -> &'static [&'static str] {
        match self {
            Self::Dsa => &[
                "Arrays",
                "Strings",
                "Linked List",
                "Trees",
                "Graphs",
                "DP",
                "Greedy",
                "Sorting",
                "Searching",
            ],
            Self::Python => &[
                "Basics",
                "Functions",
                "OOP",
                "Modules",
                "File Handling",
                "NumPy",
                "Pandas",
            ],
            Self::Database => &[
                "DBMS Basics",
                "ER Models",
                "Normalization",
                "SQL Queries",
                "Transactions",
                "Indexing",
            ],
            Self::Frontend => &[
                "HTML",
                "CSS",
                "JavaScript",
                "React Basics",
                "Responsive Design",
                "APIs",
            ],
            Self::Backend => &[
                "Node.js",
                "Express",
                "REST APIs",
                "Authentication",
                "MongoDB",
                "Deployment",
            ],
            Self::Sql => &[
                "Joins",
                "Constraints",
                "Stored Procedures",
                "Triggers",
                "Aggregation",
                "Query Optimization",
            ],
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Dsa => "dsa",
            Self::Python => "python",
            Self::Database => "database",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Sql => "sql",
        };
        f.write_str(s)
    }
}

/// Topic list for a free-text goal, falling back to the default subject's
/// list when the goal is unrecognized.
pub fn topics_for_goal(goal: &str) -> &'static [&'static str] {
    Subject::from_goal(goal).topics()
}

// ---------------------------------------------------------------------------
// Resource URLs
// ---------------------------------------------------------------------------

const NOTES_URL: &str = "https://www.geeksforgeeks.org/explore";
const VIDEO_SEARCH_BASE: &str = "https://www.youtube.com/results?search_query=";
const PRACTICE_URL: &str = "https://leetcode.com/problemset/all/";

/// Fixed notes reference page.
pub fn notes_url() -> &'static str {
    NOTES_URL
}

/// Video search URL for a topic. The topic is concatenated without
/// percent-encoding.
pub fn video_search_url(topic: &str) -> String {
    format!("{VIDEO_SEARCH_BASE}{topic}")
}

/// Fixed practice problem set.
pub fn practice_url() -> &'static str {
    PRACTICE_URL
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
