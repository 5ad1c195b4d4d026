//! Plan rendering: flatten a generated plan into console text and a saved
//! plan into a markdown document for export.
//!
//! Task labels are plain text, so no markup stripping happens here; links
//! are appended verbatim where present.

use studi_store::models::{GeneratedPlan, SavedPlan};

/// Render a plan for console display.
pub fn render_text(plan: &GeneratedPlan) -> String {
    let mut out = String::new();

    // Header.
    out.push_str(&format!(
        "Study plan for {} -- goal: {}, style: {}\n",
        plan.profile.name, plan.profile.goal, plan.profile.style
    ));
    out.push_str(&format!(
        "{} days, {} hrs/day (from {} weekly hours)\n",
        plan.day_count,
        daily_hours(plan),
        plan.profile.hours
    ));

    // Day blocks.
    for entry in &plan.days {
        out.push('\n');
        out.push_str(&format!("Day {} - {} hrs\n", entry.day, entry.hours));
        if entry.tasks.is_empty() {
            out.push_str("  (no tasks)\n");
        }
        for task in &entry.tasks {
            match &task.link {
                Some(link) => out.push_str(&format!("  {} ({})\n", task.label, link)),
                None => out.push_str(&format!("  {}\n", task.label)),
            }
        }
    }

    out
}

/// Render a saved plan as a standalone markdown document.
///
/// The document carries the saved title, the profile summary, and one
/// section per day with its task list.
pub fn render_markdown(saved: &SavedPlan) -> String {
    let plan = &saved.content;
    let mut out = String::new();

    // Title and profile summary.
    out.push_str(&format!("# {}\n\n", saved.title));
    out.push_str(&format!(
        "Created: {}\n\n",
        saved.created_at.format("%Y-%m-%d %H:%M")
    ));
    out.push_str(&format!("- **Learner:** {}\n", plan.profile.name));
    out.push_str(&format!("- **Goal:** {}\n", plan.profile.goal));
    out.push_str(&format!("- **Style:** {}\n", plan.profile.style));
    out.push_str(&format!("- **Weekly hours:** {}\n", plan.profile.hours));
    out.push_str(&format!("- **Days:** {}\n", plan.day_count));

    // Day sections.
    for entry in &plan.days {
        out.push('\n');
        out.push_str(&format!("## Day {} ({} hrs)\n\n", entry.day, entry.hours));
        if entry.tasks.is_empty() {
            out.push_str("- (no tasks)\n");
        }
        for task in &entry.tasks {
            match &task.link {
                Some(link) => out.push_str(&format!("- {} ({})\n", task.label, link)),
                None => out.push_str(&format!("- {}\n", task.label)),
            }
        }
    }

    out
}

/// Hours per day, constant across a plan; 0 only for an empty day list.
fn daily_hours(plan: &GeneratedPlan) -> u32 {
    plan.days.first().map(|d| d.hours).unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
