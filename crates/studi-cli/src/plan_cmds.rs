//! CLI handlers for `studi plan` subcommands.
//!
//! Implements:
//! - `studi plan show [plan-id]`   -- show the current plan or a saved one
//! - `studi plan save`             -- wrap the current plan into the collection
//! - `studi plan list`             -- list saved plans, newest first
//! - `studi plan delete <plan-id>` -- delete a saved plan
//! - `studi plan export <plan-id>` -- write a saved plan as markdown

use anyhow::{Context, Result, bail};

use studi_core::plan::{render_markdown, render_text};
use studi_store::{Store, plans};

use crate::PlanCommands;

// -----------------------------------------------------------------------
// Public entry point
// -----------------------------------------------------------------------

/// Dispatch a `PlanCommands` variant to the appropriate handler.
pub fn run_plan_command(command: PlanCommands, store: &Store) -> Result<()> {
    match command {
        PlanCommands::Show { plan_id } => match plan_id {
            Some(id) => cmd_show_saved(store, &id),
            None => cmd_show_current(store),
        },
        PlanCommands::Save => cmd_save(store),
        PlanCommands::List => cmd_list(store),
        PlanCommands::Delete { plan_id } => cmd_delete(store, &plan_id),
        PlanCommands::Export { plan_id, output } => cmd_export(store, &plan_id, output.as_deref()),
    }
}

// -----------------------------------------------------------------------
// studi plan show (current plan)
// -----------------------------------------------------------------------

/// Print the last generated plan.
fn cmd_show_current(store: &Store) -> Result<()> {
    let Some(plan) = plans::load_current_plan(store)? else {
        println!("No current plan. Run `studi generate` first.");
        return Ok(());
    };

    print!("{}", render_text(&plan));
    Ok(())
}

// -----------------------------------------------------------------------
// studi plan show <plan-id>
// -----------------------------------------------------------------------

/// Print a saved plan with its collection metadata.
fn cmd_show_saved(store: &Store, plan_id: &str) -> Result<()> {
    let saved = plans::require_plan(store, plan_id)?;

    println!("Plan: {}", saved.title);
    println!("  ID:       {}", saved.id);
    println!(
        "  Created:  {}",
        saved.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("  Days:     {}", saved.content.day_count);
    println!();
    print!("{}", render_text(&saved.content));

    Ok(())
}

// -----------------------------------------------------------------------
// studi plan save
// -----------------------------------------------------------------------

/// Move the current plan into the saved collection.
fn cmd_save(store: &Store) -> Result<()> {
    let Some(plan) = plans::load_current_plan(store)? else {
        bail!("no current plan to save; run `studi generate` first");
    };

    let saved = plans::append_plan(store, plan)?;

    println!("Plan saved.");
    println!();
    println!("  ID:       {}", saved.id);
    println!("  Title:    {}", saved.title);
    println!(
        "  Created:  {}",
        saved.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    Ok(())
}

// -----------------------------------------------------------------------
// studi plan list
// -----------------------------------------------------------------------

/// List all saved plans with summary info.
fn cmd_list(store: &Store) -> Result<()> {
    let all = plans::list_plans(store)?;

    if all.is_empty() {
        println!("No saved plans. Use `studi plan save` after generating one.");
        return Ok(());
    }

    // Compute column widths for a clean table.
    // ID is always 26 chars (ULID).
    let id_w = 26;
    let title_w = all.iter().map(|p| p.title.len()).max().unwrap_or(5).max(5);
    let days_w = 4;

    // Header
    println!(
        "{:<id_w$}  {:<title_w$}  {:>days_w$}  CREATED",
        "ID", "TITLE", "DAYS",
    );

    // Rows
    for saved in &all {
        let created = saved.created_at.format("%Y-%m-%d %H:%M");
        println!(
            "{:<id_w$}  {:<title_w$}  {:>days_w$}  {}",
            saved.id, saved.title, saved.content.day_count, created,
        );
    }

    Ok(())
}

// -----------------------------------------------------------------------
// studi plan delete <plan-id>
// -----------------------------------------------------------------------

/// Delete a saved plan by id.
fn cmd_delete(store: &Store, plan_id: &str) -> Result<()> {
    let removed = plans::delete_plan(store, plan_id)?;
    if !removed {
        bail!("no saved plan with id {plan_id:?}");
    }

    println!("Plan {plan_id} deleted.");
    Ok(())
}

// -----------------------------------------------------------------------
// studi plan export <plan-id> [--output <file>]
// -----------------------------------------------------------------------

/// Render a saved plan as markdown and write it to a file.
fn cmd_export(store: &Store, plan_id: &str, output: Option<&str>) -> Result<()> {
    let saved = plans::require_plan(store, plan_id)?;
    let document = render_markdown(&saved);

    let path = match output {
        Some(path) => path.to_string(),
        None => default_export_name(&saved.title),
    };
    std::fs::write(&path, &document).with_context(|| format!("failed to write to {path}"))?;

    println!("Plan exported to {path}");
    Ok(())
}

/// Default export file name derived from the plan title.
fn default_export_name(title: &str) -> String {
    format!("{title}.md")
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
