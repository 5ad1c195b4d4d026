//! `studi generate` command: build a plan from the stored profile and persist
//! it as the current plan.

use anyhow::{Context, Result, bail};

use studi_core::plan::{generate, render_text};
use studi_store::{Store, plans, profile};

/// Run the generate command.
pub fn run_generate(store: &Store, days: u32) -> Result<()> {
    let Some(saved) = profile::load_profile(store)? else {
        bail!("no profile saved; run `studi intake --name <you>` first");
    };

    let plan = generate(&saved, days)
        .with_context(|| format!("cannot generate a {days}-day plan"))?;
    plans::save_current_plan(store, &plan)?;

    print!("{}", render_text(&plan));
    println!();
    println!("Saved as the current plan. Use `studi plan save` to keep it.");

    Ok(())
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
