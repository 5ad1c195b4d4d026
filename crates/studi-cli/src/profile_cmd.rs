//! `studi profile` command: show the stored profile.

use anyhow::Result;

use studi_store::{Store, profile};

/// Run the profile command.
pub fn run_profile(store: &Store) -> Result<()> {
    let Some(saved) = profile::load_profile(store)? else {
        println!("No profile saved. Use `studi intake --name <you>` to create one.");
        return Ok(());
    };

    println!("Profile");
    println!("  Name:   {}", saved.name);
    println!("  Goal:   {}", saved.goal);
    println!("  Style:  {}", saved.style);
    println!("  Hours:  {}/week", saved.hours);
    println!(
        "  Saved:  {}",
        saved.saved_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    Ok(())
}
