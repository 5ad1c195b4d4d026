//! `studi tips` command: print strategy tips for the stored profile.

use anyhow::{Result, bail};

use studi_core::tips::strategy_tips;
use studi_store::{Store, profile};

/// Run the tips command.
pub fn run_tips(store: &Store) -> Result<()> {
    let Some(saved) = profile::load_profile(store)? else {
        bail!("no profile saved; run `studi intake --name <you>` first");
    };

    for tip in strategy_tips(&saved) {
        println!("- {tip}");
    }

    Ok(())
}
