use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::{Config, GovernorManager};
use crate::error::GovError;
use crate::ui;

pub fn execute(matches: &ArgMatches, config: &Config) -> Result<()> {
    let governor = matches
        .get_one::<String>("governor")
        .context("Governor argument is required")?;
    let force = matches.get_flag("force");

    let manager = GovernorManager::new(config.topology(), config.executor());

    if force {
        ui::dimmed("Skipping availability check (--force)");
    } else {
        check_selectable(governor, &manager.list_available_governors())?;
    }

    let previous = manager.get_active_governor();
    if !manager.apply_governor(governor) {
        return Err(GovError::elevation_failed("Failed getting root! Didn't change anything.").into());
    }

    if previous.as_deref() == Some(governor.as_str()) {
        ui::info(&format!("{} is already the active governor.", governor));
        return Ok(());
    }

    ui::success(&format!("Successfully changed the governor to: {}!", governor));

    // The batch reports success even when a single write fails inside it.
    let now = manager.get_active_governor();
    if now.as_deref() != Some(governor.as_str()) {
        ui::warn(&format!(
            "cpu0 still reports {}",
            ui::format_governor(now.as_deref())
        ));
    }

    Ok(())
}

/// Accepts only governors offered by every core
pub fn check_selectable(governor: &str, available: &[String]) -> crate::Result<()> {
    if available.is_empty() {
        return Err(GovError::invalid_governor(format!(
            "'{}' cannot be selected, no governor is available on all cores",
            governor
        )));
    }

    if !available.iter().any(|candidate| candidate == governor) {
        return Err(GovError::invalid_governor(format!(
            "'{}' is not available on all cores (available: {})",
            governor,
            available.join(", ")
        )));
    }

    Ok(())
}
