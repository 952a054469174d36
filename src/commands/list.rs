use anyhow::Result;
use clap::ArgMatches;
use serde::Serialize;

use crate::core::Config;
use crate::ui;

#[derive(Serialize)]
struct GovernorListing {
    active: Option<String>,
    available: Vec<String>,
}

pub fn execute(matches: &ArgMatches, config: &Config) -> Result<()> {
    let topology = config.topology();
    let listing = GovernorListing {
        active: topology.get_active_governor(),
        available: topology.list_available_governors(),
    };

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    if listing.available.is_empty() {
        ui::warn("No governor is available on all cores.");
        return Ok(());
    }

    ui::bold("Available governors:");
    for line in ui::format_governor_list(&listing.available, listing.active.as_deref()) {
        println!("  {}", line);
    }

    if listing.active.is_none() {
        ui::dimmed("The active governor could not be read.");
    }

    Ok(())
}
