use anyhow::Result;
use clap::ArgMatches;

use crate::core::Config;
use crate::ui;

pub fn execute(_matches: &ArgMatches, config: &Config) -> Result<()> {
    let topology = config.topology();

    match topology.get_active_governor() {
        Some(governor) => {
            println!("{}", governor);
            Ok(())
        }
        None => {
            ui::warn(&unreadable_message(&topology));
            std::process::exit(1);
        }
    }
}

fn unreadable_message(topology: &crate::core::CpuTopology) -> String {
    format!(
        "Could not read the active governor from {}",
        topology.scaling_governor_path(0).display()
    )
}
