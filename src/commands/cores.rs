use anyhow::Result;
use clap::ArgMatches;
use serde::Serialize;

use crate::core::{Config, CoreGovernors};
use crate::platform::is_elevated;
use crate::ui;

#[derive(Serialize)]
struct CoreReport {
    cpu_dir: String,
    core_count: usize,
    core_count_assumed: bool,
    running_as_root: bool,
    cores: Vec<CoreGovernors>,
}

pub fn execute(matches: &ArgMatches, config: &Config) -> Result<()> {
    let topology = config.topology();
    let count = topology.discover_core_count();

    let report = CoreReport {
        cpu_dir: topology.cpu_dir().display().to_string(),
        core_count: count.get(),
        core_count_assumed: count.is_assumed(),
        running_as_root: is_elevated(),
        cores: topology.core_governors(),
    };

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    ui::bold(&format!("Cores: {}", count));
    ui::dimmed(&format!("Device directory: {}", report.cpu_dir));
    if report.running_as_root {
        ui::dimmed("Running as root");
    }
    println!();

    println!("{:<6} {:<14} {}", "CORE", "ACTIVE", "AVAILABLE");
    for core in &report.cores {
        println!("{}", ui::format_core_row(core));
    }

    Ok(())
}
