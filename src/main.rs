use anyhow::Result;
use clap::ArgMatches;

use govctl::cli::build_cli;
use govctl::commands;
use govctl::core::Config;
use govctl::ui;

fn main() {
    let matches = build_cli().get_matches();
    govctl::init_logging(matches.get_count("verbose"));

    if let Err(e) = run(&matches) {
        ui::error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("list", sub_matches)) => commands::list(sub_matches, &effective_config(matches)?),
        Some(("active", sub_matches)) => {
            commands::active(sub_matches, &effective_config(matches)?)
        }
        Some(("set", sub_matches)) => commands::set(sub_matches, &effective_config(matches)?),
        Some(("cores", sub_matches)) => commands::cores(sub_matches, &effective_config(matches)?),
        Some(("config", sub_matches)) => commands::config::handle(sub_matches),
        Some(("completions", sub_matches)) => {
            commands::completions::execute(sub_matches, &mut build_cli())
        }
        Some(("version", _)) => commands::version(),
        _ => {
            println!("Use 'govctl --help' for more information.");
            Ok(())
        }
    }
}

/// Stored configuration with the global command-line overrides applied
fn effective_config(matches: &ArgMatches) -> Result<Config> {
    let mut config = Config::load()?;

    if let Some(dir) = matches.get_one::<String>("cpu-dir") {
        config.set_cpu_dir(dir.clone())?;
    }
    if let Some(program) = matches.get_one::<String>("su") {
        config.set_su_binary(program.clone())?;
    }

    Ok(config)
}
