use crate::core::Config;
use anyhow::{Context, Result};
use colored::Colorize;

pub fn handle(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("show", _)) => show(),
        Some(("set-su", sub_matches)) => {
            let program = required(sub_matches, "program")?;
            update(|config| config.set_su_binary(program))
        }
        Some(("set-cpu-dir", sub_matches)) => {
            let path = required(sub_matches, "path")?;
            if !std::path::Path::new(&path).is_dir() {
                println!(
                    "{}",
                    format!("⚠️  Warning: '{}' is not a directory", path).yellow()
                );
            }
            update(|config| config.set_cpu_dir(path))
        }
        Some(("set-denied-code", sub_matches)) => {
            let code = *sub_matches
                .get_one::<i32>("code")
                .context("Code argument is required")?;
            update(|config| config.set_denied_exit_code(code))
        }
        Some(("reset", _)) => {
            Config::default().save()?;
            println!("{}", "✓ Configuration reset to defaults".green());
            Ok(())
        }
        _ => {
            println!("Use 'govctl config --help' for more information.");
            Ok(())
        }
    }
}

fn required(matches: &clap::ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("{} argument is required", name))
}

fn update<F>(apply: F) -> Result<()>
where
    F: FnOnce(&mut Config) -> crate::Result<()>,
{
    let mut config = Config::load()?;
    apply(&mut config)?;
    config.save()?;
    println!("{}", "✓ Configuration saved".green());
    show_config(&config);
    Ok(())
}

fn show() -> Result<()> {
    let config = Config::load()?;
    println!(
        "{} {}",
        "Config file:".dimmed(),
        Config::get_config_path()?.display().to_string().dimmed()
    );
    show_config(&config);
    Ok(())
}

fn show_config(config: &Config) {
    println!("{:<18} {}", "cpu directory:".white(), config.cpu_dir().cyan());
    println!("{:<18} {}", "su binary:".white(), config.su_binary().cyan());
    println!(
        "{:<18} {}",
        "denied exit code:".white(),
        config.denied_exit_code().to_string().cyan()
    );
}
