// Command-line definition
use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("govctl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Change the CPU frequency-scaling governor on all cores")
        .disable_version_flag(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log output (-v info, -vv debug)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("cpu-dir")
                .long("cpu-dir")
                .value_name("DIR")
                .help("Directory containing the cpuN device nodes")
                .global(true),
        )
        .arg(
            Arg::new("su")
                .long("su")
                .value_name("PROGRAM")
                .help("Elevation helper used to write the governor")
                .global(true),
        )
        .subcommand(
            Command::new("list")
                .about("List governors available on every core")
                .arg(json_flag()),
        )
        .subcommand(Command::new("active").about("Print the governor active on cpu0"))
        .subcommand(
            Command::new("set")
                .about("Apply a governor to every core")
                .arg(
                    Arg::new("governor")
                        .value_name("GOVERNOR")
                        .help("Governor to apply, as printed by 'govctl list'")
                        .required(true),
                )
                .arg(
                    Arg::new("force")
                        .short('f')
                        .long("force")
                        .help("Apply even if the governor is not listed by every core")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("cores")
                .about("Show core count and per-core governors")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("config")
                .about("Manage configuration (use 'govctl config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("show").about("Show the effective configuration"))
                .subcommand(
                    Command::new("set-su")
                        .about("Set the elevation helper")
                        .arg(Arg::new("program").value_name("PROGRAM").required(true)),
                )
                .subcommand(
                    Command::new("set-cpu-dir")
                        .about("Set the cpu device directory")
                        .arg(Arg::new("path").value_name("DIR").required(true)),
                )
                .subcommand(
                    Command::new("set-denied-code")
                        .about("Set the exit status meaning elevation was refused")
                        .arg(
                            Arg::new("code")
                                .value_name("CODE")
                                .required(true)
                                .value_parser(value_parser!(i32)),
                        ),
                )
                .subcommand(Command::new("reset").about("Restore default configuration")),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("bash, zsh, fish, powershell or elvish")
                        .required(true),
                ),
        )
        .subcommand(Command::new("version").about("Show version information"))
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Print machine-readable JSON")
        .action(ArgAction::SetTrue)
}
