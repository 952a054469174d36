// govctl Library - Public API

// Re-export error types
pub mod error;
pub use error::{GovError, Result};

// Module declarations
pub mod cli;
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::Config;
pub use crate::core::governor::GovernorManager;
pub use crate::core::topology::CpuTopology;
pub use platform::elevation::{CommandExecutor, SuExecutor};

/// Initialize logging. `verbosity` is the number of `-v` flags given.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
