// Platform-specific code module

pub mod elevation;
pub mod fs;

// Re-exports for cleaner imports
pub use elevation::{is_elevated, CommandExecutor, SuExecutor};
pub use fs::{list_entry_names, read_first_line};
