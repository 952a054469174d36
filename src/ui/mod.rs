// UI and formatting module

pub mod formatters;
pub mod prompts;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_core_row, format_governor, format_governor_list};
pub use prompts::{bold, dimmed, error, info, success, warn};
