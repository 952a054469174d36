// Command handlers module
pub mod active;
pub mod completions;
pub mod config;
pub mod cores;
pub mod list;
pub mod set;
pub mod version;

// Re-exports for cleaner imports
pub use active::execute as active;
pub use cores::execute as cores;
pub use list::execute as list;
pub use set::execute as set;
pub use version::execute as version;
