// Core business logic module

pub mod config;
pub mod governor;
pub mod topology;

// Re-export commonly used items
pub use config::Config;
pub use governor::GovernorManager;
pub use topology::{CoreCount, CoreGovernors, CpuTopology, FallbackReason};
