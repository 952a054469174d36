// GovernorManager - applies a governor uniformly to every core
use crate::core::topology::CpuTopology;
use crate::platform::CommandExecutor;

pub struct GovernorManager<E: CommandExecutor> {
    topology: CpuTopology,
    executor: E,
}

impl<E: CommandExecutor> GovernorManager<E> {
    pub fn new(topology: CpuTopology, executor: E) -> Self {
        Self { topology, executor }
    }

    pub fn topology(&self) -> &CpuTopology {
        &self.topology
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn list_available_governors(&self) -> Vec<String> {
        self.topology.list_available_governors()
    }

    pub fn get_active_governor(&self) -> Option<String> {
        self.topology.get_active_governor()
    }

    /// One `echo` redirection per core, targeting its `scaling_governor`.
    /// Both the value and the path are single-quoted for the shell.
    pub fn build_write_commands(&self, governor: &str) -> Vec<String> {
        let cores = self.topology.discover_core_count().get();
        (0..cores)
            .map(|core| {
                let path = self.topology.scaling_governor_path(core);
                format!(
                    "echo {} > {}",
                    shell_quote(governor),
                    shell_quote(&path.to_string_lossy())
                )
            })
            .collect()
    }

    /// Sets `governor` on all cores through one elevated session.
    ///
    /// Does not check that `governor` is available; callers pass a value taken
    /// from `list_available_governors`. Returns `true` without elevating when
    /// the governor is already active.
    pub fn apply_governor(&self, governor: &str) -> bool {
        if self.get_active_governor().as_deref() == Some(governor) {
            log::info!("Governor {} already active, nothing to do", governor);
            return true;
        }

        let commands = self.build_write_commands(governor);
        log::info!(
            "Applying governor {} to {} core(s)",
            governor,
            commands.len()
        );
        self.executor.execute_batch(&commands)
    }
}

/// Wraps `value` in single quotes, closing and escaping any embedded quote
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}
