#![cfg(unix)]

use govctl::{CommandExecutor, CpuTopology, GovernorManager, SuExecutor};
use std::cell::RefCell;
use std::fs;
use tempfile::TempDir;

use super::common::{fake_su, spawn_lock, FakeCpuDir};

const GOVERNORS: &str = "ondemand performance powersave";

/// Counts sessions instead of spawning anything
struct CountingExecutor {
    sessions: RefCell<Vec<Vec<String>>>,
}

impl CountingExecutor {
    fn new() -> Self {
        Self {
            sessions: RefCell::new(Vec::new()),
        }
    }
}

impl CommandExecutor for CountingExecutor {
    fn execute_batch(&self, commands: &[String]) -> bool {
        self.sessions.borrow_mut().push(commands.to_vec());
        true
    }
}

#[test]
fn test_applying_active_governor_does_not_elevate() {
    let fake = FakeCpuDir::with_cores("ondemand", &[GOVERNORS; 4]);
    let manager = GovernorManager::new(CpuTopology::new(fake.path()), CountingExecutor::new());

    assert!(manager.apply_governor("ondemand"));
    assert!(manager.executor().sessions.borrow().is_empty());
}

#[test]
fn test_one_session_with_one_write_per_core() {
    let fake = FakeCpuDir::with_cores("ondemand", &[GOVERNORS; 6]);
    let topology = CpuTopology::new(fake.path());
    let manager = GovernorManager::new(topology.clone(), CountingExecutor::new());

    assert!(manager.apply_governor("powersave"));

    let sessions = manager.executor().sessions.borrow();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].len(), 6);
    for (core, command) in sessions[0].iter().enumerate() {
        assert_eq!(
            command,
            &format!(
                "echo 'powersave' > '{}'",
                topology.scaling_governor_path(core).display()
            )
        );
    }
}

#[test]
fn test_unreadable_active_governor_always_applies() {
    let fake = FakeCpuDir::new();
    fake.add_core(0, None, Some(GOVERNORS));
    fake.add_core(1, Some("performance"), Some(GOVERNORS));
    let manager = GovernorManager::new(CpuTopology::new(fake.path()), CountingExecutor::new());

    assert_eq!(manager.get_active_governor(), None);
    assert!(manager.apply_governor("performance"));
    assert_eq!(manager.executor().sessions.borrow().len(), 1);
}

#[test]
fn test_write_then_read_round_trip() {
    let _guard = spawn_lock();
    let fake = FakeCpuDir::with_cores("ondemand", &[GOVERNORS; 3]);
    let manager = GovernorManager::new(
        CpuTopology::new(fake.path()),
        SuExecutor::with_program("/bin/sh"),
    );

    assert!(manager.apply_governor("performance"));

    assert_eq!(manager.get_active_governor().as_deref(), Some("performance"));
    for core in 0..3 {
        assert_eq!(fake.governor_of(core), "performance");
    }
}

#[test]
fn test_cpu_dir_with_spaces_is_written_in_place() {
    let _guard = spawn_lock();
    let fake = FakeCpuDir::named("my cpu");
    fake.add_core(0, Some("ondemand"), Some(GOVERNORS));
    fake.add_core(1, Some("ondemand"), Some(GOVERNORS));
    let manager = GovernorManager::new(
        CpuTopology::new(fake.path()),
        SuExecutor::with_program("/bin/sh"),
    );

    assert!(manager.apply_governor("performance"));

    assert_eq!(manager.get_active_governor().as_deref(), Some("performance"));
    assert_eq!(fake.governor_of(0), "performance");
    assert_eq!(fake.governor_of(1), "performance");
    assert!(!fake.dir.path().join("my").exists());
}

#[test]
fn test_governor_value_is_not_interpreted_by_the_shell() {
    let _guard = spawn_lock();
    let fake = FakeCpuDir::with_cores("ondemand", &[GOVERNORS; 2]);
    let marker = fake.dir.path().join("marker");
    let manager = GovernorManager::new(
        CpuTopology::new(fake.path()),
        SuExecutor::with_program("/bin/sh"),
    );

    let hostile = format!("x; touch {}", marker.display());
    assert!(manager.apply_governor(&hostile));

    assert!(!marker.exists());
    assert_eq!(fake.governor_of(0), hostile);
}

#[test]
fn test_denied_elevation_changes_nothing() {
    let _guard = spawn_lock();
    let fake = FakeCpuDir::with_cores("ondemand", &[GOVERNORS; 2]);
    let helpers = TempDir::new().unwrap();
    let (su, log) = fake_su(helpers.path(), 255);

    let manager = GovernorManager::new(
        CpuTopology::new(fake.path()),
        SuExecutor::with_program(&su),
    );

    assert!(!manager.apply_governor("performance"));
    assert_eq!(fake.governor_of(0), "ondemand");
    assert_eq!(fake.governor_of(1), "ondemand");

    let streamed = fs::read_to_string(&log).unwrap();
    assert_eq!(streamed.lines().count(), 3);
    assert!(streamed.ends_with("exit\n"));
}

#[test]
fn test_noop_does_not_touch_helper() {
    let fake = FakeCpuDir::with_cores("performance", &[GOVERNORS; 2]);
    let helpers = TempDir::new().unwrap();
    let manager = GovernorManager::new(
        CpuTopology::new(fake.path()),
        SuExecutor::with_program(helpers.path().join("missing-su")),
    );

    // The helper does not exist, so any elevation attempt would fail
    assert!(manager.apply_governor("performance"));
}
