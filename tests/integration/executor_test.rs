#![cfg(unix)]

use govctl::{CommandExecutor, SuExecutor};
use std::fs;
use tempfile::TempDir;

use super::common::{deaf_su, fake_su, spawn_lock};

fn commands(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_batch_is_streamed_into_one_session() {
    let _guard = spawn_lock();
    let dir = TempDir::new().unwrap();
    let (su, log) = fake_su(dir.path(), 0);

    let executor = SuExecutor::with_program(&su);
    assert!(executor.execute_batch(&commands(&["echo a > /x", "echo b > /y", "echo c > /z"])));

    assert_eq!(
        fs::read_to_string(&log).unwrap(),
        "echo a > /x\necho b > /y\necho c > /z\nexit\n"
    );
}

#[test]
fn test_denied_exit_code_is_failure() {
    let _guard = spawn_lock();
    let dir = TempDir::new().unwrap();
    let (su, _log) = fake_su(dir.path(), 255);

    let executor = SuExecutor::with_program(&su);
    assert!(!executor.execute_batch(&commands(&["echo performance > /x"])));
}

#[test]
fn test_other_exit_codes_are_success() {
    let _guard = spawn_lock();
    let dir = TempDir::new().unwrap();

    for code in [0, 1, 2, 127, 254] {
        let (su, _log) = fake_su(dir.path(), code);
        let executor = SuExecutor::with_program(&su);
        assert!(
            executor.execute_batch(&commands(&["echo performance > /x"])),
            "exit code {} should count as success",
            code
        );
    }
}

#[test]
fn test_custom_denied_exit_code() {
    let _guard = spawn_lock();
    let dir = TempDir::new().unwrap();
    let (denied, _) = fake_su(dir.path(), 1);
    let (granted, _) = fake_su(dir.path(), 255);

    let batch = commands(&["true"]);
    assert!(!SuExecutor::with_program(&denied).denied_exit_code(1).execute_batch(&batch));
    assert!(SuExecutor::with_program(&granted).denied_exit_code(1).execute_batch(&batch));
}

#[test]
fn test_empty_batch_never_spawns() {
    let _guard = spawn_lock();
    let dir = TempDir::new().unwrap();
    let (su, log) = fake_su(dir.path(), 0);

    let executor = SuExecutor::with_program(&su);
    assert!(!executor.execute_batch(&[]));
    assert!(!log.exists());
}

#[test]
fn test_execute_single() {
    let _guard = spawn_lock();
    let dir = TempDir::new().unwrap();
    let (su, log) = fake_su(dir.path(), 0);

    let executor = SuExecutor::with_program(&su);
    assert!(executor.execute_single("echo powersave > /x"));
    assert_eq!(fs::read_to_string(&log).unwrap(), "echo powersave > /x\nexit\n");
}

#[test]
fn test_commands_run_in_the_spawned_shell() {
    let _guard = spawn_lock();
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first");
    let second = dir.path().join("second");

    // A plain shell stands in for an elevation helper that already granted root
    let executor = SuExecutor::with_program("/bin/sh");
    let batch = vec![
        format!("echo one > {}", first.display()),
        format!("echo two > {}", second.display()),
    ];
    assert!(executor.execute_batch(&batch));

    assert_eq!(fs::read_to_string(&first).unwrap(), "one\n");
    assert_eq!(fs::read_to_string(&second).unwrap(), "two\n");
}

#[test]
fn test_helper_that_stops_reading_is_failure() {
    let _guard = spawn_lock();
    let dir = TempDir::new().unwrap();
    let su = deaf_su(dir.path(), 0);

    // Larger than a pipe buffer, so writing outlives the helper
    let batch: Vec<String> = (0..8192)
        .map(|i| format!("echo performance > /tmp/unused-{:08}", i))
        .collect();

    let executor = SuExecutor::with_program(&su);
    assert!(!executor.execute_batch(&batch));
}

#[test]
fn test_missing_helper_is_failure() {
    let dir = TempDir::new().unwrap();
    let executor = SuExecutor::with_program(dir.path().join("no-such-su"));
    assert!(!executor.execute_batch(&commands(&["true"])));
}
