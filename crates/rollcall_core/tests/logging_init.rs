use rollcall_core::{init_logging, logging_status};

#[test]
fn init_logging_is_idempotent_for_same_config_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().unwrap();
    let log_dir_str = log_dir.path().to_str().unwrap().to_string();
    let second_dir = tempfile::tempdir().unwrap();
    let second_dir_str = second_dir.path().to_str().unwrap().to_string();

    init_logging("info", &log_dir_str).expect("first init should succeed");
    init_logging("INFO", &log_dir_str).expect("same config should be idempotent");

    let level_error = init_logging("debug", &log_dir_str).expect_err("level conflict should fail");
    assert!(level_error.contains("refusing to switch"));

    let dir_error =
        init_logging("info", &second_dir_str).expect_err("directory conflict should fail");
    assert!(dir_error.contains("refusing to switch"));

    let (active_level, active_dir) = logging_status().expect("logging should be active");
    assert_eq!(active_level, "info");
    assert_eq!(active_dir, log_dir.path());
}

#[test]
fn init_logging_rejects_bad_inputs_without_panicking() {
    assert!(init_logging("loud", "/tmp").unwrap_err().contains("unsupported"));
    assert!(init_logging("info", "relative/dir")
        .unwrap_err()
        .contains("absolute"));
    assert!(init_logging("info", "  ").unwrap_err().contains("empty"));
}
