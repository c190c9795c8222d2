use contacts_core::{init_logging, logging_status};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().expect("create temp log dir");
    let other_dir = tempfile::tempdir().expect("create second temp log dir");
    let log_dir_str = log_dir.path().to_str().expect("utf-8 temp dir").to_string();
    let other_dir_str = other_dir
        .path()
        .to_str()
        .expect("utf-8 temp dir")
        .to_string();

    assert!(logging_status().is_none());

    init_logging("info", &log_dir_str).expect("first init should succeed");
    init_logging("INFO", &log_dir_str).expect("same config should be idempotent");

    let level_error = init_logging("debug", &log_dir_str).expect_err("level conflict");
    assert!(level_error.contains("refusing to switch"));

    let dir_error = init_logging("info", &other_dir_str).expect_err("directory conflict");
    assert!(dir_error.contains("refusing to switch"));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(dir, log_dir.path());
}
