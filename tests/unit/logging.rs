use super::*;
use tempfile::tempdir;

#[test]
fn dropping_the_guard_flushes_the_log_file() {
    let dir = tempdir().unwrap();
    let guard = init_at(dir.path().to_path_buf()).unwrap();
    assert_eq!(guard.log_dir(), dir.path());

    tracing::info!(target: "chiplist", revision = 7u64, "exiting");
    drop(guard);

    let contents: String = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().starts_with(LOG_FILE))
        .map(|entry| std::fs::read_to_string(entry.path()).unwrap())
        .collect();
    assert!(contents.contains("tracing initialized"));
    assert!(contents.contains("exiting"));
    assert!(contents.contains("revision=7"));
}
