use std::{
    path::Path,
    process::{Command, Output},
};

/// Run the binary in `dir` with a clean Gemini environment.
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scriptgen-cli"))
        .args(args)
        .current_dir(dir)
        .env_remove("GEMINI_API_KEY")
        .env_remove("GEMINI_MODEL")
        .env_remove("SCRIPTGEN_TIMEOUT")
        // nothing listens here, a stray request fails fast
        .env("GEMINI_API_BASE_URL", "http://127.0.0.1:9/v1beta")
        .output()
        .expect("Failed to run scriptgen-cli")
}

#[test]
fn missing_input_file_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_in(dir.path(), &["missing.txt", "--api-key", "dummy"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Meeting notes file not found"), "{stderr}");
    assert!(!dir.path().join("output_script.txt").exists());
}

#[test]
fn unknown_script_type_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "Team Sync Meeting").unwrap();

    let output = run_in(
        dir.path(),
        &["notes.txt", "--api-key", "dummy", "--script-type", "class"],
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(!dir.path().join("output_script.txt").exists());
}

#[test]
fn missing_api_key_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "Team Sync Meeting").unwrap();

    let output = run_in(dir.path(), &["notes.txt"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Authentication failed"), "{stderr}");
    assert!(stderr.contains("GEMINI_API_KEY"), "{stderr}");
    assert!(!dir.path().join("output_script.txt").exists());
}

#[test]
fn unreachable_api_is_a_request_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "Team Sync Meeting").unwrap();

    let output = run_in(dir.path(), &["notes.txt", "--api-key", "dummy"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Request failed"), "{stderr}");
    assert!(!dir.path().join("output_script.txt").exists());
}
