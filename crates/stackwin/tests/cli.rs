use std::path::PathBuf;
use std::process::Command;

/// Runs the binary with `HOME` pointed at an empty scratch directory so a
/// user's own config can't change the output.
fn stackwin(home: &str) -> Command {
    let dir = std::env::temp_dir().join(format!("stackwin-cli-{home}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("failed to create scratch home");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stackwin"));
    cmd.env("HOME", &dir);
    cmd
}

fn scratch_home(home: &str) -> PathBuf {
    std::env::temp_dir().join(format!("stackwin-cli-{home}-{}", std::process::id()))
}

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = stackwin("help");
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute stackwin");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("stacked window manager"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = stackwin("version");
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute stackwin");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("stackwin"));
}

#[test]
fn place_prints_json_positions() {
    // Arrange
    let mut cmd = stackwin("place-json");
    cmd.args([
        "place",
        "--screen",
        "80x24",
        "--window",
        "10x5",
        "--window",
        "18x8:centered",
        "--json",
    ]);

    // Act
    let output = cmd.output().expect("failed to execute stackwin");

    // Assert
    assert!(output.status.success());
    let placed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(placed[0]["top_left"]["column"], 2);
    assert_eq!(placed[0]["top_left"]["row"], 1);
    assert_eq!(placed[0]["size"]["columns"], 12);
    assert_eq!(placed[0]["size"]["rows"], 7);
    assert_eq!(placed[1]["hints"][0], "centered");
    assert_eq!(placed[1]["top_left"]["column"], 30);
    assert_eq!(placed[1]["top_left"]["row"], 7);
}

#[test]
fn place_prints_table() {
    // Arrange
    let mut cmd = stackwin("place-table");
    cmd.args(["place", "--window", "10x5", "--window", "10x5:cascade"]);

    // Act
    let output = cmd.output().expect("failed to execute stackwin");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 windows on a 80x24 screen, active: #1"));
}

#[test]
fn place_handles_huge_unresized_window() {
    // Arrange
    let mut cmd = stackwin("place-huge");
    cmd.args(["place", "--window", "2147483647x5:no-resize", "--json"]);

    // Act
    let output = cmd.output().expect("failed to execute stackwin");

    // Assert
    assert!(output.status.success());
    let placed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(placed[0]["size"]["columns"], i64::from(i32::MAX));
    assert_eq!(placed[0]["size"]["rows"], 7);
}

#[test]
fn place_rejects_unknown_hint() {
    // Arrange
    let mut cmd = stackwin("place-bad-hint");
    cmd.args(["place", "--window", "10x5:floating"]);

    // Act
    let output = cmd.output().expect("failed to execute stackwin");

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown hint 'floating'"));
}

#[test]
fn init_then_config_uses_written_file() {
    // Arrange
    let mut init = stackwin("init");
    let home = scratch_home("init");

    // Act
    let created = init.arg("init").output().expect("failed to execute stackwin");
    let config = Command::new(env!("CARGO_BIN_EXE_stackwin"))
        .env("HOME", &home)
        .arg("config")
        .output()
        .expect("failed to execute stackwin");

    // Assert
    assert!(created.status.success());
    assert!(home.join(".config/stackwin/config.toml").exists());
    assert!(config.status.success());
    let stdout = String::from_utf8_lossy(&config.stdout);
    assert!(stdout.contains("[cascade]"));
    assert!(stdout.contains("shift_right = 2"));
}

#[test]
fn config_respects_user_overrides() {
    // Arrange
    let mut cmd = stackwin("override");
    let dir = scratch_home("override").join(".config").join("stackwin");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[cascade]\norigin_column = 10\n").unwrap();
    cmd.args(["place", "--window", "10x5", "--json"]);

    // Act
    let output = cmd.output().expect("failed to execute stackwin");

    // Assert
    assert!(output.status.success());
    let placed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(placed[0]["top_left"]["column"], 10);
    assert_eq!(placed[0]["top_left"]["row"], 1);
}
