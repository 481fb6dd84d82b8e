use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mapsketch_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mapsketch").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn mapsketch_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    mapsketch_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive map sketching"))
        .stdout(predicate::str::contains("--script"));
}

#[test]
fn version_includes_build_hash() {
    let temp = TempDir::new().unwrap();
    mapsketch_cmd(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("mapsketch 0.1.0 ("))
        .stdout(predicate::str::contains(")"));
}

#[test]
fn scripted_polygon_is_committed() {
    let temp = TempDir::new().unwrap();
    mapsketch_cmd(&temp)
        .write_stdin("4\nat 0 0\nat 10 0\nat 10 10\nReturn\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current selection: Polygon"))
        .stdout(predicate::str::contains(
            "[No mode] [Undo off] [Redo off] [Graphics 1]  Added graphic to map",
        ))
        .stdout(predicate::str::contains(
            "1. Polygon (3 vertices, 1 part) drawn with fill symbol",
        ));
}

#[test]
fn user_errors_do_not_abort_the_session() {
    let temp = TempDir::new().unwrap();
    mapsketch_cmd(&temp)
        .write_stdin("frobnicate now\nReturn\n3\nat 0 0\nReturn\nCtrl+Q\nfrobnicate again\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("error: Key 'Frobnicate now' is not bound"))
        .stdout(predicate::str::contains("error: No geometry to add"))
        .stdout(predicate::str::contains(
            "error: Polyline is invalid: each line needs at least two vertices",
        ))
        .stdout(predicate::str::contains("Frobnicate again").not());
}

#[test]
fn start_mode_flag_and_script_file() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("sketch.txt");
    std::fs::write(&script, "# freehand line\ntrace 0,0 5,5 10,0\nReturn\n").unwrap();

    mapsketch_cmd(&temp)
        .args(["--mode", "freehand-polyline", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("[Graphics 1]  Added graphic to map"));
}

#[test]
fn invalid_mode_is_rejected() {
    let temp = TempDir::new().unwrap();
    mapsketch_cmd(&temp)
        .args(["--mode", "circle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown draw mode 'circle'"));
}

#[test]
fn status_line_can_be_disabled_by_config() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[ui]\nshow_status_bar = false\n").unwrap();

    mapsketch_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .write_stdin("1\nat 2 2\nReturn\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn init_config_writes_default_file_once() {
    let temp = TempDir::new().unwrap();
    mapsketch_cmd(&temp)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    let written = temp.path().join("mapsketch").join("config.toml");
    assert!(written.exists());

    mapsketch_cmd(&temp)
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file already exists"));
}

#[test]
fn broken_config_fails_with_context() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("mapsketch");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[keybindings]\nundo = [\"Return\"]\n").unwrap();

    mapsketch_cmd(&temp)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate keybinding"));
}
