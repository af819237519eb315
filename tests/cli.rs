use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn boopadoop_cmd() -> Command {
    Command::cargo_bin("boopadoop").expect("binary exists")
}

fn write_script(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("script.json");
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn boopadoop_help_prints_usage() {
    boopadoop_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Raster sketchpad with undoable strokes, stickers and PNG export",
        ));
}

#[test]
fn long_version_includes_commit_hash() {
    boopadoop_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::is_match(r"\(([0-9a-f]+|unknown)\)").unwrap());
}

#[test]
fn play_writes_png_to_output() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        &temp,
        r#"{"width": 32, "height": 16, "events": [
            {"type": "pointer_down", "x": 2, "y": 2},
            {"type": "pointer_move", "x": 20, "y": 10},
            {"type": "pointer_up", "x": 30, "y": 14}
        ]}"#,
    );
    let output = temp.path().join("out").join("drawing.png");

    boopadoop_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("play")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .args(["--scale", "2", "--unpaced"])
        .assert()
        .success()
        .stdout(predicate::str::contains("drawing.png"));

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    assert_eq!(width, 64);
}

#[test]
fn play_writes_numbered_snapshots() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        &temp,
        r#"{"width": 8, "height": 8, "events": [
            {"type": "export"},
            {"type": "key_press", "key": "Ctrl"},
            {"type": "key_press", "key": "s"},
            {"type": "key_release", "key": "Ctrl"}
        ]}"#,
    );
    let output = temp.path().join("sketch.png");

    boopadoop_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("play")
        .arg(&script)
        .arg("-o")
        .arg(&output)
        .arg("--unpaced")
        .assert()
        .success();

    assert!(output.exists());
    assert!(temp.path().join("sketch-1.png").exists());
    assert!(temp.path().join("sketch-2.png").exists());
}

#[test]
fn play_uses_config_from_flag() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(
        &config,
        format!(
            "[export]\nsave_directory = \"{}\"\nfilename_template = \"fixed\"\nscale = 1\n",
            temp.path().join("exports").display()
        ),
    )
    .unwrap();
    let script = write_script(&temp, r#"{"width": 4, "height": 4, "events": []}"#);

    boopadoop_cmd()
        .arg("play")
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .arg("--unpaced")
        .assert()
        .success();

    assert!(temp.path().join("exports").join("fixed.png").exists());
}

#[test]
fn invalid_script_fails() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, r#"{"events": [{"type": "teleport"}]}"#);

    boopadoop_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("play")
        .arg(&script)
        .arg("-o")
        .arg(temp.path().join("never.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid script"));
}

#[test]
fn scale_out_of_range_is_rejected() {
    boopadoop_cmd()
        .args(["play", "script.json", "--scale", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--scale"));
}

#[test]
fn init_config_writes_example_once() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("boopadoop.toml");

    boopadoop_cmd()
        .arg("--init-config")
        .arg("--config")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote example config"));
    assert!(
        std::fs::read_to_string(&target)
            .unwrap()
            .contains("[keybindings]")
    );

    boopadoop_cmd()
        .arg("--init-config")
        .arg("--config")
        .arg(&target)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn schema_dump_is_json() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"stickers\""));
}
