use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn underscore() -> Command {
    let mut cmd = Command::cargo_bin("underscore").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_command() {
    underscore()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Batch rename files from mixed case to underscore case",
        ));
}

#[test]
fn test_version_command() {
    underscore()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("underscore 0.1.0"));
}

#[test]
fn test_no_color_env_set_to_one() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("MyPhoto.JPG").write_str("jpeg").unwrap();

    Command::cargo_bin("underscore")
        .unwrap()
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .current_dir(temp_dir.path())
        .args(["--status", "."])
        .assert()
        .success()
        .stdout("status: ok\n");
}

#[test]
fn test_no_color_flag_without_env() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("MyPhoto.JPG").write_str("jpeg").unwrap();

    Command::cargo_bin("underscore")
        .unwrap()
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .current_dir(temp_dir.path())
        .args(["--no-color", "--status", "."])
        .assert()
        .success()
        .stdout("status: ok\n");
}

#[test]
fn test_missing_paths_is_usage_error() {
    underscore()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("required arguments"));
}

#[test]
fn test_renames_directory_contents() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("MyPhoto.JPG").write_str("jpeg").unwrap();
    temp_dir.child("Trips/SummerTrip.png").write_str("png").unwrap();

    underscore()
        .current_dir(temp_dir.path())
        .args(["--verbose", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("move: "))
        .stdout(predicate::str::contains("my_photo.JPG"))
        .stdout(predicate::str::contains("✓ Renamed 2 files"));

    temp_dir.child("my_photo.JPG").assert(predicate::path::exists());
    temp_dir.child("MyPhoto.JPG").assert(predicate::path::missing());
    temp_dir
        .child("Trips/summer_trip.png")
        .assert(predicate::path::exists());
}

#[test]
fn test_status_does_not_rename() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("MyPhoto.JPG").write_str("jpeg").unwrap();

    underscore()
        .current_dir(temp_dir.path())
        .args(["--status", "."])
        .assert()
        .success()
        .stdout("status: ok\n");

    temp_dir.child("MyPhoto.JPG").assert(predicate::path::exists());
}

#[test]
fn test_status_fail_hides_details_without_verbose() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("fileOne.txt").write_str("a").unwrap();
    temp_dir.child("file-one.txt").write_str("b").unwrap();

    underscore()
        .current_dir(temp_dir.path())
        .args(["--status", "."])
        .assert()
        .code(1)
        .stdout("status: fail\n");

    underscore()
        .current_dir(temp_dir.path())
        .args(["--status", "--verbose", "."])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("CONFLICTS DESTINATIONS (file exists)"))
        .stdout(predicate::str::contains("file_one.txt"));
}

#[test]
fn test_conflict_blocks_every_rename() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("ProjectNotes.md").write_str("new").unwrap();
    temp_dir.child("project_notes.md").write_str("old").unwrap();
    temp_dir.child("OtherFile.md").write_str("x").unwrap();

    underscore()
        .current_dir(temp_dir.path())
        .args(["--case-sensitive", "."])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("CONFLICTS (file exists)"))
        .stdout(predicate::str::contains("ProjectNotes.md"));

    temp_dir.child("OtherFile.md").assert(predicate::path::exists());
    temp_dir.child("project_notes.md").assert("old");
}

#[test]
fn test_invalid_names_need_force() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("Шапка.txt").write_str("a").unwrap();

    underscore()
        .current_dir(temp_dir.path())
        .arg(".")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("INVALID NAMES (NO SUPPORTED CHARS)"));

    underscore()
        .current_dir(temp_dir.path())
        .args(["--force", "."])
        .assert()
        .success();

    temp_dir.child("shapka.txt").assert(predicate::path::exists());
}

#[test]
fn test_json_output() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("MyPhoto.JPG").write_str("jpeg").unwrap();

    let output = underscore()
        .current_dir(temp_dir.path())
        .args(["--output", "json", "."])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["operation"], "rename");
    assert_eq!(value["summary"]["renamed"], 1);
    assert_eq!(value["report"]["files"][0]["status"], "succeeded");
}

#[test]
fn test_config_file_enables_force() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("Фото.txt").write_str("a").unwrap();
    temp_dir
        .child("settings.toml")
        .write_str("[defaults]\nforce = true\n")
        .unwrap();

    underscore()
        .current_dir(temp_dir.path())
        .args(["--config", "settings.toml", "Фото.txt"])
        .assert()
        .success();

    temp_dir.child("foto.txt").assert(predicate::path::exists());
}

#[test]
fn test_broken_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir
        .child("settings.toml")
        .write_str("[defaults\nforce = ")
        .unwrap();

    underscore()
        .current_dir(temp_dir.path())
        .args(["--config", "settings.toml", "."])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn test_missing_path_is_skipped() {
    let temp_dir = TempDir::new().unwrap();

    underscore()
        .current_dir(temp_dir.path())
        .args(["--status", "nowhere"])
        .assert()
        .success()
        .stdout("status: ok\n");
}
