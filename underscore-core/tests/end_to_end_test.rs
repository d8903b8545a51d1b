use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use underscore_core::{rename_operation, MoveOutcome, RenameOptions};

fn options() -> RenameOptions {
    let mut options = RenameOptions::default();
    options.retry.delay = Duration::ZERO;
    options
}

#[test]
fn test_single_photo_is_renamed_with_extension_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();
    fs::write(root.join("MyPhoto.JPG"), "jpeg bytes").unwrap();

    let result = rename_operation(&[root.clone()], &options(), false, None).unwrap();

    assert!(result.is_success());
    let report = result.report.unwrap();
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].source, root.join("MyPhoto.JPG"));
    assert_eq!(report.files[0].destination, root.join("my_photo.JPG"));
    assert_eq!(report.files[0].outcome, MoveOutcome::Succeeded { attempts: 1 });

    let names: Vec<String> = fs::read_dir(&root)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["my_photo.JPG".to_string()]);
    assert_eq!(
        fs::read_to_string(root.join("my_photo.JPG")).unwrap(),
        "jpeg bytes"
    );
}

#[test]
fn test_nested_tree_is_renamed_but_directories_keep_their_names() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();
    fs::create_dir_all(root.join("Holiday Photos/DayOne")).unwrap();
    fs::write(root.join("Holiday Photos/BeachView.png"), "a").unwrap();
    fs::write(root.join("Holiday Photos/DayOne/Sunset-Shot.png"), "b").unwrap();
    fs::write(root.join("Holiday Photos/already_fine.png"), "c").unwrap();

    let result = rename_operation(&[root.clone()], &options(), false, None).unwrap();

    assert!(result.is_success());
    assert_eq!(result.planned, 2);
    assert!(root.join("Holiday Photos/beach_view.png").exists());
    assert!(root.join("Holiday Photos/DayOne/sunset_shot.png").exists());
    assert!(root.join("Holiday Photos/already_fine.png").exists());
}

#[test]
fn test_single_file_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();
    fs::write(root.join("ReportFinal2.pdf"), "pdf").unwrap();
    fs::write(root.join("OtherFile.pdf"), "pdf").unwrap();

    let result = rename_operation(
        &[PathBuf::from("ReportFinal2.pdf")],
        &options(),
        false,
        Some(&root),
    )
    .unwrap();

    assert_eq!(result.renamed(), 1);
    assert!(root.join("report_final2.pdf").exists());
    assert!(root.join("OtherFile.pdf").exists());
}

#[test]
fn test_missing_root_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();

    let result = rename_operation(&[root.join("does-not-exist")], &options(), false, None).unwrap();

    assert!(result.is_success());
    assert_eq!(result.planned, 0);
    assert_eq!(result.renamed(), 0);
}
