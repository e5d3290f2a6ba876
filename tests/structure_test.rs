use import_project::error::Error;
use import_project::structure::setup_project_structure;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn make_skeleton(root: &Path) {
    fs::create_dir_all(root.join("src/nested")).unwrap();
    fs::create_dir_all(root.join("empty")).unwrap();
    fs::write(root.join("README.md"), "# ${NAME}\n").unwrap();
    fs::write(root.join("src/main.txt"), "main").unwrap();
    fs::write(root.join("src/nested/data.bin"), [0u8, 159, 146, 150]).unwrap();
}

#[test_log::test]
fn test_copy_into_new_destination() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("skeleton");
    let destination = temp_dir.path().join("project");
    make_skeleton(&source);

    let summary = setup_project_structure(&source, &destination).unwrap();

    assert!(!dir_diff::is_different(&source, &destination).unwrap());
    assert_eq!(summary.files, 3);
    // root, src, src/nested, empty
    assert_eq!(summary.directories, 4);
    assert!(destination.join("empty").is_dir());
}

#[test]
fn test_existing_destination_is_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("skeleton");
    let destination = temp_dir.path().join("project");
    make_skeleton(&source);
    fs::create_dir_all(destination.join("stale")).unwrap();
    fs::write(destination.join("stale/old.txt"), "old").unwrap();
    fs::write(destination.join("README.md"), "overwritten").unwrap();

    setup_project_structure(&source, &destination).unwrap();

    assert!(!dir_diff::is_different(&source, &destination).unwrap());
    assert!(!destination.join("stale").exists());
}

#[test]
fn test_file_at_destination_is_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("skeleton");
    let destination = temp_dir.path().join("project");
    make_skeleton(&source);
    fs::write(&destination, "not a directory").unwrap();

    setup_project_structure(&source, &destination).unwrap();

    assert!(destination.is_dir());
    assert!(!dir_diff::is_different(&source, &destination).unwrap());
}

#[test]
fn test_missing_source() {
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("project");
    fs::create_dir(&destination).unwrap();

    let err = setup_project_structure(temp_dir.path().join("absent"), &destination).unwrap_err();

    assert!(matches!(err, Error::SourceDirMissing { .. }));
    assert_eq!(err.exit_code(), 2);
    assert!(destination.exists());
}

#[test]
fn test_destination_inside_source_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("skeleton");
    make_skeleton(&source);

    let err = setup_project_structure(&source, source.join("src")).unwrap_err();
    assert!(matches!(err, Error::InvalidDestination { .. }));

    let err = setup_project_structure(&source, &source).unwrap_err();
    assert!(matches!(err, Error::InvalidDestination { .. }));
    assert!(source.join("src/main.txt").exists());
}

#[test]
fn test_destination_reaching_source_through_parent_dir() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("skeleton");
    make_skeleton(&source);

    let destination = temp_dir.path().join("missing").join("..").join("skeleton");
    let err = setup_project_structure(&source, &destination).unwrap_err();

    assert!(matches!(err, Error::InvalidDestination { .. }));
    assert_eq!(fs::read_to_string(source.join("src/main.txt")).unwrap(), "main");
    assert!(!temp_dir.path().join("missing").exists());
}

#[test]
fn test_destination_with_parent_dir_outside_source() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("skeleton");
    make_skeleton(&source);

    let destination = temp_dir.path().join("skeleton").join("..").join("project");
    setup_project_structure(&source, &destination).unwrap();

    assert!(!dir_diff::is_different(&source, temp_dir.path().join("project")).unwrap());
}
