//! Library file round-trip tests.

use dms_model::{InfoVariant, ModulePatch};
use dms_persistence::{Library, PersistenceError, load_library, save_library};
use dms_workbench::PersistenceGateway;

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("workspace.dml.json");

    let mut library = Library::new();
    let outcome = library.ingest_text("engine.txt", "Check the engine.", None);
    save_library(&library, &path).expect("save");

    let loaded = load_library(&path).expect("load");
    assert_eq!(loaded.documents().len(), 1);
    assert_eq!(loaded.modules().len(), 2);
    let record = loaded.module(&outcome.verbatim).expect("verbatim record");
    assert_eq!(record.content, "Check the engine.");
}

#[test]
fn saved_patch_survives_a_reload() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("workspace.dml.json");

    let mut library = Library::new();
    let outcome = library.ingest_text("engine.txt", "orig", None);
    library
        .update_data_module(
            &outcome.verbatim,
            ModulePatch {
                content: Some("Engine check OK".to_string()),
                xml_content: Some("<dataModule/>".to_string()),
            },
        )
        .expect("patch");
    save_library(&library, &path).expect("save");

    let loaded = load_library(&path).expect("load");
    let record = loaded.module(&outcome.verbatim).expect("record");
    assert_eq!(record.content, "Engine check OK");
    assert_eq!(record.xml_content, "<dataModule/>");
    // The untouched simplified record is still its stub.
    let simplified = loaded.module(&outcome.simplified).expect("record");
    assert_eq!(simplified.content, "");
    assert_eq!(simplified.info_variant, InfoVariant::Simplified);
}

#[test]
fn loading_garbage_reports_invalid_format() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.dml.json");
    std::fs::write(&path, b"not json").expect("write");
    let error = load_library(&path).expect_err("invalid file");
    assert!(matches!(error, PersistenceError::InvalidFormat { .. }));
}

#[test]
fn loading_a_newer_schema_is_refused() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("future.dml.json");
    std::fs::write(
        &path,
        br#"{"schema_version": 99, "documents": [], "data_modules": []}"#,
    )
    .expect("write");
    let error = load_library(&path).expect_err("future schema");
    assert!(matches!(
        error,
        PersistenceError::UnsupportedVersion { found: 99, .. }
    ));
}

#[test]
fn loading_a_missing_file_reports_the_path() {
    let error = load_library(std::path::Path::new("/nonexistent/x.dml.json"))
        .expect_err("missing file");
    let message = error.to_string();
    assert!(message.contains("x.dml.json"), "message: {message}");
}
