use std::fs;
use std::path::Path;
use std::sync::Arc;

use cartable::application::services::UploadService;
use cartable::domain::SourcePdf;
use cartable::infrastructure::persistence::MockContentRepository;
use cartable::infrastructure::storage::MockObjectStorage;
use cartable::infrastructure::text_processing::MockTextExtractor;

const EXTRACTED: &str = "--- Page 1 ---\nLe droit constitutionnel est la branche du droit public.";

fn write_pdf(root: &Path, relative: &str) -> SourcePdf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("fixture path has a parent"))
        .expect("create fixture folders");
    fs::write(&path, b"%PDF-1.4 fixture").expect("write fixture pdf");
    SourcePdf::new(path)
}

#[tokio::test]
async fn given_valid_documents_when_running_batch_then_all_are_uploaded_and_indexed() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let root = dir.path();
    let files = vec![
        write_pdf(
            root,
            "1. Intro au droit public et droit constitutionnel/Fascicule Complet 2024.pdf",
        ),
        write_pdf(root, "18. TGLF/poly.pdf"),
    ];

    let storage = Arc::new(MockObjectStorage::new());
    let repository = Arc::new(MockContentRepository::new());
    let service = UploadService::new(
        Arc::new(MockTextExtractor::returning(EXTRACTED)),
        storage.clone(),
        repository.clone(),
    );

    let summary = service.run(root, &files).await;

    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed, 0);
    assert!(!summary.any_failed());

    let keys = storage.uploaded_keys();
    assert!(keys.contains(&"l1-droit-constitutionnel-fascicule-complet-2024.pdf".to_string()));
    assert!(keys.contains(&"crfpa-tglf.pdf".to_string()));

    assert_eq!(
        repository.content_of("l1-droit-constitutionnel-fascicule-complet-2024"),
        Some(EXTRACTED.to_string())
    );
    assert_eq!(repository.row_count(), 2);
}

#[tokio::test]
async fn given_document_without_text_when_running_batch_then_it_fails_without_side_effects() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let root = dir.path();
    let files = vec![write_pdf(root, "18. TGLF/scan-only.pdf")];

    let storage = Arc::new(MockObjectStorage::new());
    let repository = Arc::new(MockContentRepository::new());
    let service = UploadService::new(
        Arc::new(MockTextExtractor::empty()),
        storage.clone(),
        repository.clone(),
    );

    let summary = service.run(root, &files).await;

    assert_eq!(summary.succeeded, 0);
    assert_eq!(summary.failed, 1);
    assert!(storage.uploaded_keys().is_empty());
    assert_eq!(repository.row_count(), 0);
}

#[tokio::test]
async fn given_storage_failure_when_running_batch_then_content_is_still_saved() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let root = dir.path();
    let files = vec![write_pdf(
        root,
        "1. Intro au droit public et droit constitutionnel/Fascicule Complet 2024.pdf",
    )];

    let repository = Arc::new(MockContentRepository::new());
    let service = UploadService::new(
        Arc::new(MockTextExtractor::returning(EXTRACTED)),
        Arc::new(MockObjectStorage::failing()),
        repository.clone(),
    );

    let summary = service.run(root, &files).await;

    assert_eq!(summary.failed, 1);
    assert_eq!(
        repository.content_of("l1-droit-constitutionnel-fascicule-complet-2024"),
        Some(EXTRACTED.to_string())
    );
}

#[tokio::test]
async fn given_database_failure_when_running_batch_then_upload_still_happens() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let root = dir.path();
    let files = vec![write_pdf(root, "18. TGLF/poly.pdf")];

    let storage = Arc::new(MockObjectStorage::new());
    let service = UploadService::new(
        Arc::new(MockTextExtractor::returning(EXTRACTED)),
        storage.clone(),
        Arc::new(MockContentRepository::failing()),
    );

    let summary = service.run(root, &files).await;

    assert_eq!(summary.failed, 1);
    assert_eq!(storage.uploaded_keys(), vec!["crfpa-tglf.pdf".to_string()]);
}

#[tokio::test]
async fn given_existing_row_when_running_batch_then_content_is_updated_not_duplicated() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let root = dir.path();
    let files = vec![write_pdf(root, "18. TGLF/poly.pdf")];

    let repository = Arc::new(MockContentRepository::seeded("crfpa-tglf", "stale content"));
    let service = UploadService::new(
        Arc::new(MockTextExtractor::returning(EXTRACTED)),
        Arc::new(MockObjectStorage::new()),
        repository.clone(),
    );

    let summary = service.run(root, &files).await;

    assert_eq!(summary.succeeded, 1);
    assert_eq!(repository.row_count(), 1);
    assert_eq!(repository.content_of("crfpa-tglf"), Some(EXTRACTED.to_string()));
}

#[tokio::test]
async fn given_unreadable_file_when_running_batch_then_remaining_documents_still_process() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let root = dir.path();
    let files = vec![
        SourcePdf::new(root.join("18. TGLF/missing.pdf")),
        write_pdf(root, "18. TGLF/poly.pdf"),
    ];

    let storage = Arc::new(MockObjectStorage::new());
    let repository = Arc::new(MockContentRepository::new());
    let service = UploadService::new(
        Arc::new(MockTextExtractor::returning(EXTRACTED)),
        storage.clone(),
        repository.clone(),
    );

    let summary = service.run(root, &files).await;

    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(storage.uploaded_keys(), vec!["crfpa-tglf.pdf".to_string()]);
}
