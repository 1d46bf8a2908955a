use std::path::{Path, PathBuf};

use cartable::application::services::{build_preview, SAMPLE_LIMIT};
use cartable::domain::SourcePdf;

const ROOT: &str = "contenu";

fn pdf(relative: &str) -> SourcePdf {
    SourcePdf::new(PathBuf::from(ROOT).join(relative))
}

#[test]
fn given_files_in_several_folders_when_previewing_then_counts_are_grouped_and_sorted() {
    let files = vec![
        pdf("18. TGLF/poly.pdf"),
        pdf("1. Intro au droit public et droit constitutionnel/Fascicule Complet 2024.pdf"),
        pdf("18. TGLF/Fiches de revisions completes.pdf"),
        pdf("general.pdf"),
    ];

    let report = build_preview(Path::new(ROOT), &files);

    assert_eq!(report.total, 4);
    let folders: Vec<(&str, usize)> = report
        .by_folder
        .iter()
        .map(|(folder, count)| (folder.as_str(), *count))
        .collect();
    assert_eq!(
        folders,
        vec![
            ("1. Intro au droit public et droit constitutionnel", 1),
            ("18. TGLF", 2),
            // Files directly in the root group under the root directory name.
            ("contenu", 1),
        ]
    );
}

#[test]
fn given_more_files_than_the_sample_limit_when_previewing_then_samples_are_capped() {
    let files: Vec<SourcePdf> = (0..SAMPLE_LIMIT + 5)
        .map(|i| pdf(&format!("18. TGLF/Fiches de revisions numero {i}.pdf")))
        .collect();

    let report = build_preview(Path::new(ROOT), &files);

    assert_eq!(report.total, SAMPLE_LIMIT + 5);
    assert_eq!(report.samples.len(), SAMPLE_LIMIT);
    assert_eq!(report.samples[0].file_name, "Fiches de revisions numero 0.pdf");
}

#[test]
fn given_mapped_folder_when_previewing_then_sample_shows_derived_course_id() {
    let files = vec![pdf("18. TGLF/Fiches de revisions completes.pdf")];

    let report = build_preview(Path::new(ROOT), &files);

    let sample = &report.samples[0];
    assert!(!sample.resolution.is_degraded());
    assert_eq!(
        sample.resolution.id().as_str(),
        "crfpa-tglf-fiches-de-revisions-completes"
    );
}

#[test]
fn given_file_outside_the_root_when_previewing_then_sample_is_marked_degraded() {
    let files = vec![SourcePdf::new(PathBuf::from(
        "elsewhere/Fascicule Complet 2024.pdf",
    ))];

    let report = build_preview(Path::new(ROOT), &files);

    assert!(report.samples[0].resolution.is_degraded());
    assert_eq!(
        report.samples[0].resolution.id().as_str(),
        "fascicule-complet-2024"
    );
}
