use std::path::Path;

use super::course_catalog::classify;
use super::course_id::{CourseId, CourseIdResolution};
use super::slug::{sanitize, truncate_chars};

const MAX_FILENAME_SLUG_LEN: usize = 50;
const MAX_COURSE_ID_LEN: usize = 100;
const MIN_DESCRIPTIVE_LEN: usize = 10;

/// Filename stems too generic to distinguish one document from another
/// within the same course folder.
const GENERIC_STEMS: &[&str] = &["cours", "fascicule", "fasc", "poly"];

/// Folder tag used when a PDF sits directly in the content root.
const DEFAULT_FOLDER: &str = "general";

/// Derive a course id from a PDF path and the content root it was found
/// under.
///
/// The id is `{base}-{filename}` where `base` comes from the folder catalog
/// and `filename` is the sanitized stem, or just `base` when the stem is
/// short or generic. Derivation never fails: paths that cannot be resolved
/// against the root degrade to a filename-only slug so one bad path cannot
/// abort a batch run.
pub fn resolve_course_id(pdf_path: &Path, root_dir: &Path) -> CourseIdResolution {
    match derive(pdf_path, root_dir) {
        Ok(id) => CourseIdResolution::Resolved(id),
        Err(reason) => {
            let stem = pdf_path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            let slug = sanitize(&stem);
            let id = CourseId::new(truncate_chars(&slug, MAX_FILENAME_SLUG_LEN));
            CourseIdResolution::Degraded { id, reason }
        }
    }
}

fn derive(pdf_path: &Path, root_dir: &Path) -> Result<CourseId, String> {
    let relative = pdf_path.strip_prefix(root_dir).map_err(|_| {
        format!(
            "{} is not under content root {}",
            pdf_path.display(),
            root_dir.display()
        )
    })?;

    let folder_name = if relative.components().count() > 1 {
        relative
            .components()
            .next()
            .map(|segment| segment.as_os_str().to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_FOLDER.to_string())
    } else {
        DEFAULT_FOLDER.to_string()
    };

    let stem = pdf_path
        .file_stem()
        .ok_or_else(|| format!("{} has no filename stem", pdf_path.display()))?
        .to_string_lossy();

    let base_id = classify(&folder_name);

    let full_slug = sanitize(&stem);
    let filename_slug = truncate_chars(&full_slug, MAX_FILENAME_SLUG_LEN);

    if filename_slug.len() < MIN_DESCRIPTIVE_LEN || GENERIC_STEMS.contains(&filename_slug) {
        return Ok(CourseId::new(sanitize(&base_id)));
    }

    let combined = format!("{}-{}", sanitize(&base_id), filename_slug);
    Ok(CourseId::new(truncate_chars(&combined, MAX_COURSE_ID_LEN)))
}
