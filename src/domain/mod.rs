mod course_catalog;
mod course_id;
mod resolver;
mod slug;
mod source_pdf;

pub use course_catalog::classify;
pub use course_id::{CourseId, CourseIdResolution};
pub use resolver::resolve_course_id;
pub use slug::{sanitize, truncate_chars};
pub use source_pdf::SourcePdf;
