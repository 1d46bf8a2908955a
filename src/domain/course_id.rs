use std::fmt;

/// Derived identifier for a course document. Doubles as the storage object
/// key (with a `.pdf` suffix) and the `course_contents` row key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseId(String);

impl CourseId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Object key used when uploading the PDF bytes.
    pub fn storage_key(&self) -> String {
        format!("{}.pdf", self.0)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of course id derivation.
///
/// Derivation is total: when the normal path fails (file outside the content
/// root, missing stem) a less descriptive filename-only slug is substituted
/// so a batch run never aborts over one bad path. The two cases are kept
/// distinct so callers can log the degraded ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseIdResolution {
    Resolved(CourseId),
    Degraded { id: CourseId, reason: String },
}

impl CourseIdResolution {
    pub fn id(&self) -> &CourseId {
        match self {
            Self::Resolved(id) => id,
            Self::Degraded { id, .. } => id,
        }
    }

    pub fn into_id(self) -> CourseId {
        match self {
            Self::Resolved(id) => id,
            Self::Degraded { id, .. } => id,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}
