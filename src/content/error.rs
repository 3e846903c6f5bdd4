//! Error types for content compilation.

use std::fmt;

use thiserror::Error;

/// Authoring defects found while compiling content.
///
/// `path` locates the defect as `page/category#entry` (entries are 1-based),
/// truncated to whatever level the defect belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// No pages at all.
    #[error("content defines no pages")]
    EmptySite,

    #[error("{path}: page has no categories")]
    EmptyPage { path: String },

    #[error("{path}: category has no entries")]
    EmptyCategory { path: String },

    #[error("{path}: entry has no code variants")]
    EmptyVariantSet { path: String },

    #[error("{path}: duplicate page id `{id}`")]
    DuplicatePageId { path: String, id: String },

    #[error("{path}: duplicate category id `{id}`")]
    DuplicateCategoryId { path: String, id: String },

    #[error("{path}: duplicate code variant label `{label}`")]
    DuplicateVariantLabel { path: String, label: String },

    #[error("{path}: default variant `{label}` is not one of the entry's variants")]
    UnknownDefaultVariant { path: String, label: String },

    /// Both `solution` and `solutions` were given.
    #[error("{path}: entry sets both `solution` and `solutions`")]
    AmbiguousSolution { path: String },

    #[error("{path}: unrecognized difficulty `{label}` (expected Easy, Medium or Hard)")]
    UnrecognizedDifficulty { path: String, label: String },

    /// Compilation failed; the report lists every defect.
    #[error("invalid content: {0}")]
    Invalid(ValidationReport),
}

/// Everything found during one compilation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ContentError>,
    pub warnings: Vec<ContentError>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&mut self, error: ContentError) {
        self.errors.push(error);
    }

    pub fn warning(&mut self, warning: ContentError) {
        self.warnings.push(warning);
    }

    /// Fail with [`ContentError::Invalid`] when any error was recorded.
    pub fn into_result(self) -> Result<Vec<ContentError>, ContentError> {
        if self.is_ok() {
            Ok(self.warnings)
        } else {
            Err(ContentError::Invalid(self))
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => write!(f, "no errors"),
            [only] => write!(f, "{only}"),
            [first, rest @ ..] => write!(f, "{first} (and {} more)", rest.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_into_result() {
        let mut report = ValidationReport::default();
        report.warning(ContentError::UnrecognizedDifficulty {
            path: "bst/ops#1".into(),
            label: "Expert".into(),
        });
        let warnings = report.clone().into_result().unwrap();
        assert_eq!(warnings.len(), 1);

        report.error(ContentError::EmptySite);
        report.error(ContentError::EmptyPage { path: "bst".into() });
        let err = report.into_result().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid content: content defines no pages (and 1 more)"
        );
    }
}
