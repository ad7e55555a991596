use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AnnotationError;

/// The normalized severity vocabulary of an [`Annotation`],
/// regardless of the linter's own vocabulary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationLevel {
    /// Informational findings.
    Notice,

    /// Findings worth attention but not blocking.
    Warning,

    /// Findings that should fail the run.
    #[default]
    Failure,
}

/// A normalized record describing one problem reported by the linter.
///
/// An `Annotation` is created once by a parser from one unit of raw output
/// (one line, or one markup element), normalized immediately, and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    /// The path to the file being annotated.
    ///
    /// This is relative to the working root; it never contains the
    /// working-root prefix. See [`PathNormalizer`](crate::PathNormalizer).
    pub path: String,

    /// The line number where the annotation starts (1-based).
    #[serde(deserialize_with = "line_number")]
    pub start_line: u64,

    /// The line number where the annotation ends (1-based).
    ///
    /// Always greater than or equal to [`Self::start_line`].
    /// Line-pattern parsing produces single-line annotations
    /// (`end_line == start_line`).
    #[serde(deserialize_with = "line_number")]
    pub end_line: u64,

    /// The normalized severity of the annotation.
    pub annotation_level: AnnotationLevel,

    /// The problem description, free-form and non-empty.
    pub message: String,
}

/// A pre-normalization record as produced by an adapter function.
///
/// The [`level`](Self::level) field carries the linter's own severity token;
/// the pipeline maps it onto an [`AnnotationLevel`] and makes
/// [`path`](Self::path) relative to the working root.
#[derive(Debug, Clone)]
pub struct RawAnnotation {
    pub path: String,
    pub start_line: u64,
    pub end_line: u64,
    pub level: Option<String>,
    pub message: String,
}

/// Deserializes a [`Vec<Annotation>`] from a JSON array.
///
/// Intended for merging a prior stage's findings into a pipeline run via
/// [`AnnotationPipeline::run`](crate::AnnotationPipeline::run).
pub fn annotations_from_json(json: &str) -> Result<Vec<Annotation>, AnnotationError> {
    serde_json::from_str(json).map_err(|e| AnnotationError::json("parse existing annotations", e))
}

/// Accepts line numbers given as JSON numbers or as decimal strings.
/// Prior tooling serialized `startLine`/`endLine` as strings.
fn line_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(v) => Ok(v),
        NumberOrString::String(v) => v.parse().map_err(serde::de::Error::custom),
    }
}
