//! Error types used across the linter-annotations crate.
use thiserror::Error;

/// The possible errors emitted by the annotation pipeline and its collaborators.
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// The line-pattern parser was selected but no parse pattern was configured.
    #[error("A parse pattern is required for the line-pattern parser")]
    MissingPattern,

    /// The selected parser requires an adapter function but none was supplied.
    #[error("An annotation adapter is required for the {0} parser")]
    MissingAdapter(&'static str),

    /// The configured parse pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] regex::Error),

    /// The linter's XML report could not be deserialized.
    #[error("Failed to parse linter XML report: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Error emitted when deserializing/serializing annotation JSON data.
    #[error("Failed to {task}: {source}")]
    Json {
        task: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured linter command is blank.
    #[cfg(feature = "runner")]
    #[cfg_attr(docsrs, doc(cfg(feature = "runner")))]
    #[error("The linter command is empty")]
    EmptyCommand,

    /// Errors related to standard I/O.
    #[cfg(feature = "runner")]
    #[cfg_attr(docsrs, doc(cfg(feature = "runner")))]
    #[error("Failed to {task}: {source}")]
    Io {
        task: String,
        #[source]
        source: std::io::Error,
    },
}

impl AnnotationError {
    /// Helper function to create a [`Self::Json`] error with task context.
    pub fn json(task: &str, source: serde_json::Error) -> Self {
        Self::Json {
            task: task.to_string(),
            source,
        }
    }

    /// Helper function to create an [`Self::Io`] error with task context.
    #[cfg(feature = "runner")]
    #[cfg_attr(docsrs, doc(cfg(feature = "runner")))]
    pub fn io(task: &str, source: std::io::Error) -> Self {
        Self::Io {
            task: task.to_string(),
            source,
        }
    }
}
