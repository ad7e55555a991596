use std::collections::HashMap;

use crate::AnnotationLevel;

/// A total mapping from linter-reported severity tokens to [`AnnotationLevel`]s.
///
/// Lookup is case-insensitive. Tokens the map does not know, empty tokens,
/// and absent tokens all resolve to the configured default level, so
/// [`SeverityMap::map`] never fails.
#[derive(Debug, Clone)]
pub struct SeverityMap {
    mapping: HashMap<String, AnnotationLevel>,
    default_level: AnnotationLevel,
}

impl Default for SeverityMap {
    /// The built-in mapping:
    ///
    /// | token | level |
    /// |---|---|
    /// | `err`, `error`, `failure` | [`AnnotationLevel::Failure`] |
    /// | `warn`, `warning` | [`AnnotationLevel::Warning`] |
    /// | `info`, `notice` | [`AnnotationLevel::Notice`] |
    ///
    /// with a default level of [`AnnotationLevel::Failure`].
    fn default() -> Self {
        let mapping = HashMap::from(
            [
                ("err", AnnotationLevel::Failure),
                ("error", AnnotationLevel::Failure),
                ("failure", AnnotationLevel::Failure),
                ("warn", AnnotationLevel::Warning),
                ("warning", AnnotationLevel::Warning),
                ("info", AnnotationLevel::Notice),
                ("notice", AnnotationLevel::Notice),
            ]
            .map(|(k, v)| (k.to_string(), v)),
        );
        Self {
            mapping,
            default_level: AnnotationLevel::default(),
        }
    }
}

impl SeverityMap {
    /// Instantiate a map from an optional custom mapping.
    ///
    /// A non-empty `custom` mapping **replaces** the built-in mapping
    /// entirely; partial overrides are not supported. `None` or an empty
    /// mapping keeps the built-in one.
    pub fn new(custom: Option<HashMap<String, AnnotationLevel>>) -> Self {
        match custom {
            Some(mapping) if !mapping.is_empty() => Self {
                mapping: mapping
                    .into_iter()
                    .map(|(k, v)| (k.to_lowercase(), v))
                    .collect(),
                default_level: AnnotationLevel::default(),
            },
            _ => Self::default(),
        }
    }

    /// Builder function to override the default level used for
    /// unrecognized, empty, or absent tokens.
    pub fn with_default_level(mut self, level: AnnotationLevel) -> Self {
        self.default_level = level;
        self
    }

    /// Resolve a linter-reported severity token to an [`AnnotationLevel`].
    pub fn map(&self, token: Option<&str>) -> AnnotationLevel {
        token
            .and_then(|t| self.mapping.get(&t.to_lowercase()))
            .copied()
            .unwrap_or(self.default_level)
    }
}
