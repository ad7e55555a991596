use super::{AnnotationParser, CustomAdapter, normalize};
use crate::{PathNormalizer, SeverityMap, annotation::Annotation, error::AnnotationError};

/// The adapter-delegated parsing strategy.
///
/// The entire extraction is delegated to the injected [`CustomAdapter`],
/// which receives the raw linter text as-is. Only the path and severity
/// normalization happens on this side.
pub struct CustomParser {
    adapter: CustomAdapter,
    levels: SeverityMap,
    root: PathNormalizer,
}

impl CustomParser {
    pub fn new(adapter: CustomAdapter, levels: SeverityMap, root: PathNormalizer) -> Self {
        Self {
            adapter,
            levels,
            root,
        }
    }
}

impl AnnotationParser for CustomParser {
    fn parse(&self, raw_output: &str) -> Result<Vec<Annotation>, AnnotationError> {
        Ok((self.adapter)(raw_output)
            .into_iter()
            .map(|raw| normalize(raw, &self.levels, &self.root))
            .collect())
    }
}
