use regex::Regex;

use super::AnnotationParser;
use crate::{PathNormalizer, SeverityMap, annotation::Annotation, error::AnnotationError};

/// The line-pattern parsing strategy.
///
/// The configured pattern is applied independently to each line of the
/// linter output. A line that does not match, or whose match lacks the
/// required named groups (`file`, `line`, `message`), contributes nothing.
/// The optional `level` group carries the linter's severity token.
pub struct RegexLineParser {
    pattern: Regex,
    levels: SeverityMap,
    root: PathNormalizer,
}

impl RegexLineParser {
    pub fn new(pattern: Regex, levels: SeverityMap, root: PathNormalizer) -> Self {
        Self {
            pattern,
            levels,
            root,
        }
    }

    /// Extract an [`Annotation`] from one line of linter output, if the line
    /// matches the pattern with all required groups populated.
    fn parse_line(&self, line: &str) -> Option<Annotation> {
        let captures = self.pattern.captures(line)?;
        let path = captures.name("file")?.as_str();
        let line_number: u64 = captures.name("line")?.as_str().parse().ok()?;
        let message = captures.name("message")?.as_str();
        if message.is_empty() {
            return None;
        }
        let level = captures.name("level").map(|m| m.as_str());
        Some(Annotation {
            path: self.root.normalize(path),
            start_line: line_number,
            end_line: line_number,
            annotation_level: self.levels.map(level),
            message: message.to_string(),
        })
    }
}

impl AnnotationParser for RegexLineParser {
    fn parse(&self, raw_output: &str) -> Result<Vec<Annotation>, AnnotationError> {
        let mut annotations = Vec::new();
        for line in raw_output.split('\n') {
            if let Some(annotation) = self.parse_line(line) {
                annotations.push(annotation);
            }
        }
        Ok(annotations)
    }
}
