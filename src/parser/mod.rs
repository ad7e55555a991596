//! The pluggable parsing strategies that extract annotations from raw linter output.
use regex::Regex;

use crate::{
    PathNormalizer, SeverityMap,
    annotation::{Annotation, RawAnnotation},
    error::AnnotationError,
};

mod custom;
mod regex_line;
mod xml;
pub use custom::CustomParser;
pub use regex_line::RegexLineParser;
pub use xml::XmlParser;

/// An adapter function that extracts [`RawAnnotation`]s from a parsed XML report.
///
/// The adapter receives the whole document, attributes included, and returns
/// the annotation-shaped records it finds. It is a capability plugged in by
/// the caller; the parser does not interpret the report itself.
pub type XmlAdapter = Box<dyn Fn(&roxmltree::Document) -> Vec<RawAnnotation> + Send + Sync>;

/// An adapter function that extracts [`RawAnnotation`]s from raw linter text.
///
/// Used for linters whose output format this crate has no built-in
/// understanding of.
pub type CustomAdapter = Box<dyn Fn(&str) -> Vec<RawAnnotation> + Send + Sync>;

/// A custom trait that templates a parsing strategy.
///
/// Each call operates on one immutable input blob and returns a freshly
/// constructed sequence; implementations hold no mutable state.
pub trait AnnotationParser {
    /// Extract normalized [`Annotation`]s from the captured linter output.
    fn parse(&self, raw_output: &str) -> Result<Vec<Annotation>, AnnotationError>;
}

/// An enumeration of the available parsing strategies.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum ParserKind {
    /// Apply a regex with named capture groups to each output line.
    #[default]
    Regex,

    /// Deserialize an XML report and delegate extraction to an [`XmlAdapter`].
    Xml,

    /// Delegate the entire extraction to a [`CustomAdapter`].
    Custom,
}

impl ParserKind {
    /// Resolve a configured `parser-type` discriminator (case-insensitive).
    ///
    /// Absent or unrecognized values default to [`ParserKind::Regex`].
    pub fn from_config(value: Option<&str>) -> Self {
        match value.map(|v| v.to_lowercase()).as_deref() {
            Some("xml") => Self::Xml,
            Some("custom") => Self::Custom,
            _ => Self::Regex,
        }
    }
}

/// The configuration consumed by [`make_parser`].
#[derive(Default)]
pub struct ParserOptions {
    /// Which parsing strategy to construct.
    pub kind: ParserKind,

    /// The line pattern with named capture groups `file`, `line`,
    /// `level` (optional) and `message`.
    ///
    /// Required for [`ParserKind::Regex`]; ignored otherwise.
    pub pattern: Option<String>,

    /// The extraction adapter for [`ParserKind::Xml`].
    pub xml_adapter: Option<XmlAdapter>,

    /// The extraction adapter for [`ParserKind::Custom`].
    pub custom_adapter: Option<CustomAdapter>,

    /// The severity normalization policy.
    pub levels: SeverityMap,

    /// The path normalization policy.
    pub root: PathNormalizer,
}

/// Constructs the [`AnnotationParser`] described by the given options.
///
/// Fails when the selected strategy is missing its pattern/adapter, or when
/// the pattern does not compile.
pub fn make_parser(options: ParserOptions) -> Result<Box<dyn AnnotationParser>, AnnotationError> {
    let ParserOptions {
        kind,
        pattern,
        xml_adapter,
        custom_adapter,
        levels,
        root,
    } = options;
    match kind {
        ParserKind::Regex => {
            let pattern = pattern.ok_or(AnnotationError::MissingPattern)?;
            let pattern = Regex::new(&pattern)?;
            Ok(Box::new(RegexLineParser::new(pattern, levels, root)))
        }
        ParserKind::Xml => {
            let adapter = xml_adapter.ok_or(AnnotationError::MissingAdapter("xml"))?;
            Ok(Box::new(XmlParser::new(adapter, levels, root)))
        }
        ParserKind::Custom => {
            let adapter = custom_adapter.ok_or(AnnotationError::MissingAdapter("custom"))?;
            Ok(Box::new(CustomParser::new(adapter, levels, root)))
        }
    }
}

/// Applies the path and severity normalization policies to an
/// adapter-produced record.
pub(crate) fn normalize(
    raw: RawAnnotation,
    levels: &SeverityMap,
    root: &PathNormalizer,
) -> Annotation {
    Annotation {
        path: root.normalize(&raw.path),
        start_line: raw.start_line,
        end_line: raw.end_line,
        annotation_level: levels.map(raw.level.as_deref()),
        message: raw.message,
    }
}

#[cfg(test)]
mod tests {
    use super::{ParserKind, ParserOptions, make_parser};
    use crate::error::AnnotationError;

    #[test]
    fn discriminator_resolution() {
        assert_eq!(ParserKind::from_config(None), ParserKind::Regex);
        assert_eq!(ParserKind::from_config(Some("regex")), ParserKind::Regex);
        assert_eq!(ParserKind::from_config(Some("XML")), ParserKind::Xml);
        assert_eq!(ParserKind::from_config(Some("Custom")), ParserKind::Custom);
        // unrecognized values are policy, not errors
        assert_eq!(ParserKind::from_config(Some("yaml")), ParserKind::Regex);
    }

    #[test]
    fn missing_pattern_is_fatal() {
        let result = make_parser(ParserOptions::default());
        assert!(matches!(result, Err(AnnotationError::MissingPattern)));
    }

    #[test]
    fn invalid_pattern_is_fatal() {
        let options = ParserOptions {
            pattern: Some("(?P<file>unbalanced".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            make_parser(options),
            Err(AnnotationError::Pattern(_))
        ));
    }

    #[test]
    fn missing_adapters_are_fatal() {
        for kind in [ParserKind::Xml, ParserKind::Custom] {
            let options = ParserOptions {
                kind,
                ..Default::default()
            };
            assert!(matches!(
                make_parser(options),
                Err(AnnotationError::MissingAdapter(_))
            ));
        }
    }
}
