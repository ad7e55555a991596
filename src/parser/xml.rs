use super::{AnnotationParser, XmlAdapter, normalize};
use crate::{PathNormalizer, SeverityMap, annotation::Annotation, error::AnnotationError};

/// The structured-markup parsing strategy.
///
/// The raw output is deserialized as an XML document (attributes retained)
/// and handed to the injected [`XmlAdapter`], which extracts the
/// annotation-shaped records. Each record is then normalized exactly like a
/// line-pattern match.
///
/// Malformed markup is a fatal error for the invocation; no partial
/// annotation set is produced.
pub struct XmlParser {
    adapter: XmlAdapter,
    levels: SeverityMap,
    root: PathNormalizer,
}

impl XmlParser {
    pub fn new(adapter: XmlAdapter, levels: SeverityMap, root: PathNormalizer) -> Self {
        Self {
            adapter,
            levels,
            root,
        }
    }
}

impl AnnotationParser for XmlParser {
    fn parse(&self, raw_output: &str) -> Result<Vec<Annotation>, AnnotationError> {
        let document = roxmltree::Document::parse(raw_output)?;
        Ok((self.adapter)(&document)
            .into_iter()
            .map(|raw| normalize(raw, &self.levels, &self.root))
            .collect())
    }
}

// ******************* UNIT TESTS ***********************
#[cfg(test)]
mod tests {
    use super::XmlParser;
    use crate::{
        AnnotationLevel, PathNormalizer, RawAnnotation, SeverityMap,
        error::AnnotationError,
        parser::{AnnotationParser, XmlAdapter},
    };

    /// Extracts records from a checkstyle-style report
    /// (`<checkstyle><file name><error line severity message/></file></checkstyle>`).
    fn checkstyle_adapter() -> XmlAdapter {
        Box::new(|document: &roxmltree::Document| {
            let mut records = Vec::new();
            for file in document
                .descendants()
                .filter(|node| node.has_tag_name("file"))
            {
                let path = file.attribute("name").unwrap_or_default().to_string();
                for error in file.children().filter(|node| node.has_tag_name("error")) {
                    let line = error
                        .attribute("line")
                        .and_then(|value| value.parse().ok())
                        .unwrap_or(1);
                    records.push(RawAnnotation {
                        path: path.clone(),
                        start_line: line,
                        end_line: line,
                        level: error.attribute("severity").map(str::to_string),
                        message: error.attribute("message").unwrap_or_default().to_string(),
                    });
                }
            }
            records
        })
    }

    fn setup_parser(root: &str) -> XmlParser {
        XmlParser::new(
            checkstyle_adapter(),
            SeverityMap::default(),
            PathNormalizer::new(root),
        )
    }

    const CHECKSTYLE_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<checkstyle version="8.0">
  <file name="/work/src/a.js">
    <error line="3" severity="error" message="bad thing"/>
    <error line="7" severity="info" message="nitpick"/>
  </file>
  <file name="src/b.js">
    <error line="10" severity="warning" message="minor"/>
  </file>
</checkstyle>
"#;

    #[test]
    fn checkstyle_report() {
        let parser = setup_parser("/work");
        let annotations = parser.parse(CHECKSTYLE_REPORT).unwrap();
        assert_eq!(annotations.len(), 3);
        assert_eq!(annotations[0].path, "src/a.js");
        assert_eq!(annotations[0].start_line, 3);
        assert_eq!(annotations[0].annotation_level, AnnotationLevel::Failure);
        assert_eq!(annotations[1].annotation_level, AnnotationLevel::Notice);
        assert_eq!(annotations[2].path, "src/b.js");
        assert_eq!(annotations[2].annotation_level, AnnotationLevel::Warning);
    }

    #[test]
    fn malformed_markup_is_fatal() {
        let parser = setup_parser("");
        let result = parser.parse("<checkstyle><file></checkstyle>");
        assert!(matches!(result, Err(AnnotationError::Xml(_))));
    }

    #[test]
    fn well_formed_report_without_matches_is_empty() {
        let parser = setup_parser("");
        let annotations = parser
            .parse(r#"<checkstyle version="8.0"></checkstyle>"#)
            .unwrap();
        assert!(annotations.is_empty());
    }

    #[test]
    fn boolean_valued_attributes_are_retained() {
        let report = r#"<checkstyle>
  <file name="a.js" fatal="true">
    <error line="1" severity="error" message="boom"/>
  </file>
</checkstyle>"#;
        let adapter: XmlAdapter = Box::new(|document: &roxmltree::Document| {
            document
                .descendants()
                .filter(|node| node.attribute("fatal") == Some("true"))
                .map(|node| RawAnnotation {
                    path: node.attribute("name").unwrap_or_default().to_string(),
                    start_line: 1,
                    end_line: 1,
                    level: None,
                    message: "file flagged fatal".to_string(),
                })
                .collect()
        });
        let parser = XmlParser::new(adapter, SeverityMap::default(), PathNormalizer::new(""));
        let annotations = parser.parse(report).unwrap();
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].path, "a.js");
    }
}
