#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod error;
pub mod parser;

pub use error::AnnotationError;
pub use parser::{
    AnnotationParser, CustomAdapter, CustomParser, ParserKind, ParserOptions, RegexLineParser,
    XmlAdapter, XmlParser, make_parser,
};

mod annotation;
pub use annotation::{Annotation, AnnotationLevel, RawAnnotation, annotations_from_json};

mod severity;
pub use severity::SeverityMap;

mod paths;
pub use paths::PathNormalizer;

mod pipeline;
pub use pipeline::{AnnotationPipeline, PipelineOutcome, VolumeControl};

mod file_utils;
pub use file_utils::FileFilter;

#[cfg(feature = "runner")]
#[cfg_attr(docsrs, doc(cfg(feature = "runner")))]
pub mod runner;
#[cfg(feature = "runner")]
pub use runner::{CapturedOutput, LinterRunner};
