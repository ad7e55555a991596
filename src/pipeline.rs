use crate::{
    annotation::{Annotation, AnnotationLevel},
    error::AnnotationError,
    parser::{AnnotationParser, ParserOptions, make_parser},
};

/// The volume-control policy applied when a linter reports very many problems.
#[derive(Debug, Clone)]
pub struct VolumeControl {
    /// The hard cap on the returned annotation count.
    pub max_count: usize,

    /// Grouping/truncation only happens when the combined annotation count
    /// (existing plus new) exceeds this threshold.
    pub truncate_threshold: usize,

    /// A file whose new-annotation count exceeds this threshold gets its
    /// group replaced by a summary annotation plus the first
    /// [`Self::file_count`] originals.
    pub file_threshold: usize,

    /// How many original annotations to keep for a summarized file.
    pub file_count: usize,
}

impl Default for VolumeControl {
    fn default() -> Self {
        Self {
            max_count: 800,
            truncate_threshold: 500,
            file_threshold: 50,
            file_count: 10,
        }
    }
}

impl VolumeControl {
    /// Merges previously supplied annotations with this run's findings and
    /// applies the truncation policy.
    ///
    /// Below the [`Self::truncate_threshold`], the output is exactly
    /// `existing ++ new`, untouched. Above it, only the *new* annotations are
    /// grouped by path (first-occurrence order) and flooded files are
    /// summarized; existing annotations are re-appended first and never
    /// shrunk per-file. The result is capped at [`Self::max_count`] by
    /// prefix truncation.
    fn apply(&self, existing: Vec<Annotation>, new: Vec<Annotation>) -> Vec<Annotation> {
        let mut merged = existing;
        if merged.len() + new.len() <= self.truncate_threshold {
            merged.extend(new);
            return merged;
        }

        let mut groups: Vec<(String, Vec<Annotation>)> = Vec::new();
        for annotation in new {
            match groups.iter_mut().find(|(path, _)| path == &annotation.path) {
                Some((_, group)) => group.push(annotation),
                None => groups.push((annotation.path.clone(), vec![annotation])),
            }
        }

        for (path, group) in groups {
            if group.len() > self.file_threshold {
                merged.push(Self::summary(&path, group.len(), self.file_count));
                merged.extend(group.into_iter().take(self.file_count));
            } else {
                merged.extend(group);
            }
        }
        merged.truncate(self.max_count);
        merged
    }

    /// The synthetic annotation that stands in for a flooded file's group.
    fn summary(path: &str, total: usize, shown: usize) -> Annotation {
        Annotation {
            path: path.to_string(),
            start_line: 1,
            end_line: 1,
            annotation_level: AnnotationLevel::Failure,
            message: format!(
                "Found {total} problems in {path}. Only the first {shown} are annotated here; \
                 run the linter locally to see the full report."
            ),
        }
    }
}

/// The outcome of one pipeline run.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// The final annotation sequence, after normalization and volume control.
    pub annotations: Vec<Annotation>,

    /// How many annotations this run's raw output produced, before volume
    /// control and not counting pre-existing annotations.
    pub new_count: usize,
}

impl PipelineOutcome {
    /// Did this run's raw output report any problems?
    ///
    /// This is the caller's basis for marking the run as failed.
    pub fn problems_found(&self) -> bool {
        self.new_count > 0
    }
}

/// Orchestrates one linting pass: strategy selection, per-record
/// normalization, and volume control.
pub struct AnnotationPipeline {
    parser: Box<dyn AnnotationParser>,
    volume: VolumeControl,
}

impl AnnotationPipeline {
    /// Constructs the pipeline, selecting and building the parsing strategy
    /// from the given options.
    ///
    /// Fails when the selected strategy is missing its required
    /// pattern/adapter.
    pub fn new(options: ParserOptions, volume: VolumeControl) -> Result<Self, AnnotationError> {
        Ok(Self {
            parser: make_parser(options)?,
            volume,
        })
    }

    /// Runs one linting pass over the captured linter output.
    ///
    /// `existing` is an optional annotation sequence from an upstream stage;
    /// it precedes this run's findings in the output and is exempt from
    /// per-file truncation.
    pub fn run(
        &self,
        raw_output: &str,
        existing: Vec<Annotation>,
    ) -> Result<PipelineOutcome, AnnotationError> {
        let new = self.parser.parse(raw_output)?;
        let new_count = new.len();
        Ok(PipelineOutcome {
            annotations: self.volume.apply(existing, new),
            new_count,
        })
    }
}
