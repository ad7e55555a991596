use fast_glob::glob_match;
use std::{collections::HashSet, path::Path};

/// A structure to narrow a changed-file list down to the files the linter
/// should be given.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    /// A set of relevant file extensions.
    ///
    /// These extensions do not include the leading dot.
    /// For example, use "js" instead of ".js".
    ///
    /// An empty set means every file is relevant.
    pub extensions: HashSet<String>,

    /// A set of paths or glob patterns to be ignored.
    ///
    /// These paths/patterns are relative to the working directory.
    pub ignored: HashSet<String>,
}

impl FileFilter {
    /// Convenience constructor to instantiate a [`FileFilter`] object.
    ///
    /// Leading dots are stripped from each entry in `extensions`, and
    /// leading `./` sequences are stripped from each entry in `ignore`.
    pub fn new(extensions: &[&str], ignore: &[&str]) -> Self {
        Self {
            extensions: extensions
                .iter()
                .map(|ext| ext.trim().trim_start_matches('.').to_string())
                .collect(),
            ignored: ignore
                .iter()
                .map(|pat| {
                    pat.replace('\\', "/")
                        .trim()
                        .trim_start_matches("./")
                        .to_string()
                })
                .collect(),
        }
    }

    /// Should the given `file_name` be passed to the linter?
    ///
    /// A file is relevant when it uses one of [`Self::extensions`] (or the
    /// set is empty) and matches none of the [`Self::ignored`] patterns.
    pub fn is_relevant(&self, file_name: &Path) -> bool {
        let file_name = file_name
            .to_string_lossy()
            .replace('\\', "/")
            .trim_start_matches("./")
            .to_string();
        if !self.extensions.is_empty() {
            let extension = Path::new(&file_name)
                .extension()
                .unwrap_or_default() // allow matching files with no extension
                .to_string_lossy()
                .to_string();
            if !self.extensions.contains(&extension) {
                log::debug!("file {file_name:?} does not use a relevant extension");
                return false;
            }
        }
        for pattern in &self.ignored {
            if glob_match(pattern, &file_name)
                || Path::new(&file_name).starts_with(Path::new(pattern))
            {
                log::debug!("file {file_name:?} is ignored with domain {pattern:?}");
                return false;
            }
        }
        true
    }

    /// Filters a changed-file list, keeping relevant entries in order.
    pub fn filter<'a, I>(&self, files: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        files
            .into_iter()
            .filter(|file| self.is_relevant(Path::new(file)))
            .map(|file| file.to_string())
            .collect()
    }
}
