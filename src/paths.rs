use std::env;

/// Rewrites absolute file paths reported by the linter into paths
/// relative to the working root.
#[derive(Debug, Clone)]
pub struct PathNormalizer {
    root: String,
}

impl Default for PathNormalizer {
    /// Uses the current working directory as the root.
    fn default() -> Self {
        Self::new(
            env::current_dir()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_default(),
        )
    }
}

impl PathNormalizer {
    /// Instantiate a normalizer for the given working root.
    ///
    /// Trailing path separators in `root` are ignored.
    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into().trim_end_matches('/').to_string();
        Self { root }
    }

    /// Strips a single leading occurrence of the working root (followed by a
    /// path separator) from `path`, if present. Otherwise `path` is returned
    /// unchanged. An empty root strips nothing.
    pub fn normalize(&self, path: &str) -> String {
        if self.root.is_empty() {
            return path.to_string();
        }
        path.strip_prefix(&self.root)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(path)
            .to_string()
    }
}
