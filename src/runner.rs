//! Process execution for invoking the external linter.
use tokio::process::Command;

use crate::error::AnnotationError;

/// The captured output streams of one linter invocation.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    /// Everything the linter wrote to its standard output.
    pub stdout: String,

    /// Everything the linter wrote to its standard error.
    pub stderr: String,

    /// Whether the linter exited with a zero status.
    ///
    /// Most linters exit non-zero when they find problems, so a `false`
    /// value is expected on runs with findings and is **not** an error.
    pub success: bool,
}

/// Executes a configured linter command against a list of changed files.
#[derive(Debug, Clone)]
pub struct LinterRunner {
    program: String,
    args: Vec<String>,
}

impl LinterRunner {
    /// Instantiate a runner from a command line.
    ///
    /// The command line is split on whitespace; the first token is the
    /// program, the rest are its leading arguments. Quoting is not
    /// interpreted. A blank command is a construction fault.
    pub fn new(command: &str) -> Result<Self, AnnotationError> {
        let mut tokens = command.split_whitespace().map(|t| t.to_string());
        let program = tokens.next().ok_or(AnnotationError::EmptyCommand)?;
        Ok(Self {
            program,
            args: tokens.collect(),
        })
    }

    /// Runs the linter with the given `files` appended to the command line,
    /// capturing both output streams.
    ///
    /// Only failing to spawn the process is an error; the linter's own exit
    /// status is reported via [`CapturedOutput::success`].
    pub async fn run(&self, files: &[String]) -> Result<CapturedOutput, AnnotationError> {
        log::debug!("running {} with {} file(s)", self.program, files.len());
        let output = Command::new(&self.program)
            .args(&self.args)
            .args(files)
            .output()
            .await
            .map_err(|e| AnnotationError::io(&format!("execute '{}'", self.program), e))?;
        let captured = CapturedOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        };
        if !captured.success {
            log::debug!("linter exited non-zero: {:?}", output.status.code());
        }
        Ok(captured)
    }
}

// ******************* UNIT TESTS ***********************
#[cfg(test)]
mod tests {
    use super::LinterRunner;
    use crate::error::AnnotationError;

    #[test]
    fn blank_command_is_fatal() {
        assert!(matches!(
            LinterRunner::new("   "),
            Err(AnnotationError::EmptyCommand)
        ));
    }

    #[tokio::test]
    async fn captures_stdout() {
        let runner = LinterRunner::new("echo a.js:3: error: bad thing").unwrap();
        let captured = runner.run(&[]).await.unwrap();
        assert!(captured.success);
        assert_eq!(captured.stdout.trim_end(), "a.js:3: error: bad thing");
        assert!(captured.stderr.is_empty());
    }

    #[tokio::test]
    async fn files_are_appended_to_the_command() {
        let runner = LinterRunner::new("echo lint").unwrap();
        let files = vec!["a.js".to_string(), "b.js".to_string()];
        let captured = runner.run(&files).await.unwrap();
        assert_eq!(captured.stdout.trim_end(), "lint a.js b.js");
    }

    #[tokio::test]
    async fn nonzero_exit_is_not_an_error() {
        let runner = LinterRunner::new("false").unwrap();
        let captured = runner.run(&[]).await.unwrap();
        assert!(!captured.success);
    }

    #[tokio::test]
    async fn missing_program_is_an_io_error() {
        let runner = LinterRunner::new("definitely-not-a-real-linter").unwrap();
        assert!(matches!(
            runner.run(&[]).await,
            Err(AnnotationError::Io { .. })
        ));
    }
}
