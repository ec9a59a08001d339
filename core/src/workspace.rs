//! Per-call scratch directories for engine runs.
//!
//! Every parse call gets its own uniquely named temp directory holding the
//! framed input file and the engine-written output file. Nothing is shared
//! between concurrent calls, so no locking is needed beyond the unique path.
//! The directory is removed when the workspace is dropped; [`Workspace::cleanup`]
//! removes it eagerly and logs when removal fails instead of masking the
//! call's primary error.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::warn;

use crate::error::ParseError;

/// File name of the framed batch inside the workspace.
const INPUT_FILE_NAME: &str = "text_file.txt";

/// Suffix the engine appends to the input path for its output file.
pub const PREDICT_SUFFIX: &str = ".predict";

#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
    input: PathBuf,
}

impl Workspace {
    pub fn create() -> Result<Self, ParseError> {
        let dir = tempfile::Builder::new().prefix("tweebo-").tempdir()?;
        let input = dir.path().join(INPUT_FILE_NAME);
        Ok(Self { dir, input })
    }

    /// Path the framed batch is written to.
    pub fn input_path(&self) -> &Path {
        &self.input
    }

    /// Path the engine writes its output to: `<input-path>.predict`.
    pub fn output_path(&self) -> PathBuf {
        let mut os = self.input.clone().into_os_string();
        os.push(PREDICT_SUFFIX);
        PathBuf::from(os)
    }

    /// Remove the scratch directory now. Removal failures are logged and
    /// swallowed so they never mask the error the call is propagating.
    pub fn cleanup(self) {
        let path = self.dir.path().to_path_buf();
        if let Err(e) = self.dir.close() {
            warn!(path = %path.display(), "failed to remove parse workspace: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_appends_predict_suffix() {
        let ws = Workspace::create().unwrap();
        let input = ws.input_path().to_path_buf();
        let output = ws.output_path();
        assert_eq!(
            output.to_string_lossy(),
            format!("{}{}", input.to_string_lossy(), PREDICT_SUFFIX)
        );
        assert_eq!(output.parent(), input.parent());
    }

    #[test]
    fn test_cleanup_removes_directory() {
        let ws = Workspace::create().unwrap();
        let dir = ws.input_path().parent().unwrap().to_path_buf();
        assert!(dir.exists());
        ws.cleanup();
        assert!(!dir.exists());
    }

    #[test]
    fn test_drop_removes_directory() {
        let dir;
        {
            let ws = Workspace::create().unwrap();
            dir = ws.input_path().parent().unwrap().to_path_buf();
            std::fs::write(ws.input_path(), "leftover").unwrap();
        }
        assert!(!dir.exists());
    }

    #[test]
    fn test_concurrent_workspaces_are_distinct() {
        let a = Workspace::create().unwrap();
        let b = Workspace::create().unwrap();
        assert_ne!(a.input_path(), b.input_path());
        a.cleanup();
        assert!(b.input_path().parent().unwrap().exists());
        b.cleanup();
    }
}
