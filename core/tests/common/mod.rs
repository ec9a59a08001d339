use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use tweebo_core::api::{EngineInvoker, ParseError, EMPTY_TOKEN, PREDICT_SUFFIX};

/// Deterministic stand-in for the external engine, honoring its file
/// contract: reads the framed input, writes `<input>.predict` with one
/// tab-delimited line per token and a blank line after every sentence,
/// exit-equivalent success unless configured to fail.
pub struct FakeEngine {
    canned: Option<String>,
    fail: bool,
    pub seen_inputs: Mutex<Vec<PathBuf>>,
}

impl FakeEngine {
    /// Whitespace-tokenizing mode: token 1 attaches to ROOT, the rest to
    /// token 1, everything tagged `N`.
    pub fn tokenizing() -> Self {
        Self {
            canned: None,
            fail: false,
            seen_inputs: Mutex::new(Vec::new()),
        }
    }

    /// Write exactly `output` as the predict file, whatever the input was.
    pub fn canned(output: impl Into<String>) -> Self {
        Self {
            canned: Some(output.into()),
            fail: false,
            seen_inputs: Mutex::new(Vec::new()),
        }
    }

    /// Record the input path, then fail like a non-zero engine exit.
    pub fn failing() -> Self {
        Self {
            canned: None,
            fail: true,
            seen_inputs: Mutex::new(Vec::new()),
        }
    }

    pub fn last_input(&self) -> Option<PathBuf> {
        self.seen_inputs.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EngineInvoker for FakeEngine {
    async fn run(&self, input: &Path) -> Result<(), ParseError> {
        self.seen_inputs.lock().unwrap().push(input.to_path_buf());
        if self.fail {
            return Err(ParseError::engine("engine exited with exit status: 1"));
        }
        let raw = tokio::fs::read_to_string(input).await?;
        let output = match &self.canned {
            Some(canned) => canned.clone(),
            None => tokenize(&raw),
        };
        let mut out_path = input.to_path_buf().into_os_string();
        out_path.push(PREDICT_SUFFIX);
        tokio::fs::write(PathBuf::from(out_path), output).await?;
        Ok(())
    }
}

fn tokenize(raw: &str) -> String {
    let mut out = String::new();
    for line in raw.lines() {
        if line == EMPTY_TOKEN {
            out.push_str(&format!("1\t{EMPTY_TOKEN}\t_\tN\tN\t_\t0\t_\n"));
        } else {
            for (position, token) in line.split_whitespace().enumerate() {
                let head = if position == 0 { 0 } else { 1 };
                out.push_str(&format!("{}\t{token}\t_\tN\tN\t_\t{head}\t_\n", position + 1));
            }
        }
        out.push('\n');
    }
    out
}
