use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::broadcast;
use tweebo_cli::http::state::AppState;
use tweebo_core::api::{EngineInvoker, ParseError, EMPTY_TOKEN, PREDICT_SUFFIX};

/// Engine stand-in honoring the file contract: one tab-delimited line per
/// whitespace token, blank line after every sentence, `<input>.predict`.
pub struct FakeEngine {
    fail: bool,
    pub invocations: AtomicUsize,
}

impl FakeEngine {
    pub fn tokenizing() -> Self {
        Self {
            fail: false,
            invocations: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            invocations: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl EngineInvoker for FakeEngine {
    async fn run(&self, input: &Path) -> Result<(), ParseError> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ParseError::engine("engine exited with exit status: 1"));
        }
        let raw = tokio::fs::read_to_string(input).await?;
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
        let mut out_path = input.to_path_buf().into_os_string();
        out_path.push(PREDICT_SUFFIX);
        tokio::fs::write(PathBuf::from(out_path), out).await?;
        Ok(())
    }
}

pub fn test_state(engine: Arc<dyn EngineInvoker>) -> AppState {
    let (shutdown_tx, _) = broadcast::channel(1);
    AppState::new("test-session".to_string(), engine, shutdown_tx)
}
