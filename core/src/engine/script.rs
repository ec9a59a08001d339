use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::ParseError;

use super::EngineInvoker;

/// Production invoker: spawns `<command> [args...] <input-path>` and waits
/// for it to exit. Exit code 0 is success; anything else, including a failed
/// spawn or an elapsed timeout, is a fatal engine error.
#[derive(Debug, Clone)]
pub struct ScriptEngine {
    command: String,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl ScriptEngine {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            timeout: None,
        }
    }

    pub fn from_config(cfg: &EngineConfig) -> Self {
        Self {
            command: cfg.command.clone(),
            args: cfg.args.clone(),
            timeout: cfg.timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        self.args = args.into_iter().collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl EngineInvoker for ScriptEngine {
    async fn run(&self, input: &Path) -> Result<(), ParseError> {
        debug!(command = %self.command, input = %input.display(), "invoking engine");

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .arg(input)
            .spawn()
            .map_err(|e| ParseError::engine(format!("failed to spawn `{}`: {e}", self.command)))?;

        let status = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(waited) => waited
                    .map_err(|e| ParseError::engine(format!("failed to wait for engine: {e}")))?,
                Err(_) => {
                    // The workspace owning the input file is still cleaned up
                    // by the caller; we only have to reap the child here.
                    let _ = child.kill().await;
                    return Err(ParseError::engine(format!(
                        "engine timed out after {}s",
                        limit.as_secs()
                    )));
                }
            },
            None => child
                .wait()
                .await
                .map_err(|e| ParseError::engine(format!("failed to wait for engine: {e}")))?,
        };

        if !status.success() {
            return Err(ParseError::engine(format!("engine exited with {status}")));
        }
        Ok(())
    }
}
