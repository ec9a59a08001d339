mod script;

use std::path::Path;

use async_trait::async_trait;

use crate::error::ParseError;

pub use script::ScriptEngine;

/// Narrow seam around the external parsing engine.
///
/// The engine is a black box invoked with a single input-file path; it
/// writes `<input-path>.predict` next to the input and signals success via
/// exit code 0. Keeping the seam this small lets tests substitute a fake
/// without touching the orchestration logic.
#[async_trait]
pub trait EngineInvoker: Send + Sync {
    async fn run(&self, input: &Path) -> Result<(), ParseError>;
}
