//! 解析流水线：workspace → 批量写入 → 引擎调用 → 输出切分 → 转码。
//!
//! Every call owns a private workspace; all failures from framing through
//! transcoding unwind through the single cleanup point at the bottom of
//! [`process_texts`], so the scratch directory is gone before the caller
//! sees either the result or the error.

use serde::Serialize;
use tracing::debug;

use crate::engine::EngineInvoker;
use crate::error::ParseError;
use crate::frame;
use crate::segment;
use crate::transcode::{block_to_conll, block_to_stanford, OutputFormat, TweetParse};
use crate::workspace::Workspace;

/// Ordered per-input results, one entry per input text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParseOutput {
    Conll(Vec<String>),
    Stanford(Vec<TweetParse>),
}

impl ParseOutput {
    pub fn len(&self) -> usize {
        match self {
            Self::Conll(results) => results.len(),
            Self::Stanford(results) => results.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse `texts` with `format` given as a string. Format validation happens
/// up front, before any workspace or subprocess work.
pub async fn process(
    engine: &dyn EngineInvoker,
    texts: &[String],
    format: &str,
) -> Result<ParseOutput, ParseError> {
    let format: OutputFormat = format.parse()?;
    process_texts(engine, texts, format).await
}

/// Run the full pipeline for one batch. Returns exactly one result per input
/// text, in input order.
pub async fn process_texts(
    engine: &dyn EngineInvoker,
    texts: &[String],
    format: OutputFormat,
) -> Result<ParseOutput, ParseError> {
    let workspace = Workspace::create()?;
    debug!(texts = texts.len(), input = %workspace.input_path().display(), "starting parse");
    let result = run_pipeline(&workspace, engine, texts, format).await;
    workspace.cleanup();
    result
}

async fn run_pipeline(
    workspace: &Workspace,
    engine: &dyn EngineInvoker,
    texts: &[String],
    format: OutputFormat,
) -> Result<ParseOutput, ParseError> {
    frame::write_batch(workspace.input_path(), texts).await?;
    engine.run(workspace.input_path()).await?;

    let raw = tokio::fs::read_to_string(workspace.output_path()).await?;
    let blocks = segment::segment_output(&raw, texts.len())?;

    Ok(match format {
        OutputFormat::Conll => ParseOutput::Conll(blocks.iter().map(block_to_conll).collect()),
        OutputFormat::Stanford => ParseOutput::Stanford(
            blocks
                .iter()
                .enumerate()
                .map(|(index, block)| block_to_stanford(block, index))
                .collect::<Result<_, _>>()?,
        ),
    })
}
