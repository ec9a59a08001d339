use tracing::info;
use tweebo_core::api::{process, AppConfig, CliError, ScriptEngine};

use super::cli::ParseArgs;

/// One-shot pipeline run: collect texts, parse, print JSON to stdout.
pub async fn handle_parse(args: ParseArgs, cfg: &AppConfig) -> Result<i32, CliError> {
    let texts = collect_texts(&args).await?;
    info!(texts = texts.len(), format = %args.format, "parsing batch");

    let engine = ScriptEngine::from_config(&cfg.engine);
    let output = process(&engine, &texts, &args.format).await?;

    let rendered = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::Command(format!("failed to render output: {e}")))?;
    println!("{rendered}");
    Ok(0)
}

async fn collect_texts(args: &ParseArgs) -> Result<Vec<String>, CliError> {
    if let Some(path) = &args.file {
        let contents = tokio::fs::read_to_string(path).await?;
        return Ok(contents.lines().map(str::to_string).collect());
    }
    Ok(args.texts.clone())
}
