use thiserror::Error;

use super::parse::ParseError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),
    #[error("command failed: {0}")]
    Command(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}
