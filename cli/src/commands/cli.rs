use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tweebo", about = "Batch dependency parsing of tweets via the TweeboParser engine")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Engine entrypoint, overriding the configured command. Invoked as
    /// `<engine-cmd> <input-file-path>`.
    #[arg(long, global = true)]
    pub engine_cmd: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse texts once and print the result as JSON to stdout.
    Parse(ParseArgs),
    /// Serve the parse pipeline over HTTP.
    Serve(HttpServerArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ParseArgs {
    /// Text to parse. Repeatable; output order matches input order.
    #[arg(long = "text", action = clap::ArgAction::Append, group = "input")]
    pub texts: Vec<String>,

    /// Read texts from a file, one per line.
    #[arg(long, group = "input")]
    pub file: Option<String>,

    /// Output format: `conll` or `stanford` (case-insensitive).
    #[arg(long, default_value = "conll")]
    pub format: String,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct HttpServerArgs {
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// Server session id; a fresh UUID is generated when omitted.
    #[arg(long)]
    pub session_id: Option<String>,
}
