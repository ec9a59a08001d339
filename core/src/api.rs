//! Stable re-exports for consumers (`cli` and external crates).
//!
//! Prefer importing from `tweebo_core::api` instead of reaching into
//! internal modules.

pub use crate::config::{
    get_tweebo_data_dir, load_default, AppConfig, EngineConfig, HttpServerConfig, LoggingConfig,
};
pub use crate::engine::{EngineInvoker, ScriptEngine};
pub use crate::error::{CliError, ParseError};
pub use crate::frame::EMPTY_TOKEN;
pub use crate::pipeline::{process, process_texts, ParseOutput};
pub use crate::segment::Block;
pub use crate::transcode::{
    Dependency, OutputFormat, Token, TweetParse, ALLOWED_FORMATS, UNATTACHED_GLOSS,
};
pub use crate::workspace::{Workspace, PREDICT_SUFFIX};
