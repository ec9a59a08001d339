mod load;
mod types;

pub use load::{get_tweebo_data_dir, load_default};
pub use types::{AppConfig, EngineConfig, HttpServerConfig, LoggingConfig};
