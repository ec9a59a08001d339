//! HTTP服务器模块 - 暴露批量依存句法解析API供外部集成使用

pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;
pub mod validation;

pub use models::*;
pub use server::*;
pub use state::*;
