//! Core module - application state, configuration and error types

pub mod config;
pub mod error;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
