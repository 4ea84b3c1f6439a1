//! Client configuration
//!
//! The server location is the only knob. It can be overridden with the
//! `BOBBYCHESS_SERVER` environment variable; the default matches the
//! analysis server's development port.

use bevy::prelude::*;

const SERVER_ENV_VAR: &str = "BOBBYCHESS_SERVER";
const DEFAULT_SERVER: &str = "http://localhost:8000";

/// Resource holding the base URL of the chess analysis server
#[derive(Resource, Debug, Clone)]
pub struct ServerConfig {
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let base_url = std::env::var(SERVER_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_SERVER.to_string());
        Self { base_url }
    }
}
