//! HTTP API layer - payload types and the blocking endpoint client

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{
    BoardGrid, ControlResponse, MoveResponse, OpeningCandidate, OpeningsResponse, Recommendation,
};
