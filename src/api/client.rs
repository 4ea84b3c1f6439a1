//! Blocking HTTP client for the chess analysis server
//!
//! One method per endpoint. Calls block, so they must only run on worker
//! threads spawned from async tasks, never on the UI schedule.

use super::types::{
    BoardGrid, ControlResponse, MoveResponse, OpeningsResponse, PgnQuery,
};
use crate::core::{ApiError, ApiResult};

pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// POST `/get_board_state`. The server ignores the body today but the
    /// original client always sends the PGN, so this one does too.
    pub fn board_state(&self, pgn: &str) -> ApiResult<BoardGrid> {
        self.post_json("/get_board_state", &PgnQuery { pgn })
    }

    /// POST `/move` form-encoded. `promotion` is empty for ordinary moves,
    /// or one of `q r b n` for a promoting pawn.
    pub fn submit_move(&self, from: &str, to: &str, promotion: &str) -> ApiResult<MoveResponse> {
        let params = [("from", from), ("to", to), ("promotion", promotion)];
        let response = self
            .http
            .post(format!("{}/move", self.base_url))
            .form(&params)
            .send()?;
        Self::decode(response)
    }

    pub fn reset(&self) -> ApiResult<ControlResponse> {
        self.post_empty("/reset")
    }

    pub fn undo(&self) -> ApiResult<ControlResponse> {
        self.post_empty("/undo")
    }

    pub fn ai_move(&self) -> ApiResult<ControlResponse> {
        self.post_empty("/ai_move")
    }

    pub fn possible_openings(&self, pgn: &str) -> ApiResult<OpeningsResponse> {
        self.post_json("/get_possible_openings", &PgnQuery { pgn })
    }

    fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &impl serde::Serialize,
    ) -> ApiResult<T> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()?;
        Self::decode(response)
    }

    fn post_empty<T: serde::de::DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .send()?;
        Self::decode(response)
    }

    fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::blocking::Response,
    ) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}
