use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::stellar_utils::DeployError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        source: std::io::Error,
    },

    #[error("Failed to decode {tool} output: {source}")]
    Decode {
        tool: String,
        source: std::string::FromUtf8Error,
    },
}

impl ApiError {
    pub fn deploy(tool: impl ToString, err: DeployError) -> Self {
        let tool = tool.to_string();

        match err {
            DeployError::Spawn(source) => Self::Spawn { tool, source },
            DeployError::Decode(source) => Self::Decode { tool, source },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Deploy invocation failed");

        let body = Json(serde_json::json!({
            "success": false,
            "error": self.to_string(),
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
