use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Stats provider request failed: {0}")]
    ProviderError(#[from] reqwest::Error),

    #[error("Stats provider returned status {0}")]
    ProviderStatus(StatusCode),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("No data found for {player} in the {season} season.")]
    SeasonNotPlayed { player: String, season: String },

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Env error: {0}")]
    EnvError(String),

    #[error("Internal server error")]
    InternalError,

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn to_response(&self) -> (StatusCode, String) {
        match self {
            AppError::ProviderError(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            AppError::ProviderStatus(status) => (
                StatusCode::BAD_GATEWAY,
                format!("Stats provider returned status {status}"),
            ),
            AppError::MalformedResponse(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::Deserialization(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            AppError::SeasonNotPlayed { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::RenderError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::EnvError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::InternalError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unexpected server error".into(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        }
    }

    /// Text shown above the form when the pipeline fails after validation.
    pub fn user_message(&self) -> String {
        match self {
            AppError::SeasonNotPlayed { .. } => self.to_string(),
            _ => format!("An error occurred: {}", self.to_response().1),
        }
    }
}
