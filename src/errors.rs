use axum::http::StatusCode;

/// Why a fare fetch produced no series.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to fare backend failed: {0}")]
    Network(String),

    #[error("fare backend answered with status {status}")]
    HttpStatus { status: u16 },

    #[error("fare backend response is not a list of fare observations: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::HttpStatus { .. } => "http_status",
            FetchError::Decode(_) => "decode",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: format!("{}: {err}", err.kind()),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
