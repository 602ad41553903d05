use std::io;
use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::utils::{error_codes, error_to_api_response};

/// 数据加载层错误
#[derive(Debug, thiserror::Error)]
pub enum PresenceError {
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed presence source: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed user directory: {0}")]
    Directory(String),
    #[error("failed to download user directory: {0}")]
    Download(#[from] reqwest::Error),
}

impl PresenceError {
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PresenceError::FileAccess {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    DataUnavailable(PresenceError),
    InternalServerError,
}

impl From<PresenceError> for AppError {
    fn from(e: PresenceError) -> Self {
        AppError::DataUnavailable(e)
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(e: tokio::task::JoinError) -> Self {
        tracing::error!("Blocking task failed: {}", e);
        AppError::InternalServerError
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::DataUnavailable(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            ),
        };

        (
            status,
            error_to_api_response::<()>(error_codes::INTERNAL_ERROR, msg),
        )
            .into_response()
    }
}
