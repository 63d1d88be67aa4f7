use std::path::PathBuf;

use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum UploadRampError {
    #[error("failed to open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("auth token is not a valid header value")]
    InvalidAuthToken,

    #[error("Configuration Error: {0}")]
    InvalidConfig(String),

    #[error("Parse Error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("ReqwestMiddleware Error: {0}")]
    ReqwestMiddleware(#[from] reqwest_middleware::Error),

    #[error("Other Internal Error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, UploadRampError>;
