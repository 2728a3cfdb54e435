use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upstream responded with status {0}")]
    Status(StatusCode),
    #[error("malformed events payload: {0}")]
    Decode(#[from] serde_json::Error),
}
