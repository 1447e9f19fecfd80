use thiserror::Error;

use crate::utils::error::{RequestError, ResponseError};

#[derive(Debug, Error)]
pub enum PlacesServiceError {
    #[error("Invalid request: {0}")]
    Request(#[from] RequestError),

    #[error("Failed to send request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Response(#[from] ResponseError),
}
