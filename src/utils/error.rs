use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Invalid request: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("Offset {offset} is past the end of the {len} character input")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("Minimum price {min} is greater than maximum price {max}")]
    PriceRange { min: u8, max: u8 },
}

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("Response payload is not a JSON object")]
    NotAnObject,

    #[error("Response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
