//! Dispatch errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// A path parameter was not supplied in the argument bag.
    #[error("Missing required path parameter: {0}")]
    MissingParameter(String),

    /// A path parameter was supplied but is not a JSON string.
    #[error("Invalid path parameter: {0}")]
    InvalidParameterType(String),

    /// The argument bag did not convert into the endpoint's request model.
    #[error("Failed to construct request body: {0}")]
    RequestConstruction(#[from] serde_json::Error),

    /// The HTTP request could not be sent or the response body not read.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote API answered with a 4xx/5xx status. The body is passed
    /// through verbatim.
    #[error("API error: {body}")]
    RemoteApi { status: u16, body: String },
}
