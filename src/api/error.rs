use thiserror::Error;

/// Failure of a predict, health, classes or stats request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The service answered with a non-success HTTP status.
    #[error("{endpoint} failed with HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },
    /// The request never produced an HTTP response.
    #[error("{endpoint} request failed: {message}")]
    Transport {
        endpoint: &'static str,
        message: String,
    },
    /// The response body could not be read or parsed.
    #[error("{endpoint} returned an invalid response: {message}")]
    InvalidResponse {
        endpoint: &'static str,
        message: String,
    },
}

/// Failure of a retrain upload that did not produce a service envelope.
#[derive(Debug, Error)]
pub enum RetrainError {
    /// No files were passed to the upload.
    #[error("No images selected for retraining")]
    NoImages,
    /// The request failed before a usable envelope arrived.
    #[error(transparent)]
    Request(#[from] RequestError),
}
