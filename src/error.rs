use std::time::Duration;
use thiserror::Error;

/// Fatal pipeline errors. Only image decoding is terminal for an invocation;
/// every other condition degrades to a best-effort record with advisory notes.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),
}

/// Errors raised at the text-recognition boundary. The pipeline recovers from
/// all of them by substituting a placeholder round; none reach the caller.
#[derive(Debug, Error)]
pub enum RecognizerError {
    #[error("recognition backend unavailable: {0}")]
    Unavailable(String),

    #[error("recognition request failed: {0}")]
    Request(String),

    #[error("recognition timed out after {0:?}")]
    Timeout(Duration),
}
