use image::DynamicImage;

use crate::error::RecognizerError;

/// Text recognition boundary - abstraction over OCR backends.
///
/// Implementations are untrusted: the returned text may be partial, garbled,
/// or empty, and must never be assumed accurate. The pipeline treats any
/// error here as recoverable and substitutes a placeholder round.
pub trait TextRecognizer: Send + Sync {
    /// Recognize raw text from a binarized scorecard image.
    fn recognize(&self, image: &DynamicImage) -> Result<String, RecognizerError>;

    /// Check whether the backend is reachable.
    fn is_available(&self) -> bool {
        true
    }
}
