use std::time::Duration;

use base64::{engine::general_purpose, Engine as _};
use image::DynamicImage;
use serde::{Deserialize, Serialize};

use super::engine::TextRecognizer;
use crate::error::RecognizerError;

/// Recognizer backed by the OCR HTTP service.
///
/// Sends the binarized card as a base64 PNG and gets back whatever text the
/// model produced. Runs on the blocking reqwest client; the pipeline calls it
/// from a dedicated blocking task.
#[derive(Clone)]
pub struct HttpRecognizer {
    client: reqwest::blocking::Client,
    base_url: String,
}

#[derive(Serialize)]
struct ImageRequest {
    image_base64: String,
}

#[derive(Deserialize)]
struct OcrResponse {
    raw_text: String,
}

impl HttpRecognizer {
    /// Create a client for the OCR server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, RecognizerError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| RecognizerError::Unavailable(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Check if the OCR server is healthy.
    pub fn health_check(&self) -> Result<(), RecognizerError> {
        let url = format!("{}/health", self.base_url);
        self.client
            .get(&url)
            .send()
            .map_err(|e| RecognizerError::Unavailable(format!("health check failed: {}", e)))?;
        Ok(())
    }

    /// Encode image to base64 PNG.
    fn encode_image(image: &DynamicImage) -> Result<String, RecognizerError> {
        let mut buffer = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut buffer), image::ImageFormat::Png)
            .map_err(|e| RecognizerError::Request(format!("failed to encode image: {}", e)))?;
        Ok(general_purpose::STANDARD.encode(&buffer))
    }
}

impl TextRecognizer for HttpRecognizer {
    fn recognize(&self, image: &DynamicImage) -> Result<String, RecognizerError> {
        let image_base64 = Self::encode_image(image)?;
        let url = format!("{}/ocr", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&ImageRequest { image_base64 })
            .send()
            .map_err(|e| RecognizerError::Unavailable(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RecognizerError::Request(format!(
                "OCR server error: {}",
                error_text
            )));
        }

        let data: OcrResponse = response
            .json()
            .map_err(|e| RecognizerError::Request(format!("failed to parse response: {}", e)))?;

        Ok(data.raw_text)
    }

    fn is_available(&self) -> bool {
        self.health_check().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_client_creation() {
        let result = HttpRecognizer::new("http://127.0.0.1:8000");
        assert!(result.is_ok(), "client construction should not touch the network");
    }

    #[test]
    fn test_encode_image_produces_base64() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, Rgb([255, 255, 255])));
        let encoded = HttpRecognizer::encode_image(&img).unwrap();
        assert!(!encoded.is_empty());
        // PNG magic bytes survive the base64 round trip.
        let decoded = general_purpose::STANDARD.decode(&encoded).unwrap();
        assert_eq!(&decoded[1..4], b"PNG");
    }

    #[test]
    fn test_unreachable_server_maps_to_unavailable() {
        // Reserved TEST-NET-1 address, nothing listens there.
        let recognizer = HttpRecognizer::new("http://192.0.2.1:9").unwrap();
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([0, 0, 0])));

        match recognizer.recognize(&img) {
            Err(RecognizerError::Unavailable(_)) => {}
            other => panic!("expected Unavailable, got {:?}", other.map(|_| "text")),
        }
    }
}
