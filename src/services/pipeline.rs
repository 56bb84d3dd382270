use std::sync::Arc;
use std::time::Duration;

use image::{DynamicImage, GenericImageView};
use tracing::{debug, warn};

use super::ocr::{aligner, classifier, normalizer, validator};
use super::ocr::{PreprocessingService, TextRecognizer};
use crate::error::{PipelineError, RecognizerError};
use crate::models::config::PipelineConfig;
use crate::models::round::{RoundRecord, RoundSummary, RoundTotals};

/// Scorecard extraction pipeline.
///
/// Stateless and request-scoped: every `scan` works on its own image bytes
/// and shares nothing mutable, so concurrent scans need no coordination. The
/// recognizer is an injected capability, swappable for a deterministic stub
/// in tests.
pub struct ScorecardPipeline {
    recognizer: Arc<dyn TextRecognizer>,
    preprocessing: PreprocessingService,
    config: PipelineConfig,
}

impl ScorecardPipeline {
    pub fn new(recognizer: Arc<dyn TextRecognizer>, config: PipelineConfig) -> Self {
        let preprocessing = PreprocessingService::new(config.preprocessing.clone());
        Self {
            recognizer,
            preprocessing,
            config,
        }
    }

    pub fn with_defaults(recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self::new(recognizer, PipelineConfig::default())
    }

    /// Run the full extraction pipeline on one scorecard photo.
    ///
    /// Undecodable bytes are the only terminal failure. A failed or timed-out
    /// recognizer degrades to a placeholder round with an explanatory note;
    /// everything downstream of recognition is deterministic normalization.
    pub async fn scan(&self, image_bytes: &[u8]) -> Result<RoundSummary, PipelineError> {
        let image = image::load_from_memory(image_bytes)?;
        let binarized = self.preprocessing.preprocess(&image);
        let (width, height) = binarized.dimensions();
        debug!(width, height, "preprocessed scorecard image");

        let (record, totals, totals_match_card) = match self.recognize_bounded(binarized).await {
            Ok(raw_text) => Self::assemble(raw_text),
            Err(err) => {
                warn!(error = %err, "recognizer failed, substituting placeholder round");
                Self::fallback(&err)
            }
        };

        Ok(RoundSummary::new(
            record,
            totals,
            totals_match_card,
            self.config.pars,
        ))
    }

    /// Call the recognizer on a blocking task, bounded by the configured
    /// timeout. An unresponsive backend must never stall the caller, so
    /// expiry is reported as an ordinary recognizer error.
    async fn recognize_bounded(&self, image: DynamicImage) -> Result<String, RecognizerError> {
        let recognizer = Arc::clone(&self.recognizer);
        let timeout = Duration::from_millis(self.config.recognizer_timeout_ms);

        let task = tokio::task::spawn_blocking(move || recognizer.recognize(&image));
        match tokio::time::timeout(timeout, task).await {
            Err(_) => Err(RecognizerError::Timeout(timeout)),
            Ok(Err(join_err)) => Err(RecognizerError::Unavailable(join_err.to_string())),
            Ok(Ok(result)) => result,
        }
    }

    /// Deterministic normalization: raw text → validated 18-slot record.
    fn assemble(raw_text: String) -> (RoundRecord, RoundTotals, bool) {
        let pools = classifier::classify(&raw_text);
        let marks = normalizer::normalize_marks(&pools.mark_glyphs);
        let (fairway_marks, green_marks) = aligner::align_marks(&marks);

        let mut record = RoundRecord {
            scores: aligner::align_numeric(&pools.scores),
            putts: aligner::align_numeric(&pools.putts),
            fairway_marks,
            green_marks,
            raw_text,
            validation_notes: Vec::new(),
        };
        let (totals, totals_match_card) = validator::validate(&mut record, &pools.declared_totals);
        (record, totals, totals_match_card)
    }

    fn fallback(err: &RecognizerError) -> (RoundRecord, RoundTotals, bool) {
        let mut record = RoundRecord::placeholder();
        record.validation_notes.push(format!(
            "Text recognition unavailable ({}); returning placeholder round.",
            err
        ));
        let (totals, totals_match_card) = validator::validate(&mut record, &[]);
        (record, totals, totals_match_card)
    }
}
