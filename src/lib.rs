pub mod error;
pub mod models;
pub mod services;

pub use error::{PipelineError, RecognizerError};
pub use models::config::{PipelineConfig, PreprocessingConfig};
pub use models::round::{
    HoleEntry, MarkSymbol, RoundRecord, RoundSummary, RoundTotals, CARD_PARS, HOLES,
};
pub use services::analysis::{analyze_patterns, RoundPatterns};
pub use services::ocr::{HttpRecognizer, PreprocessingService, TextRecognizer};
pub use services::pipeline::ScorecardPipeline;
pub use services::strokes::{compute_strokes_gained, StrokesGained};
