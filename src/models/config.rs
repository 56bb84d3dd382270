use serde::{Deserialize, Serialize};

use crate::models::round::{CARD_PARS, HOLES};

/// Image preprocessing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreprocessingConfig {
    pub scale_factor: f64,
    pub apply_blur: bool,
    pub blur_radius: u32,
}

impl Default for PreprocessingConfig {
    fn default() -> Self {
        Self {
            scale_factor: 2.0,
            apply_blur: false,
            blur_radius: 1,
        }
    }
}

/// Scan pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineConfig {
    /// Upper bound on one recognizer call. Expiry is treated exactly like a
    /// recognizer failure (placeholder round plus advisory note).
    pub recognizer_timeout_ms: u64,
    pub preprocessing: PreprocessingConfig,
    /// Par layout used for per-hole reporting and strokes-gained arithmetic.
    pub pars: [u32; HOLES],
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            recognizer_timeout_ms: 5_000,
            preprocessing: PreprocessingConfig::default(),
            pars: CARD_PARS,
        }
    }
}
