pub mod aligner;
pub mod classifier;
pub mod engine;
pub mod http_ocr;
pub mod normalizer;
pub mod preprocessing;
pub mod validator;

// Re-export main types
pub use engine::TextRecognizer;
pub use http_ocr::HttpRecognizer;
pub use preprocessing::PreprocessingService;
