pub mod analysis;
pub mod ocr;
pub mod pipeline;
pub mod strokes;
