use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use card_sync_lib::{
    analyze_patterns, compute_strokes_gained, HttpRecognizer, ScorecardPipeline, TextRecognizer,
};

const DEFAULT_OCR_URL: &str = "http://127.0.0.1:8000";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: card-sync <image-path> [ocr-base-url]");
        return ExitCode::FAILURE;
    };
    let base_url = args.next().unwrap_or_else(|| DEFAULT_OCR_URL.to_string());

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            print_error(&format!("failed to read {}: {}", path, err));
            return ExitCode::FAILURE;
        }
    };

    let recognizer = match HttpRecognizer::new(base_url) {
        Ok(recognizer) => recognizer,
        Err(err) => {
            print_error(&err.to_string());
            return ExitCode::FAILURE;
        }
    };

    let recognizer = Arc::new(recognizer);
    let probe = Arc::clone(&recognizer);
    let reachable = tokio::task::spawn_blocking(move || probe.is_available())
        .await
        .unwrap_or(false);
    if !reachable {
        tracing::warn!("OCR server is not responding; the scan will degrade to a placeholder round");
    }

    let pipeline = ScorecardPipeline::with_defaults(recognizer);
    match pipeline.scan(&bytes).await {
        Ok(summary) => {
            let strokes = compute_strokes_gained(&summary.scores, &summary.putts, &summary.pars);
            let patterns = analyze_patterns(&summary);
            let report = serde_json::json!({
                "round": summary,
                "strokes_gained": strokes,
                "patterns": patterns,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&report).expect("report serialization")
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            print_error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Structured error object: collaborators get a message, never a panic.
fn print_error(message: &str) {
    println!("{}", serde_json::json!({ "error": message }));
}
