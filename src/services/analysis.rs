use serde::{Deserialize, Serialize};

use crate::models::round::{MarkSymbol, RoundSummary, HOLES};

/// Directional-tendency analysis of one round's marks, with human-readable
/// commentary for the player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundPatterns {
    pub fairway_direction_tendency: String,
    pub green_direction_tendency: String,
    pub fairways_hit: u32,
    pub greens_hit: u32,
    pub commentary: Vec<String>,
}

/// Summarize the dominant miss directions in a mark sequence.
///
/// A direction counts as a tendency only when it strictly dominates its
/// opposite. Returns `"no clear directional bias"` when nothing dominates.
pub fn summarize_direction(marks: &[MarkSymbol]) -> String {
    let count = |needle: MarkSymbol| marks.iter().filter(|&&m| m == needle).count();
    let left = count(MarkSymbol::Left);
    let right = count(MarkSymbol::Right);
    let long = count(MarkSymbol::Long);
    let short = count(MarkSymbol::Short);

    let mut tendencies = Vec::new();
    if left > right && left > 0 {
        tendencies.push("left");
    }
    if right > left && right > 0 {
        tendencies.push("right");
    }
    if long > short && long > 0 {
        tendencies.push("long");
    }
    if short > long && short > 0 {
        tendencies.push("short");
    }

    if tendencies.is_empty() {
        return "no clear directional bias".to_string();
    }
    tendencies.join(", ")
}

/// Analyze a round for miss patterns and produce coaching commentary.
pub fn analyze_patterns(summary: &RoundSummary) -> RoundPatterns {
    let fw_dir = summarize_direction(&summary.fairways);
    let gr_dir = summarize_direction(&summary.greens);

    let fw_hits = summary
        .fairways
        .iter()
        .filter(|&&m| m == MarkSymbol::Hit)
        .count() as u32;
    let gr_hits = summary
        .greens
        .iter()
        .filter(|&&m| m == MarkSymbol::Hit)
        .count() as u32;

    let avg_score = f64::from(summary.totals.total) / HOLES as f64;
    let avg_putts = f64::from(summary.totals.total_putts) / HOLES as f64;

    let mut commentary = Vec::new();
    commentary.push(format!(
        "Average score: {:.1}, average putts: {:.1} per hole.",
        avg_score, avg_putts
    ));
    commentary.push(format!(
        "Fairways hit: {}/14 (approx), greens hit: {}/18 (approx).",
        fw_hits, gr_hits
    ));

    if fw_dir.contains("left") {
        commentary.push(
            "Off the tee you tend to miss left. Consider alignment or clubface adjustments."
                .to_string(),
        );
    }
    if fw_dir.contains("right") {
        commentary.push("Off the tee you tend to miss right. Check setup and path.".to_string());
    }
    if gr_dir.contains("short") {
        commentary
            .push("Approach shots often finish short. Maybe club up more frequently.".to_string());
    }
    if gr_dir.contains("long") {
        commentary
            .push("Approach shots often finish long. Check distances or wind adjustments.".to_string());
    }
    if fw_dir == "no clear directional bias" && gr_dir == "no clear directional bias" {
        commentary.push("Directional misses look reasonably balanced.".to_string());
    }

    RoundPatterns {
        fairway_direction_tendency: fw_dir,
        green_direction_tendency: gr_dir,
        fairways_hit: fw_hits,
        greens_hit: gr_hits,
        commentary,
    }
}
