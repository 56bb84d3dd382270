use tracing::warn;

use crate::models::round::{RoundRecord, RoundTotals};

/// Compute derived aggregates and annotate the record with advisory notes.
///
/// Validation never fails the pipeline: a mismatch between the recognized
/// holes and a total declared on the card is recorded as a note, not an
/// error. Returns the totals and whether nothing contradicted the card.
pub fn validate(record: &mut RoundRecord, declared_totals: &[u32]) -> (RoundTotals, bool) {
    let totals = compute_totals(record);
    let mut totals_match_card = true;

    if record.scores.iter().all(|&s| s == 0) && record.putts.iter().all(|&p| p == 0) {
        record
            .validation_notes
            .push("No hole data was recognized; scores and putts defaulted to 0.".to_string());
    }

    // Totals usually appear after the per-hole boxes in reading order, so the
    // last candidate is the one most likely written as the round total.
    if let Some(&declared) = declared_totals.last() {
        if declared != totals.total {
            warn!(declared, computed = totals.total, "card total mismatch");
            record.validation_notes.push(format!(
                "Card declares a total of {} but the recognized holes sum to {}.",
                declared, totals.total
            ));
            totals_match_card = false;
        }
    }

    (totals, totals_match_card)
}

fn compute_totals(record: &RoundRecord) -> RoundTotals {
    let front9_total: u32 = record.scores[..9].iter().sum();
    let back9_total: u32 = record.scores[9..].iter().sum();
    let front9_putts: u32 = record.putts[..9].iter().sum();
    let back9_putts: u32 = record.putts[9..].iter().sum();

    RoundTotals {
        front9_total,
        back9_total,
        total: front9_total + back9_total,
        front9_putts,
        back9_putts,
        total_putts: front9_putts + back9_putts,
    }
}
