use regex::Regex;
use tracing::debug;

use super::normalizer::is_mark_glyph;
use crate::models::round::HOLES;

/// Eligibility band for hole scores.
pub const MIN_SCORE: u32 = 3;
pub const MAX_SCORE: u32 = 9;

/// Eligibility band for per-hole putt counts.
pub const MIN_PUTTS: u32 = 1;
pub const MAX_PUTTS: u32 = 3;

/// Band for a handwritten 18-hole total declared on the card. Disjoint from
/// the score and putt bands, so a token is never both a hole value and a total.
const MIN_CARD_TOTAL: u32 = 40;
const MAX_CARD_TOTAL: u32 = 160;

/// Token pools built from one left-to-right pass over the raw text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenPools {
    /// First 18 score-eligible values, in order of appearance.
    pub scores: Vec<u32>,
    /// First 18 putt-eligible values, in order of appearance.
    pub putts: Vec<u32>,
    /// Candidate card totals, for the validator's cross-check.
    pub declared_totals: Vec<u32>,
    /// Mark glyphs in order of appearance, not yet normalized.
    pub mark_glyphs: Vec<char>,
}

/// Scan raw recognizer text into classified token pools.
///
/// Numeric tokens are maximal digit runs. The score and putt pools are derived
/// independently from the same token stream: a `3` is eligible for both (a
/// par-3 score and a three-putt are indistinguishable on the card), so it
/// joins both pools. Each numeric pool stops at 18 entries.
///
/// Mark glyphs are collected character by character, not as token runs, into a
/// single ordered sequence; characters outside the supported glyph alphabet
/// are dropped here.
pub fn classify(text: &str) -> TokenPools {
    let re = Regex::new(r"\d+").unwrap();
    let mut pools = TokenPools::default();

    for token in re.find_iter(text) {
        // Absurdly long runs (smudges, overflow) are skipped, not truncated.
        let Ok(value) = token.as_str().parse::<u32>() else {
            continue;
        };

        if (MIN_SCORE..=MAX_SCORE).contains(&value) && pools.scores.len() < HOLES {
            pools.scores.push(value);
        }
        if (MIN_PUTTS..=MAX_PUTTS).contains(&value) && pools.putts.len() < HOLES {
            pools.putts.push(value);
        }
        if (MIN_CARD_TOTAL..=MAX_CARD_TOTAL).contains(&value) {
            pools.declared_totals.push(value);
        }
    }

    for c in text.chars() {
        if is_mark_glyph(c) {
            pools.mark_glyphs.push(c);
        }
    }

    debug!(
        scores = pools.scores.len(),
        putts = pools.putts.len(),
        totals = pools.declared_totals.len(),
        glyphs = pools.mark_glyphs.len(),
        "classified raw text"
    );

    pools
}
