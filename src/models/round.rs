use serde::{Deserialize, Serialize};

/// Number of holes on a regulation scorecard.
pub const HOLES: usize = 18;

/// Par layout printed on the card this service was built for.
pub const CARD_PARS: [u32; HOLES] = [4, 5, 4, 4, 4, 3, 5, 3, 4, 4, 5, 4, 4, 3, 4, 4, 4, 4];

/// Canonical mark symbol - closed set that every recognized glyph variant
/// normalizes into. `Empty` means no mark was present or recognized.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum MarkSymbol {
    Hit,
    #[serde(rename = "Miss-Generic")]
    MissGeneric,
    Left,
    Right,
    Long,
    Short,
    #[default]
    Empty,
}

impl MarkSymbol {
    /// Canonical symbols are fixed points of normalization.
    pub fn canonical(self) -> Self {
        self
    }

    /// Lowercase miss direction for per-hole reporting. `None` for marks
    /// that carry no direction (hit, generic miss, empty).
    pub fn direction(self) -> Option<&'static str> {
        match self {
            Self::Left => Some("left"),
            Self::Right => Some("right"),
            Self::Long => Some("long"),
            Self::Short => Some("short"),
            Self::Hit | Self::MissGeneric | Self::Empty => None,
        }
    }
}

/// Normalized record extracted from one scorecard photo.
/// All four arrays are always exactly 18 slots, whatever the recognizer
/// returned; unresolved slots hold the field default (0 or Empty).
#[derive(Debug, Clone, PartialEq)]
pub struct RoundRecord {
    pub scores: [u32; HOLES],
    pub putts: [u32; HOLES],
    pub fairway_marks: [MarkSymbol; HOLES],
    pub green_marks: [MarkSymbol; HOLES],
    /// Unmodified recognizer output, retained for auditing.
    pub raw_text: String,
    /// Advisory notes. Never cause the record to be discarded.
    pub validation_notes: Vec<String>,
}

impl RoundRecord {
    /// Empty record for the given raw text (all slots defaulted).
    pub fn empty(raw_text: String) -> Self {
        Self {
            scores: [0; HOLES],
            putts: [0; HOLES],
            fairway_marks: [MarkSymbol::Empty; HOLES],
            green_marks: [MarkSymbol::Empty; HOLES],
            raw_text,
            validation_notes: Vec::new(),
        }
    }

    /// Plausible placeholder round, substituted when the recognition
    /// backend is unavailable so the caller always gets a valid shape.
    pub fn placeholder() -> Self {
        Self {
            scores: [4, 6, 4, 4, 4, 3, 4, 3, 5, 3, 5, 4, 4, 3, 4, 3, 4, 4],
            putts: [2, 2, 2, 1, 1, 1, 1, 2, 2, 1, 2, 1, 2, 1, 1, 1, 1, 2],
            fairway_marks: [MarkSymbol::Empty; HOLES],
            green_marks: [MarkSymbol::Empty; HOLES],
            raw_text: String::new(),
            validation_notes: Vec::new(),
        }
    }
}

/// Derived aggregates. `front9_total + back9_total == total` by construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundTotals {
    pub front9_total: u32,
    pub back9_total: u32,
    pub total: u32,
    pub front9_putts: u32,
    pub back9_putts: u32,
    pub total_putts: u32,
}

/// Per-hole breakdown for the boundary payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HoleEntry {
    pub hole: u32,
    pub score: u32,
    pub par: u32,
    pub putts: u32,
    pub fairway_mark: MarkSymbol,
    pub green_mark: MarkSymbol,
    pub miss_direction: String,
}

/// Serialized boundary object handed to collaborators (HTTP layer, storage).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundSummary {
    pub scores: [u32; HOLES],
    pub putts: [u32; HOLES],
    pub fairways: [MarkSymbol; HOLES],
    pub greens: [MarkSymbol; HOLES],
    pub pars: [u32; HOLES],
    pub per_hole: Vec<HoleEntry>,
    #[serde(flatten)]
    pub totals: RoundTotals,
    pub totals_match_card: bool,
    pub validation_notes: Vec<String>,
    #[serde(rename = "rawText")]
    pub raw_text: String,
}

impl RoundSummary {
    /// Assemble the boundary payload from a validated record.
    pub fn new(
        record: RoundRecord,
        totals: RoundTotals,
        totals_match_card: bool,
        pars: [u32; HOLES],
    ) -> Self {
        let per_hole = (0..HOLES)
            .map(|i| HoleEntry {
                hole: (i + 1) as u32,
                score: record.scores[i],
                par: pars[i],
                putts: record.putts[i],
                fairway_mark: record.fairway_marks[i],
                green_mark: record.green_marks[i],
                miss_direction: record.green_marks[i]
                    .direction()
                    .unwrap_or("unknown")
                    .to_string(),
            })
            .collect();

        Self {
            scores: record.scores,
            putts: record.putts,
            fairways: record.fairway_marks,
            greens: record.green_marks,
            pars,
            per_hole,
            totals,
            totals_match_card,
            validation_notes: record.validation_notes,
            raw_text: record.raw_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_totals() -> RoundTotals {
        RoundTotals {
            front9_total: 0,
            back9_total: 0,
            total: 0,
            front9_putts: 0,
            back9_putts: 0,
            total_putts: 0,
        }
    }

    #[test]
    fn test_mark_symbol_defaults_to_empty() {
        assert_eq!(MarkSymbol::default(), MarkSymbol::Empty);
    }

    #[test]
    fn test_mark_symbol_serializes_canonical_names() {
        let json = serde_json::to_string(&MarkSymbol::MissGeneric).unwrap();
        assert_eq!(json, "\"Miss-Generic\"", "hyphenated canonical name");

        let json = serde_json::to_string(&MarkSymbol::Hit).unwrap();
        assert_eq!(json, "\"Hit\"");
    }

    #[test]
    fn test_mark_symbol_directions() {
        assert_eq!(MarkSymbol::Left.direction(), Some("left"));
        assert_eq!(MarkSymbol::Short.direction(), Some("short"));
        assert_eq!(MarkSymbol::Hit.direction(), None);
        assert_eq!(MarkSymbol::Empty.direction(), None);
    }

    #[test]
    fn test_empty_record_shape() {
        let record = RoundRecord::empty("".to_string());
        assert_eq!(record.scores, [0; HOLES]);
        assert_eq!(record.putts, [0; HOLES]);
        assert!(record.fairway_marks.iter().all(|&m| m == MarkSymbol::Empty));
        assert!(record.green_marks.iter().all(|&m| m == MarkSymbol::Empty));
        assert!(record.validation_notes.is_empty());
    }

    #[test]
    fn test_placeholder_record_is_plausible() {
        let record = RoundRecord::placeholder();
        assert!(
            record.scores.iter().all(|&s| (3..=9).contains(&s)),
            "placeholder scores should sit in the believable band"
        );
        assert!(record.putts.iter().all(|&p| (1..=3).contains(&p)));
    }

    #[test]
    fn test_summary_json_keys() {
        let record = RoundRecord::empty("4 5".to_string());
        let summary = RoundSummary::new(record, zero_totals(), true, CARD_PARS);
        let value = serde_json::to_value(&summary).unwrap();

        // Boundary schema: snake_case everywhere except the legacy rawText key.
        assert!(value.get("rawText").is_some());
        assert!(value.get("raw_text").is_none());
        assert!(value.get("front9_total").is_some(), "totals are flattened");
        assert!(value.get("validation_notes").is_some());
        assert_eq!(value["per_hole"].as_array().unwrap().len(), HOLES);
        assert_eq!(value["per_hole"][0]["hole"], 1);
        assert_eq!(value["per_hole"][0]["miss_direction"], "unknown");
    }

    #[test]
    fn test_per_hole_miss_direction_follows_green_mark() {
        let mut record = RoundRecord::empty(String::new());
        record.green_marks[0] = MarkSymbol::Right;
        record.green_marks[1] = MarkSymbol::Hit;
        let summary = RoundSummary::new(record, zero_totals(), true, CARD_PARS);
        assert_eq!(summary.per_hole[0].miss_direction, "right");
        assert_eq!(summary.per_hole[1].miss_direction, "unknown");
    }
}
