use crate::models::round::MarkSymbol;

/// Map one recognized glyph to its canonical mark.
///
/// The table is total over the supported glyph alphabet; anything outside it
/// returns `None` and is dropped by the classifier before alignment, so no
/// "unknown" mark ever enters a record. Defaulting an unmarked hole slot to
/// `Empty` is the aligner's job, not this table's.
pub fn normalize_glyph(glyph: char) -> Option<MarkSymbol> {
    match glyph {
        '✓' | '✔' | '√' => Some(MarkSymbol::Hit),
        'x' | 'X' | '✗' | '✘' | '×' => Some(MarkSymbol::MissGeneric),
        '→' | '>' => Some(MarkSymbol::Right),
        '←' | '<' => Some(MarkSymbol::Left),
        '↑' | '^' => Some(MarkSymbol::Long),
        '↓' | 'v' => Some(MarkSymbol::Short),
        _ => None,
    }
}

/// Whether a character belongs to the supported mark-glyph alphabet.
pub fn is_mark_glyph(glyph: char) -> bool {
    normalize_glyph(glyph).is_some()
}

/// Normalize an ordered glyph sequence, preserving order.
pub fn normalize_marks(glyphs: &[char]) -> Vec<MarkSymbol> {
    glyphs.iter().filter_map(|&g| normalize_glyph(g)).collect()
}
