use crate::models::round::{MarkSymbol, HOLES};

/// Assemble a fixed 18-slot array from a variable-length numeric pool:
/// first 18 pool values in order, remaining slots padded with 0.
pub fn align_numeric(pool: &[u32]) -> [u32; HOLES] {
    let mut slots = [0u32; HOLES];
    for (slot, value) in slots.iter_mut().zip(pool) {
        *slot = *value;
    }
    slots
}

/// Split the normalized mark sequence into fairway and green arrays.
///
/// Reading-order heuristic: the fairway row is assumed to be read before the
/// green row, so marks 1-18 land on fairways and marks 19-36 on greens.
/// Nothing verifies that the recognized order actually matches the card
/// layout; slots past the available marks default to `Empty`.
pub fn align_marks(marks: &[MarkSymbol]) -> ([MarkSymbol; HOLES], [MarkSymbol; HOLES]) {
    let mut fairways = [MarkSymbol::Empty; HOLES];
    let mut greens = [MarkSymbol::Empty; HOLES];

    for (slot, mark) in fairways.iter_mut().zip(marks.iter().take(HOLES)) {
        *slot = *mark;
    }
    for (slot, mark) in greens.iter_mut().zip(marks.iter().skip(HOLES)) {
        *slot = *mark;
    }

    (fairways, greens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_pool_pads_with_zero() {
        let aligned = align_numeric(&[4, 5, 3]);
        assert_eq!(&aligned[..3], &[4, 5, 3], "pool values keep their order");
        assert!(aligned[3..].iter().all(|&v| v == 0), "rest defaults to 0");
    }

    #[test]
    fn test_long_pool_truncates_to_eighteen() {
        let pool: Vec<u32> = (0..25).map(|i| 3 + (i % 7)).collect();
        let aligned = align_numeric(&pool);
        assert_eq!(aligned.len(), HOLES);
        assert_eq!(&aligned[..], &pool[..HOLES], "only the first 18 survive");
    }

    #[test]
    fn test_exact_pool_is_copied_verbatim() {
        let pool = [4u32; HOLES];
        assert_eq!(align_numeric(&pool), pool);
    }

    #[test]
    fn test_few_marks_fill_fairways_first() {
        let marks = vec![MarkSymbol::Hit, MarkSymbol::Left];
        let (fairways, greens) = align_marks(&marks);

        assert_eq!(fairways[0], MarkSymbol::Hit);
        assert_eq!(fairways[1], MarkSymbol::Left);
        assert!(fairways[2..].iter().all(|&m| m == MarkSymbol::Empty));
        assert!(greens.iter().all(|&m| m == MarkSymbol::Empty));
    }

    #[test]
    fn test_marks_past_eighteen_become_greens() {
        let mut marks = vec![MarkSymbol::Hit; HOLES];
        marks.push(MarkSymbol::Short);
        marks.push(MarkSymbol::Long);

        let (fairways, greens) = align_marks(&marks);

        assert!(fairways.iter().all(|&m| m == MarkSymbol::Hit));
        assert_eq!(greens[0], MarkSymbol::Short);
        assert_eq!(greens[1], MarkSymbol::Long);
        assert!(greens[2..].iter().all(|&m| m == MarkSymbol::Empty));
    }

    #[test]
    fn test_marks_past_thirty_six_are_dropped() {
        let marks = vec![MarkSymbol::MissGeneric; 40];
        let (fairways, greens) = align_marks(&marks);
        assert!(fairways.iter().all(|&m| m == MarkSymbol::MissGeneric));
        assert!(greens.iter().all(|&m| m == MarkSymbol::MissGeneric));
    }
}
