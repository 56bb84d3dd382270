use serde::{Deserialize, Serialize};

use crate::models::round::HOLES;

/// Strokes-gained estimate for one round, split by facet of the game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrokesGained {
    pub sg_off_tee: f64,
    pub sg_approach: f64,
    pub sg_around_green: f64,
    pub sg_putting: f64,
    pub sg_total: f64,
    pub per_hole: Vec<HoleToPar>,
}

/// Per-hole score relative to par.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HoleToPar {
    pub hole: u32,
    pub score: u32,
    pub par: u32,
    pub to_par: i32,
}

/// Compute the strokes-gained breakdown from a normalized round.
///
/// Coarse model: the putting term rewards low putt totals, the other three
/// terms charge a fraction of over-par strokes to the segment of the round
/// where they happened (holes 1-4 off the tee, 5-10 approach, 11-18 around
/// the green).
pub fn compute_strokes_gained(
    scores: &[u32; HOLES],
    putts: &[u32; HOLES],
    pars: &[u32; HOLES],
) -> StrokesGained {
    let diff: Vec<i32> = scores
        .iter()
        .zip(pars)
        .map(|(&s, &p)| s as i32 - p as i32)
        .collect();

    let total_putts: u32 = putts.iter().sum();
    let sg_putting = (2.0 - 0.1 * f64::from(total_putts)).max(0.0);
    let sg_off_tee = -0.05 * f64::from(diff[..4].iter().sum::<i32>());
    let sg_approach = -0.03 * f64::from(diff[4..10].iter().sum::<i32>());
    let sg_around_green = -0.02 * f64::from(diff[10..].iter().sum::<i32>());

    let per_hole = (0..HOLES)
        .map(|i| HoleToPar {
            hole: (i + 1) as u32,
            score: scores[i],
            par: pars[i],
            to_par: diff[i],
        })
        .collect();

    StrokesGained {
        sg_off_tee,
        sg_approach,
        sg_around_green,
        sg_putting,
        sg_total: sg_putting + sg_off_tee + sg_approach + sg_around_green,
        per_hole,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::round::CARD_PARS;

    #[test]
    fn test_even_par_round_gains_nothing_from_play() {
        let sg = compute_strokes_gained(&CARD_PARS, &[2; HOLES], &CARD_PARS);
        assert_eq!(sg.sg_off_tee, 0.0);
        assert_eq!(sg.sg_approach, 0.0);
        assert_eq!(sg.sg_around_green, 0.0);
        assert!(sg.per_hole.iter().all(|h| h.to_par == 0));
    }

    #[test]
    fn test_putting_term_floors_at_zero() {
        // 36 putts: 2.0 - 3.6 would be negative, clamps to 0.
        let sg = compute_strokes_gained(&CARD_PARS, &[2; HOLES], &CARD_PARS);
        assert_eq!(sg.sg_putting, 0.0);

        // 18 putts: 2.0 - 1.8 = 0.2.
        let sg = compute_strokes_gained(&CARD_PARS, &[1; HOLES], &CARD_PARS);
        assert!((sg.sg_putting - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_over_par_holes_charge_their_segment() {
        let mut scores = CARD_PARS;
        scores[0] += 2; // off-tee segment
        scores[5] += 1; // approach segment
        scores[17] += 3; // around-green segment

        let sg = compute_strokes_gained(&scores, &[2; HOLES], &CARD_PARS);
        assert!((sg.sg_off_tee - (-0.10)).abs() < 1e-9);
        assert!((sg.sg_approach - (-0.03)).abs() < 1e-9);
        assert!((sg.sg_around_green - (-0.06)).abs() < 1e-9);
    }

    #[test]
    fn test_total_is_sum_of_terms() {
        let scores = [5u32; HOLES];
        let sg = compute_strokes_gained(&scores, &[2; HOLES], &CARD_PARS);
        let expected = sg.sg_putting + sg.sg_off_tee + sg.sg_approach + sg.sg_around_green;
        assert!((sg.sg_total - expected).abs() < 1e-9);
    }

    #[test]
    fn test_per_hole_breakdown() {
        let mut scores = CARD_PARS;
        scores[2] += 1;
        let sg = compute_strokes_gained(&scores, &[2; HOLES], &CARD_PARS);

        assert_eq!(sg.per_hole.len(), HOLES);
        assert_eq!(sg.per_hole[2].hole, 3);
        assert_eq!(sg.per_hole[2].to_par, 1);
        assert_eq!(sg.per_hole[0].to_par, 0);
    }
}
