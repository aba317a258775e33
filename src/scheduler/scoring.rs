use super::{util, ScoreWeights};
use crate::model::{Assignments, RunningTotals, ShiftToFill, StaffId};
use rand::Rng;

/// Candidat noté pour un créneau ; score plus haut = préféré.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ScoredCandidate {
    pub(super) staff: StaffId,
    pub(super) score: f64,
}

/// Note les candidats puis les trie par score décroissant.
///
/// Les moyennes portent sur tout le roster présent dans `totals`,
/// pas seulement sur les candidats.
pub(super) fn rank<R: Rng>(
    candidates: &[&StaffId],
    shift: &ShiftToFill,
    assignments: &Assignments,
    totals: &RunningTotals,
    weights: &ScoreWeights,
    rng: &mut R,
) -> Vec<ScoredCandidate> {
    let avg_hours = totals.average_hours();
    let avg_shifts = totals.average_shifts();

    let mut scored: Vec<ScoredCandidate> = candidates
        .iter()
        .map(|&staff| {
            let base = hour_balance(totals.hours_of(staff), avg_hours, weights)
                + shift_balance(totals.shifts_of(staff), avg_shifts, weights)
                + fatigue(staff, shift, assignments, weights)
                + weekend_rotation(staff, shift, assignments, weights);
            ScoredCandidate {
                staff: staff.clone(),
                score: base + noise(weights, rng),
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

fn hour_balance(hours: f64, avg_hours: f64, weights: &ScoreWeights) -> f64 {
    -weights.hours * (hours - avg_hours)
}

fn shift_balance(shifts: u32, avg_shifts: f64, weights: &ScoreWeights) -> f64 {
    -weights.shifts * (f64::from(shifts) - avg_shifts)
}

fn fatigue(
    staff: &StaffId,
    shift: &ShiftToFill,
    assignments: &Assignments,
    weights: &ScoreWeights,
) -> f64 {
    let (prev, next) = util::adjacent_days(shift.date);
    let worked = |day: Option<_>| day.is_some_and(|d| assignments.has_any_on(staff, d));
    match (worked(prev), worked(next)) {
        (true, true) => weights.fatigue_both_sides,
        (true, false) | (false, true) => weights.fatigue_one_side,
        (false, false) => weights.fatigue_rested,
    }
}

fn weekend_rotation(
    staff: &StaffId,
    shift: &ShiftToFill,
    assignments: &Assignments,
    weights: &ScoreWeights,
) -> f64 {
    if !shift.is_weekend() {
        return 0.0;
    }
    -weights.weekend * assignments.weekend_count_for(staff) as f64
}

fn noise<R: Rng>(weights: &ScoreWeights, rng: &mut R) -> f64 {
    if weights.noise > 0.0 {
        rng.random_range(0.0..weights.noise)
    } else {
        0.0
    }
}
