use super::util::round_tenth;
use crate::model::{Assignments, RunningTotals, ShiftToFill, Statistics};

/// Calcule couverture et équité sur l'état final.
pub(super) fn compute(
    assignments: &Assignments,
    totals: &RunningTotals,
    shifts: &[ShiftToFill],
) -> Statistics {
    let filled = u32::try_from(assignments.total()).unwrap_or(u32::MAX);
    let required: u32 = shifts.iter().map(|s| s.required).sum();
    let coverage_percent = if required == 0 {
        0.0
    } else {
        (f64::from(filled) / f64::from(required) * 1000.0).round() / 10.0
    };

    let hours: Vec<f64> = totals.hours.values().copied().collect();
    let shifts_per_staff: Vec<u32> = totals.shifts.values().copied().collect();

    let (min_hours, max_hours, avg_hours) = spread(&hours);
    let counts: Vec<f64> = shifts_per_staff.iter().map(|&n| f64::from(n)).collect();
    let (_, _, avg_shifts) = spread(&counts);
    let min_shifts = shifts_per_staff.iter().copied().min().unwrap_or(0);
    let max_shifts = shifts_per_staff.iter().copied().max().unwrap_or(0);

    let hours_variance = max_hours - min_hours;
    let shifts_variance = max_shifts - min_shifts;

    Statistics {
        total_shifts_filled: filled,
        total_shifts_required: required,
        coverage_percent,
        avg_hours_per_staff: round_tenth(avg_hours),
        min_hours,
        max_hours,
        hours_variance,
        avg_shifts_per_staff: round_tenth(avg_shifts),
        min_shifts,
        max_shifts,
        shifts_variance,
        fairness_score: fairness_score(hours_variance, shifts_variance),
    }
}

/// (min, max, moyenne) ; zéros pour une liste vide.
fn spread(values: &[f64]) -> (f64, f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0, 0.0);
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = values.iter().sum::<f64>() / values.len() as f64;
    (min, max, avg)
}

fn fairness_score(hours_variance: f64, shifts_variance: u32) -> u8 {
    let raw = 100.0 - hours_variance * 2.0 - f64::from(shifts_variance) * 5.0;
    // NaN est ramené à 0 par le cast saturant
    raw.clamp(0.0, 100.0).round() as u8
}
