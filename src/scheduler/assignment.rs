use super::scoring::{self, ScoredCandidate};
use super::{candidates, priority, stats, warnings, Scheduler};
use crate::model::{Assignments, RunningTotals, ScheduleInput, ScheduleOutcome, ShiftToFill};
use crate::notification::MessageRenderer;
use rand::Rng;
use tracing::{debug, info, warn};

/// Passe gloutonne unique : priorisation, puis filtre → score → affectation
/// pour chaque créneau, sans retour arrière.
pub(super) fn run<R: Rng>(
    scheduler: &Scheduler,
    input: &ScheduleInput,
    rng: &mut R,
    renderer: &dyn MessageRenderer,
) -> ScheduleOutcome {
    let opts = scheduler.options();
    let mut assignments = Assignments::default();
    let mut totals = RunningTotals::for_roster(&input.staff, &input.prior);
    let mut alerts = Vec::new();

    info!(
        shifts = input.shifts.len(),
        staff = input.staff.len(),
        multi_shift = opts.allow_multiple_shifts_per_day,
        "generating schedule"
    );

    for shift in priority::prioritize(input, &assignments, opts) {
        let eligible = candidates::eligible(input, shift, &assignments, opts);
        let ranked = scoring::rank(
            &eligible,
            shift,
            &assignments,
            &totals,
            &opts.weights,
            rng,
        );
        let assigned = commit(shift, &ranked, &mut assignments, &mut totals);
        debug!(
            date = %shift.date,
            shift = shift.shift_template_id.as_str(),
            candidates = eligible.len(),
            assigned,
            required = shift.required,
            "shift processed"
        );

        if let Some(alert) = warnings::understaffed(shift, assigned, renderer) {
            warn!(
                date = %shift.date,
                shift = shift.shift_template_id.as_str(),
                assigned,
                required = shift.required,
                "understaffed shift"
            );
            alerts.push(alert);
        }
    }

    alerts.extend(warnings::idle_staff(&input.staff, &assignments, renderer));
    let stats = stats::compute(&assignments, &totals, &input.shifts);

    info!(
        filled = stats.total_shifts_filled,
        required = stats.total_shifts_required,
        coverage = stats.coverage_percent,
        fairness = stats.fairness_score,
        warnings = alerts.len(),
        "schedule generated"
    );

    ScheduleOutcome {
        assignments,
        warnings: alerts,
        stats,
        staff_hours: totals.hours,
        staff_shift_count: totals.shifts,
    }
}

/// Affecte les `min(required, candidats)` meilleurs et met à jour les cumuls.
///
/// Retourne le nombre d'affectations réellement ajoutées.
fn commit(
    shift: &ShiftToFill,
    ranked: &[ScoredCandidate],
    assignments: &mut Assignments,
    totals: &mut RunningTotals,
) -> u32 {
    let take = ranked.len().min(shift.required as usize);
    let mut assigned = 0;
    for chosen in &ranked[..take] {
        let added = assignments.push(
            chosen.staff.clone(),
            shift.date,
            shift.shift_template_id.clone(),
        );
        if added {
            totals.record(&chosen.staff, shift.duration_hours);
            assigned += 1;
        }
    }
    assigned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Staff, StaffId};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    #[test]
    fn commit_takes_top_candidates_only() {
        let roster = vec![
            Staff::with_id("a", "A"),
            Staff::with_id("b", "B"),
            Staff::with_id("c", "C"),
        ];
        let mut totals = RunningTotals::for_roster(&roster, &BTreeMap::new());
        let mut assignments = Assignments::default();
        let shift = ShiftToFill::new(NaiveDate::from_ymd_opt(2025, 10, 6).unwrap(), "am", "Matin", 2, 6.5);
        let ranked: Vec<ScoredCandidate> = ["c", "a", "b"]
            .iter()
            .zip([30.0, 20.0, 10.0])
            .map(|(id, score)| ScoredCandidate {
                staff: StaffId::new(id),
                score,
            })
            .collect();

        let n = commit(&shift, &ranked, &mut assignments, &mut totals);
        assert_eq!(n, 2);
        assert_eq!(assignments.count_for(&StaffId::new("c")), 1);
        assert_eq!(assignments.count_for(&StaffId::new("a")), 1);
        assert_eq!(assignments.count_for(&StaffId::new("b")), 0);
        assert_eq!(totals.hours_of(&StaffId::new("c")), 6.5);
        assert_eq!(totals.shifts_of(&StaffId::new("a")), 1);
    }

    #[test]
    fn commit_ignores_duplicate_candidates() {
        let roster = vec![Staff::with_id("a", "A")];
        let mut totals = RunningTotals::for_roster(&roster, &BTreeMap::new());
        let mut assignments = Assignments::default();
        let shift = ShiftToFill::new(NaiveDate::from_ymd_opt(2025, 10, 6).unwrap(), "am", "Matin", 2, 8.0);
        let ranked = vec![
            ScoredCandidate {
                staff: StaffId::new("a"),
                score: 10.0,
            };
            2
        ];

        assert_eq!(commit(&shift, &ranked, &mut assignments, &mut totals), 1);
        assert_eq!(assignments.total(), 1);
        assert_eq!(totals.hours_of(&StaffId::new("a")), 8.0);
        assert_eq!(totals.shifts_of(&StaffId::new("a")), 1);
    }
}
