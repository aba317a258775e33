use super::GenerateOptions;
use crate::model::{Assignments, ScheduleInput, ShiftToFill, StaffId};
use std::collections::BTreeSet;

/// Personnes pouvant prendre `shift` dans l'état courant des affectations,
/// dans l'ordre du roster ; un identifiant répété n'apparaît qu'une fois.
pub(super) fn eligible<'a>(
    input: &'a ScheduleInput,
    shift: &ShiftToFill,
    assignments: &Assignments,
    opts: &GenerateOptions,
) -> Vec<&'a StaffId> {
    let mut seen = BTreeSet::new();
    input
        .staff
        .iter()
        .map(|member| &member.id)
        .filter(|id| seen.insert(*id))
        .filter(|id| is_eligible(input, id, shift, assignments, opts))
        .collect()
}

fn is_eligible(
    input: &ScheduleInput,
    staff: &StaffId,
    shift: &ShiftToFill,
    assignments: &Assignments,
    opts: &GenerateOptions,
) -> bool {
    if !input
        .availability
        .is_available(staff, shift.date, &shift.shift_template_id)
    {
        return false;
    }
    // Seul le triplet (personne, date, modèle) est exclu : deux modèles
    // distincts qui se chevauchent le même jour restent possibles.
    if assignments.contains(staff, shift.date, &shift.shift_template_id) {
        return false;
    }
    if !opts.allow_multiple_shifts_per_day && assignments.has_any_on(staff, shift.date) {
        return false;
    }
    true
}
