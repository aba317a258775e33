use crate::model::{Assignments, Severity, ShiftToFill, Staff, Warning, WarningKind};
use crate::notification::MessageRenderer;

/// Contrôle après affectation d'un créneau : `None` si l'effectif est atteint.
pub(super) fn understaffed(
    shift: &ShiftToFill,
    assigned: u32,
    renderer: &dyn MessageRenderer,
) -> Option<Warning> {
    if assigned >= shift.required {
        return None;
    }
    let shortfall = shift.required - assigned;
    let severity = if shortfall >= 2 {
        Severity::Critical
    } else {
        Severity::Warning
    };
    Some(Warning {
        message: renderer.understaffed(shift, assigned),
        kind: WarningKind::Understaffed {
            shift: shift.clone(),
            assigned,
            required: shift.required,
        },
        severity,
    })
}

/// Passe finale : une alerte `info` par personne sans aucun créneau.
pub(super) fn idle_staff(
    staff: &[Staff],
    assignments: &Assignments,
    renderer: &dyn MessageRenderer,
) -> Vec<Warning> {
    staff
        .iter()
        .filter(|member| assignments.count_for(&member.id) == 0)
        .map(|member| Warning {
            kind: WarningKind::NoShifts {
                staff_id: member.id.clone(),
            },
            severity: Severity::Info,
            message: renderer.no_shifts(member),
        })
        .collect()
}
