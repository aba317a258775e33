use super::{candidates, GenerateOptions};
use crate::model::{Assignments, ScheduleInput, ShiftToFill};
use std::cmp::Ordering;

/// Trie les créneaux du plus difficile au plus facile à pourvoir.
///
/// Le nombre de candidats est calculé une seule fois, avant la boucle
/// d'affectation, sur l'état `assignments` fourni.
pub(super) fn prioritize<'a>(
    input: &'a ScheduleInput,
    assignments: &Assignments,
    opts: &GenerateOptions,
) -> Vec<&'a ShiftToFill> {
    let mut keyed: Vec<(usize, &ShiftToFill)> = input
        .shifts
        .iter()
        .map(|shift| (candidates::eligible(input, shift, assignments, opts).len(), shift))
        .collect();

    // sort_by est stable : à égalité complète l'ordre d'entrée est conservé
    keyed.sort_by(|(count_a, a), (count_b, b)| harder_first(*count_a, a, *count_b, b));
    keyed.into_iter().map(|(_, shift)| shift).collect()
}

fn harder_first(count_a: usize, a: &ShiftToFill, count_b: usize, b: &ShiftToFill) -> Ordering {
    count_a
        .cmp(&count_b)
        .then_with(|| b.required.cmp(&a.required))
        .then_with(|| b.is_weekend().cmp(&a.is_weekend()))
        .then_with(|| a.date.cmp(&b.date))
}
