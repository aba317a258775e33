use crate::model::{ScheduleInput, ScheduleOutcome, Severity, ShiftToFill, Staff};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Langue des libellés (jours, messages d'alerte, résumé).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    /// Libellé du jour ; `dow` : 0 = dimanche .. 6 = samedi.
    pub fn day_label(self, dow: u32) -> &'static str {
        const FR: [&str; 7] = [
            "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
        ];
        const EN: [&str; 7] = [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ];
        let idx = (dow % 7) as usize;
        match self {
            Locale::Fr => FR[idx],
            Locale::En => EN[idx],
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" => Ok(Locale::Fr),
            "en" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

/// Permet de customiser le texte des alertes (langue, canal, etc.).
pub trait MessageRenderer {
    fn understaffed(&self, shift: &ShiftToFill, assigned: u32) -> String;
    fn no_shifts(&self, staff: &Staff) -> String;
}

/// Messages texte courts, destinés à l'écran de l'opérateur.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextMessages {
    locale: Locale,
}

impl TextMessages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl MessageRenderer for TextMessages {
    fn understaffed(&self, shift: &ShiftToFill, assigned: u32) -> String {
        let day = self.locale.day_label(shift.day_of_week());
        match self.locale {
            Locale::Fr => format!(
                "{day} {name} : {required} requis, {assigned} affecté(s)",
                name = shift.shift_name,
                required = shift.required
            ),
            Locale::En => format!(
                "{day} {name}: {required} required, {assigned} assigned",
                name = shift.shift_name,
                required = shift.required
            ),
        }
    }

    fn no_shifts(&self, staff: &Staff) -> String {
        match self.locale {
            Locale::Fr => format!("{} n'a aucun créneau cette semaine", staff.display_name),
            Locale::En => format!("{} has no shifts this week", staff.display_name),
        }
    }
}

/// Résumé texte d'une génération : indicateurs, charge par personne, alertes.
pub fn render_summary(input: &ScheduleInput, outcome: &ScheduleOutcome, locale: Locale) -> String {
    let stats = &outcome.stats;
    let (coverage, fairness, hours, shifts, alerts, none) = match locale {
        Locale::Fr => ("Couverture", "Équité", "heures", "créneaux", "Alertes", "aucune"),
        Locale::En => ("Coverage", "Fairness", "hours", "shifts", "Warnings", "none"),
    };

    let mut lines = vec![
        format!(
            "{coverage}: {}% ({}/{})",
            stats.coverage_percent, stats.total_shifts_filled, stats.total_shifts_required
        ),
        format!("{fairness}: {}/100", stats.fairness_score),
    ];
    for member in &input.staff {
        let h = outcome.staff_hours.get(&member.id).copied().unwrap_or(0.0);
        let n = outcome.staff_shift_count.get(&member.id).copied().unwrap_or(0);
        lines.push(format!("- {}: {h} {hours}, {n} {shifts}", member.display_name));
    }
    if outcome.warnings.is_empty() {
        lines.push(format!("{alerts}: {none}"));
    } else {
        lines.push(format!("{alerts}:"));
        lines.extend(outcome.warnings.iter().map(|w| {
            let tag = match w.severity {
                Severity::Critical => "!!",
                Severity::Warning => "!",
                Severity::Info => "i",
            };
            format!("[{tag}] {}", w.message)
        }));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn localized_understaffed_messages() {
        // 2025-10-11 : samedi
        let shift = ShiftToFill::new(NaiveDate::from_ymd_opt(2025, 10, 11).unwrap(), "pm", "Soir", 3, 6.0);
        insta::assert_snapshot!(
            TextMessages::new(Locale::Fr).understaffed(&shift, 1),
            @"samedi Soir : 3 requis, 1 affecté(s)"
        );
        insta::assert_snapshot!(
            TextMessages::new(Locale::En).understaffed(&shift, 1),
            @"Saturday Soir: 3 required, 1 assigned"
        );
    }

    #[test]
    fn no_shift_message_names_staff() {
        let staff = Staff::with_id("s1", "Inès");
        assert_eq!(
            TextMessages::new(Locale::Fr).no_shifts(&staff),
            "Inès n'a aucun créneau cette semaine"
        );
    }

    #[test]
    fn locale_parses_case_insensitively() {
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(" fr ".parse::<Locale>(), Ok(Locale::Fr));
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn summary_lists_staff_and_warnings() {
        let staff = Staff::with_id("a", "Alice");
        let input = ScheduleInput {
            staff: vec![staff.clone()],
            ..ScheduleInput::default()
        };
        let mut outcome = ScheduleOutcome::default();
        outcome.stats.fairness_score = 100;
        outcome.warnings.push(crate::model::Warning {
            kind: crate::model::WarningKind::NoShifts {
                staff_id: staff.id.clone(),
            },
            severity: Severity::Info,
            message: TextMessages::new(Locale::En).no_shifts(&staff),
        });

        let text = render_summary(&input, &outcome, Locale::En);
        assert_eq!(
            text,
            "Coverage: 0% (0/0)\nFairness: 100/100\n- Alice: 0 hours, 0 shifts\nWarnings:\n[i] Alice has no shifts this week\n"
        );
    }
}
