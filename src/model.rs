use crate::scheduler::{util, SchedError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

/// Identifiant fort pour un membre du personnel
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StaffId(String);

impl StaffId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifiant fort pour un modèle de créneau réutilisable (ex. "matin")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShiftTemplateId(String);

impl ShiftTemplateId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Membre du personnel éligible
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub id: StaffId,
    pub display_name: String,
}

impl Staff {
    pub fn new<D: Into<String>>(display_name: D) -> Self {
        Self {
            id: StaffId::random(),
            display_name: display_name.into(),
        }
    }

    pub fn with_id<I: AsRef<str>, D: Into<String>>(id: I, display_name: D) -> Self {
        Self {
            id: StaffId::new(id),
            display_name: display_name.into(),
        }
    }
}

/// Besoin de personnel pour un couple (date, modèle de créneau).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftToFill {
    pub date: NaiveDate,
    pub shift_template_id: ShiftTemplateId,
    pub shift_name: String,
    pub required: u32,
    /// Durée en heures (peut être fractionnaire, ou passer minuit).
    pub duration_hours: f64,
}

impl ShiftToFill {
    pub fn new<I: AsRef<str>, N: Into<String>>(
        date: NaiveDate,
        shift_template_id: I,
        shift_name: N,
        required: u32,
        duration_hours: f64,
    ) -> Self {
        Self {
            date,
            shift_template_id: ShiftTemplateId::new(shift_template_id),
            shift_name: shift_name.into(),
            required,
            duration_hours,
        }
    }

    /// 0 = dimanche .. 6 = samedi
    pub fn day_of_week(&self) -> u32 {
        self.date.weekday().num_days_from_sunday()
    }

    pub fn is_weekend(&self) -> bool {
        util::is_weekend(self.date)
    }
}

/// Matrice de disponibilités : personne → date → modèle → booléen.
/// Une entrée absente vaut `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Availability(BTreeMap<StaffId, BTreeMap<NaiveDate, BTreeMap<ShiftTemplateId, bool>>>);

impl Availability {
    pub fn set(
        &mut self,
        staff: StaffId,
        date: NaiveDate,
        template: ShiftTemplateId,
        available: bool,
    ) {
        self.0
            .entry(staff)
            .or_default()
            .entry(date)
            .or_default()
            .insert(template, available);
    }

    pub fn is_available(&self, staff: &StaffId, date: NaiveDate, template: &ShiftTemplateId) -> bool {
        self.0
            .get(staff)
            .and_then(|days| days.get(&date))
            .and_then(|shifts| shifts.get(template))
            .copied()
            .unwrap_or(false)
    }

    pub fn staff_ids(&self) -> impl Iterator<Item = &StaffId> {
        self.0.keys()
    }

    pub fn extend(&mut self, other: Availability) {
        for (staff, days) in other.0 {
            for (date, shifts) in days {
                for (template, available) in shifts {
                    self.set(staff.clone(), date, template, available);
                }
            }
        }
    }
}

/// Affectations : personne → date → liste ordonnée de modèles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignments(BTreeMap<StaffId, BTreeMap<NaiveDate, Vec<ShiftTemplateId>>>);

impl Assignments {
    pub fn on(&self, staff: &StaffId, date: NaiveDate) -> &[ShiftTemplateId] {
        self.0
            .get(staff)
            .and_then(|days| days.get(&date))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_any_on(&self, staff: &StaffId, date: NaiveDate) -> bool {
        !self.on(staff, date).is_empty()
    }

    pub fn contains(&self, staff: &StaffId, date: NaiveDate, template: &ShiftTemplateId) -> bool {
        self.on(staff, date).contains(template)
    }

    /// Ajoute une affectation ; ignore un triplet déjà présent.
    /// Ajoute l'affectation ; `false` si elle existait déjà.
    pub fn push(&mut self, staff: StaffId, date: NaiveDate, template: ShiftTemplateId) -> bool {
        let list = self.0.entry(staff).or_default().entry(date).or_default();
        if list.contains(&template) {
            return false;
        }
        list.push(template);
        true
    }

    pub fn count_for(&self, staff: &StaffId) -> usize {
        self.0
            .get(staff)
            .map(|days| days.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Nombre d'affectations tombant un samedi ou un dimanche.
    pub fn weekend_count_for(&self, staff: &StaffId) -> usize {
        self.0
            .get(staff)
            .map(|days| {
                days.iter()
                    .filter(|(date, _)| util::is_weekend(**date))
                    .map(|(_, list)| list.len())
                    .sum()
            })
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.keys().map(|staff| self.count_for(staff)).sum()
    }

    /// Parcourt (personne, date, modèle) dans l'ordre des clés.
    pub fn iter(&self) -> impl Iterator<Item = (&StaffId, NaiveDate, &ShiftTemplateId)> {
        self.0.iter().flat_map(|(staff, days)| {
            days.iter()
                .flat_map(move |(date, list)| list.iter().map(move |t| (staff, *date, t)))
        })
    }

    pub fn staff_on_shift(&self, date: NaiveDate, template: &ShiftTemplateId) -> Vec<&StaffId> {
        self.0
            .iter()
            .filter(|(staff, _)| self.contains(staff, date, template))
            .map(|(staff, _)| staff)
            .collect()
    }
}

/// Charge déjà effectuée avant la génération (report de période).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriorLoad {
    #[serde(default)]
    pub hours: f64,
    #[serde(default)]
    pub shifts: u32,
}

/// Cumuls courants par personne, mis à jour à chaque créneau pourvu.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunningTotals {
    pub hours: BTreeMap<StaffId, f64>,
    pub shifts: BTreeMap<StaffId, u32>,
}

impl RunningTotals {
    /// Une entrée par membre du roster, initialisée au report éventuel.
    pub fn for_roster(staff: &[Staff], prior: &BTreeMap<StaffId, PriorLoad>) -> Self {
        let mut totals = Self::default();
        for member in staff {
            let load = prior.get(&member.id).copied().unwrap_or_default();
            totals.hours.insert(member.id.clone(), load.hours);
            totals.shifts.insert(member.id.clone(), load.shifts);
        }
        totals
    }

    pub fn hours_of(&self, staff: &StaffId) -> f64 {
        self.hours.get(staff).copied().unwrap_or(0.0)
    }

    pub fn shifts_of(&self, staff: &StaffId) -> u32 {
        self.shifts.get(staff).copied().unwrap_or(0)
    }

    pub fn average_hours(&self) -> f64 {
        if self.hours.is_empty() {
            return 0.0;
        }
        self.hours.values().sum::<f64>() / self.hours.len() as f64
    }

    pub fn average_shifts(&self) -> f64 {
        if self.shifts.is_empty() {
            return 0.0;
        }
        self.shifts.values().map(|&n| f64::from(n)).sum::<f64>() / self.shifts.len() as f64
    }

    pub fn record(&mut self, staff: &StaffId, hours: f64) {
        *self.hours.entry(staff.clone()).or_insert(0.0) += hours;
        *self.shifts.entry(staff.clone()).or_insert(0) += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WarningKind {
    Understaffed {
        shift: ShiftToFill,
        assigned: u32,
        required: u32,
    },
    NoShifts {
        staff_id: StaffId,
    },
}

/// Observation produite pendant la génération (jamais modifiée ensuite).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    #[serde(flatten)]
    pub kind: WarningKind,
    pub severity: Severity,
    pub message: String,
}

impl Warning {
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            WarningKind::Understaffed { .. } => "understaffed",
            WarningKind::NoShifts { .. } => "no_shifts",
        }
    }
}

/// Instantané des indicateurs de couverture et d'équité.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_shifts_filled: u32,
    pub total_shifts_required: u32,
    pub coverage_percent: f64,
    pub avg_hours_per_staff: f64,
    pub min_hours: f64,
    pub max_hours: f64,
    pub hours_variance: f64,
    pub avg_shifts_per_staff: f64,
    pub min_shifts: u32,
    pub max_shifts: u32,
    pub shifts_variance: u32,
    pub fairness_score: u8,
}

/// Entrées d'une génération
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleInput {
    #[serde(default)]
    pub shifts: Vec<ShiftToFill>,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub staff: Vec<Staff>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub prior: BTreeMap<StaffId, PriorLoad>,
}

impl ScheduleInput {
    pub fn find_staff(&self, id: &StaffId) -> Option<&Staff> {
        self.staff.iter().find(|s| &s.id == id)
    }

    pub fn find_shift(&self, date: NaiveDate, template: &ShiftTemplateId) -> Option<&ShiftToFill> {
        self.shifts
            .iter()
            .find(|s| s.date == date && &s.shift_template_id == template)
    }

    /// Vérifie la cohérence des entrées avant génération.
    pub fn validate(&self) -> Result<(), SchedError> {
        let mut seen = BTreeSet::new();
        for shift in &self.shifts {
            if !shift.duration_hours.is_finite() || shift.duration_hours < 0.0 {
                return Err(SchedError::InvalidDuration(shift.shift_name.clone()));
            }
            if !seen.insert((shift.date, shift.shift_template_id.clone())) {
                return Err(SchedError::DuplicateShift(format!(
                    "{} {}",
                    shift.date,
                    shift.shift_template_id.as_str()
                )));
            }
        }

        let mut ids = BTreeSet::new();
        for member in &self.staff {
            if !ids.insert(&member.id) {
                return Err(SchedError::DuplicateStaff(member.id.as_str().to_string()));
            }
        }

        if let Some(unknown) = self.availability.staff_ids().find(|id| !ids.contains(id)) {
            return Err(SchedError::UnknownStaff(unknown.as_str().to_string()));
        }
        Ok(())
    }
}

/// Résultat complet d'une génération
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    pub assignments: Assignments,
    pub warnings: Vec<Warning>,
    pub stats: Statistics,
    pub staff_hours: BTreeMap<StaffId, f64>,
    pub staff_shift_count: BTreeMap<StaffId, u32>,
}

impl ScheduleOutcome {
    pub fn has_critical(&self) -> bool {
        self.warnings.iter().any(|w| w.severity == Severity::Critical)
    }
}
