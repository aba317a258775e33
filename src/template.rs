use crate::model::{ShiftTemplateId, ShiftToFill};
use crate::scheduler::util;
use anyhow::{bail, Context, Result};
use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Jeu de modèles de créneaux d'un établissement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSet {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub templates: Vec<ShiftTemplate>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl TemplateSet {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            bail!("template set id cannot be empty");
        }
        if self.name.trim().is_empty() {
            bail!("template set name cannot be empty");
        }
        if self.templates.is_empty() {
            bail!("template set must contain at least one shift template");
        }
        for (i, template) in self.templates.iter().enumerate() {
            template.validate()?;
            if self.templates[..i].iter().any(|t| t.id == template.id) {
                bail!("duplicate shift template id {}", template.id.as_str());
            }
        }
        Ok(())
    }
}

/// Définition réutilisable d'un créneau (ex. "matin 07:00-15:00").
///
/// Les chevauchements entre modèles distincts sont permis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftTemplate {
    pub id: ShiftTemplateId,
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default = "default_required")]
    pub required: u32,
    /// Jours couverts : 0 = dimanche .. 6 = samedi.
    pub days: Vec<u8>,
}

fn default_required() -> u32 {
    1
}

impl ShiftTemplate {
    fn validate(&self) -> Result<()> {
        if self.id.as_str().trim().is_empty() {
            bail!("shift template id cannot be empty");
        }
        if self.name.trim().is_empty() {
            bail!("shift template name cannot be empty");
        }
        if self.days.is_empty() {
            bail!("shift template {} must define at least one day", self.id.as_str());
        }
        if let Some(day) = self.days.iter().find(|d| **d > 6) {
            bail!("shift template {}: invalid day {day} (expected 0..=6)", self.id.as_str());
        }
        if self.start_time == self.end_time {
            bail!("shift template {}: start_time and end_time cannot be equal", self.id.as_str());
        }
        Ok(())
    }

    /// Durée en heures, y compris pour un créneau de nuit.
    pub fn duration_hours(&self) -> f64 {
        util::span_hours(self.start_time, self.end_time)
    }

    fn covers(&self, date: NaiveDate) -> bool {
        let dow = date.weekday().num_days_from_sunday();
        self.days.iter().any(|d| u32::from(*d) == dow)
    }
}

/// Charge et valide un jeu de modèles JSON.
pub fn load_template_set<P: AsRef<Path>>(path: P) -> Result<TemplateSet> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading template set {}", path.display()))?;
    let set: TemplateSet = serde_json::from_slice(&data)
        .with_context(|| format!("parsing template set {}", path.display()))?;
    set.validate()?;
    Ok(set)
}

/// Déplie un jeu de modèles sur les 7 jours à partir de `week_start`,
/// en ordre de date puis d'ordre des modèles.
pub fn expand_week(set: &TemplateSet, week_start: NaiveDate) -> Result<Vec<ShiftToFill>> {
    set.validate()?;
    let mut out = Vec::new();
    for offset in 0..7 {
        let date = week_start
            .checked_add_signed(Duration::days(offset))
            .context("date overflow")?;
        for template in set.templates.iter().filter(|t| t.covers(date)) {
            out.push(ShiftToFill {
                date,
                shift_template_id: template.id.clone(),
                shift_name: template.name.clone(),
                required: template.required,
                duration_hours: template.duration_hours(),
            });
        }
    }
    Ok(out)
}
