use crate::notification::Locale;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pondérations du score d'équité
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Pénalité par heure au-dessus de la moyenne du roster.
    pub hours: f64,
    /// Pénalité par créneau au-dessus de la moyenne du roster.
    pub shifts: f64,
    pub fatigue_both_sides: f64,
    pub fatigue_one_side: f64,
    pub fatigue_rested: f64,
    /// Pénalité par créneau de week-end déjà affecté.
    pub weekend: f64,
    /// Amplitude du bruit de départage, tiré dans `[0, noise)`.
    pub noise: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            hours: 10.0,
            shifts: 5.0,
            fatigue_both_sides: -15.0,
            fatigue_one_side: -5.0,
            fatigue_rested: 10.0,
            weekend: 20.0,
            noise: 2.0,
        }
    }
}

/// Options de génération
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    pub allow_multiple_shifts_per_day: bool,
    pub weights: ScoreWeights,
    /// Graine du départage ; `None` = générateur du thread.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub locale: Locale,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            allow_multiple_shifts_per_day: true,
            weights: ScoreWeights::default(),
            seed: None,
            locale: Locale::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid duration for shift: {0}")]
    InvalidDuration(String),
    #[error("duplicate shift: {0}")]
    DuplicateShift(String),
    #[error("duplicate staff id: {0}")]
    DuplicateStaff(String),
    #[error("availability references staff outside the roster: {0}")]
    UnknownStaff(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
