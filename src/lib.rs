#![forbid(unsafe_code)]
//! Shiftfill — moteur d'affectation du personnel aux créneaux d'une semaine.
//!
//! - Priorisation des créneaux les plus difficiles à pourvoir.
//! - Score d'équité (heures, nombre de créneaux, fatigue, week-ends).
//! - Alertes de sous-effectif et statistiques de couverture/équité.
//! - Passe gloutonne unique, sans état entre deux appels ; départage aléatoire injectable.

pub mod io;
pub mod model;
pub mod notification;
pub mod scheduler;
pub mod storage;
pub mod template;

pub use model::{
    Assignments, Availability, PriorLoad, RunningTotals, ScheduleInput, ScheduleOutcome,
    Severity, ShiftTemplateId, ShiftToFill, Staff, StaffId, Statistics, Warning, WarningKind,
};
pub use notification::{render_summary, Locale, MessageRenderer, TextMessages};
pub use scheduler::{GenerateOptions, SchedError, Scheduler, ScoreWeights};
pub use storage::{JsonStorage, Storage, WeekPlan};
pub use template::{expand_week, load_template_set, ShiftTemplate, TemplateSet};
