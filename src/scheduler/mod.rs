mod assignment;
mod candidates;
mod priority;
mod scoring;
mod stats;
mod types;
pub(crate) mod util;
mod warnings;

pub use types::{GenerateOptions, SchedError, ScoreWeights};

use crate::model::{Assignments, ScheduleInput, ScheduleOutcome, ShiftToFill, StaffId};
use crate::notification::{MessageRenderer, TextMessages};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Scheduler : configuration immuable d'une génération de planning.
///
/// Aucun état ne survit entre deux appels ; une même instance peut servir
/// plusieurs générations en parallèle.
#[derive(Debug, Default, Clone)]
pub struct Scheduler {
    opts: GenerateOptions,
}

impl Scheduler {
    pub fn new(opts: GenerateOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.opts
    }

    /// Génère le planning ; départage graine `opts.seed` si présente,
    /// sinon générateur du thread.
    pub fn generate(&self, input: &ScheduleInput) -> ScheduleOutcome {
        match self.opts.seed {
            Some(seed) => self.generate_with_rng(input, &mut StdRng::seed_from_u64(seed)),
            None => self.generate_with_rng(input, &mut rand::rng()),
        }
    }

    pub fn generate_with_rng<R: Rng>(&self, input: &ScheduleInput, rng: &mut R) -> ScheduleOutcome {
        let renderer = TextMessages::new(self.opts.locale);
        self.generate_with(input, rng, &renderer)
    }

    /// Variante complète : source aléatoire et rendu des messages injectés.
    pub fn generate_with<R: Rng>(
        &self,
        input: &ScheduleInput,
        rng: &mut R,
        renderer: &dyn MessageRenderer,
    ) -> ScheduleOutcome {
        assignment::run(self, input, rng, renderer)
    }

    /// Personnes pouvant prendre `shift` compte tenu de `assignments`.
    pub fn eligible_candidates<'a>(
        &self,
        input: &'a ScheduleInput,
        shift: &ShiftToFill,
        assignments: &Assignments,
    ) -> Vec<&'a StaffId> {
        candidates::eligible(input, shift, assignments, &self.opts)
    }

    /// Ordre de traitement des créneaux (plus difficile d'abord).
    pub fn prioritized<'a>(&self, input: &'a ScheduleInput) -> Vec<&'a ShiftToFill> {
        priority::prioritize(input, &Assignments::default(), &self.opts)
    }
}
