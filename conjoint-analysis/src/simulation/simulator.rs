//! The choice simulator.

use tracing::debug;

use conjoint_core::config::SimulationConfig;
use conjoint_core::constants::{DEFAULT_NOISE_AMPLITUDE, OPTIONS_PER_TASK};
use conjoint_core::errors::SimulationError;
use conjoint_core::space::AttributeSpace;
use conjoint_core::types::ProductProfile;

use super::sampler::Lcg;
use super::types::{ChoiceOption, ChoiceTask};

/// Generates a synthetic panel of discrete-choice observations.
///
/// Each task presents three options whose attribute levels are sampled
/// independently and uniformly, with replacement; duplicate options are
/// allowed to compete. The simulated respondent picks the option with the
/// greatest noisy utility, first occurrence winning exact ties.
pub struct ChoiceSimulator {
    respondents: u32,
    tasks_per_respondent: u32,
    noise_amplitude: f64,
    /// Random seed for reproducibility (None = non-deterministic).
    seed: Option<u64>,
}

impl ChoiceSimulator {
    /// Create a simulator for the given panel dimensions.
    pub fn new(respondents: u32, tasks_per_respondent: u32) -> Self {
        Self {
            respondents,
            tasks_per_respondent,
            noise_amplitude: DEFAULT_NOISE_AMPLITUDE,
            seed: None,
        }
    }

    /// Create a simulator from configuration.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            respondents: config.effective_respondents(),
            tasks_per_respondent: config.effective_tasks_per_respondent(),
            noise_amplitude: config.effective_noise_amplitude(),
            seed: config.seed,
        }
    }

    /// Set a deterministic seed for reproducible generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the noise amplitude.
    pub fn with_noise_amplitude(mut self, amplitude: f64) -> Self {
        self.noise_amplitude = amplitude;
        self
    }

    /// Generate the panel, respondent-major and task-minor.
    ///
    /// The output length is exactly `respondents * tasks_per_respondent`.
    /// Fails if either panel dimension is zero.
    pub fn generate(&self, space: &AttributeSpace) -> Result<Vec<ChoiceTask>, SimulationError> {
        if self.respondents == 0 {
            return Err(SimulationError::InvalidRespondentCount {
                given: self.respondents,
            });
        }
        if self.tasks_per_respondent == 0 {
            return Err(SimulationError::InvalidTaskCount {
                given: self.tasks_per_respondent,
            });
        }

        let mut rng = Lcg::new(self.seed.unwrap_or_else(|| self.fallback_seed()));
        let total = self.respondents as usize * self.tasks_per_respondent as usize;
        let mut dataset = Vec::with_capacity(total);

        for respondent_id in 0..self.respondents {
            for task_id in 0..self.tasks_per_respondent {
                dataset.push(self.generate_task(space, &mut rng, respondent_id, task_id));
            }
        }

        debug!(
            respondents = self.respondents,
            tasks_per_respondent = self.tasks_per_respondent,
            task_count = dataset.len(),
            "generated choice panel"
        );
        Ok(dataset)
    }

    /// Generate one task: sample three options, compute noisy utilities,
    /// record the stable argmax as the choice.
    fn generate_task(
        &self,
        space: &AttributeSpace,
        rng: &mut Lcg,
        respondent_id: u32,
        task_id: u32,
    ) -> ChoiceTask {
        let mut utilities = [0.0_f64; OPTIONS_PER_TASK];
        let options: [ChoiceOption; OPTIONS_PER_TASK] = std::array::from_fn(|position| {
            let (price, price_utility) = *rng.choose(space.price_partworths());
            let (ads, ads_utility) = *rng.choose(space.ad_partworths());
            let (quality, quality_utility) = *rng.choose(space.quality_partworths());
            let (screens, screens_utility) = *rng.choose(space.screen_partworths());

            utilities[position] = price_utility
                + ads_utility
                + quality_utility
                + screens_utility
                + rng.noise(self.noise_amplitude);

            ChoiceOption {
                id: position as u8,
                profile: ProductProfile::new(price, ads, quality, screens),
            }
        });

        // Stable argmax: strictly-greater comparison, lowest index wins ties.
        let mut chosen_index = 0;
        for (position, utility) in utilities.iter().enumerate().skip(1) {
            if *utility > utilities[chosen_index] {
                chosen_index = position;
            }
        }

        ChoiceTask {
            respondent_id,
            task_id,
            options,
            chosen_index,
        }
    }

    /// Derive a seed from the panel parameters when none was supplied.
    fn fallback_seed(&self) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        h = h.wrapping_mul(0x100000001b3).wrapping_add(self.respondents as u64);
        h = h
            .wrapping_mul(0x100000001b3)
            .wrapping_add(self.tasks_per_respondent as u64);
        h = h
            .wrapping_mul(0x100000001b3)
            .wrapping_add(self.noise_amplitude.to_bits());
        h
    }
}
