//! Session-scoped analysis context.

use std::sync::Arc;
use std::time::Instant;

use once_cell::sync::OnceCell;
use tracing::info;

use conjoint_core::config::ConjointConfig;
use conjoint_core::errors::{EngineError, ErrorCode};
use conjoint_core::events::types::{DatasetGeneratedEvent, ErrorEvent, SharesEstimatedEvent};
use conjoint_core::events::{ConjointEventHandler, EventDispatcher};
use conjoint_core::space::AttributeSpace;

use crate::shares::{Scenario, ScenarioShare, ShareEstimator};
use crate::simulation::{ChoiceSimulator, ChoiceTask, DatasetSummary};

/// The session context presentation collaborators hold.
///
/// Owns the attribute space, the configuration, the lazily generated cached
/// dataset, and the editable scenario list. The dataset is generated once on
/// first access and never mutated afterwards; scenarios are edited in place
/// between share estimations by the single logical editor of the session.
pub struct AnalysisSession {
    config: ConjointConfig,
    space: AttributeSpace,
    events: EventDispatcher,
    dataset: OnceCell<Vec<ChoiceTask>>,
    scenarios: Vec<Scenario>,
}

impl AnalysisSession {
    /// Create a session with the given configuration and the default
    /// scenario pair.
    pub fn new(config: ConjointConfig) -> Self {
        Self {
            config,
            space: AttributeSpace::new(),
            events: EventDispatcher::new(),
            dataset: OnceCell::new(),
            scenarios: Scenario::default_pair(),
        }
    }

    /// Register an event handler observing this session.
    pub fn register_handler(&mut self, handler: Arc<dyn ConjointEventHandler>) {
        self.events.register(handler);
    }

    /// The attribute space backing this session.
    pub fn space(&self) -> &AttributeSpace {
        &self.space
    }

    /// The session configuration.
    pub fn config(&self) -> &ConjointConfig {
        &self.config
    }

    /// The simulated choice-task dataset, generated on first access and
    /// cached for the session lifetime.
    pub fn dataset(&self) -> Result<&[ChoiceTask], EngineError> {
        let dataset = self.dataset.get_or_try_init(|| self.generate_dataset())?;
        Ok(dataset.as_slice())
    }

    /// Display metrics over the cached dataset.
    pub fn summary(&self) -> Result<DatasetSummary, EngineError> {
        Ok(DatasetSummary::from_tasks(self.dataset()?))
    }

    /// Predict market shares for an arbitrary scenario set.
    pub fn estimate_market_share(
        &self,
        scenarios: &[Scenario],
    ) -> Result<Vec<ScenarioShare>, EngineError> {
        let estimator = ShareEstimator::from_config(&self.config.shares);
        let shares = estimator.estimate(&self.space, scenarios).map_err(|e| {
            self.emit_error(&e);
            EngineError::from(e)
        })?;
        self.events.emit_shares_estimated(&SharesEstimatedEvent {
            scenario_count: scenarios.len(),
            percentages: shares.iter().map(|share| share.percentage).collect(),
        });
        Ok(shares)
    }

    /// Predict market shares for the session's own scenarios.
    pub fn estimate_current(&self) -> Result<Vec<ScenarioShare>, EngineError> {
        self.estimate_market_share(&self.scenarios)
    }

    /// The session's editable scenarios.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Mutable access for the editing collaborator.
    pub fn scenarios_mut(&mut self) -> &mut Vec<Scenario> {
        &mut self.scenarios
    }

    fn generate_dataset(&self) -> Result<Vec<ChoiceTask>, EngineError> {
        let simulation = &self.config.simulation;
        let simulator = ChoiceSimulator::from_config(simulation);
        let started = Instant::now();
        let dataset = simulator.generate(&self.space).map_err(|e| {
            self.emit_error(&e);
            EngineError::from(e)
        })?;

        let event = DatasetGeneratedEvent {
            respondents: simulation.effective_respondents(),
            tasks_per_respondent: simulation.effective_tasks_per_respondent(),
            task_count: dataset.len(),
            duration_ms: started.elapsed().as_millis() as u64,
        };
        info!(
            task_count = event.task_count,
            duration_ms = event.duration_ms,
            "dataset ready"
        );
        self.events.emit_dataset_generated(&event);
        Ok(dataset)
    }

    fn emit_error<E>(&self, error: &E)
    where
        E: ErrorCode + std::fmt::Display,
    {
        self.events.emit_error(&ErrorEvent {
            message: error.to_string(),
            error_code: error.error_code().to_string(),
        });
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new(ConjointConfig::default())
    }
}
