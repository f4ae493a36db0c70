//! Choice-task panel types.

use serde::{Deserialize, Serialize};

use conjoint_core::constants::OPTIONS_PER_TASK;
use conjoint_core::types::ProductProfile;

/// One candidate option within a choice task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Position of the option within its task (0-based).
    pub id: u8,
    /// The sampled product configuration.
    #[serde(flatten)]
    pub profile: ProductProfile,
}

/// One simulated respondent-task observation.
///
/// Created only by the simulator and immutable once created. Tasks are
/// ordered respondent-major, task-minor in the generated dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceTask {
    /// Respondent identifier, `0..respondents`.
    pub respondent_id: u32,
    /// Task identifier within the respondent, `0..tasks_per_respondent`.
    pub task_id: u32,
    /// The three candidate options, in presentation order.
    pub options: [ChoiceOption; OPTIONS_PER_TASK],
    /// Index into `options` of the utility-maximizing choice.
    pub chosen_index: usize,
}

/// Aggregate metrics over a generated dataset, for dashboard display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Number of simulated respondents.
    pub respondents: u32,
    /// Choice tasks per respondent.
    pub tasks_per_respondent: u32,
    /// Total observed choice tasks.
    pub task_count: usize,
    /// How often each option position was chosen, indexed by position.
    pub position_counts: [usize; OPTIONS_PER_TASK],
}

impl DatasetSummary {
    /// Compute display metrics from a generated dataset.
    pub fn from_tasks(tasks: &[ChoiceTask]) -> Self {
        let mut position_counts = [0usize; OPTIONS_PER_TASK];
        let mut respondents = 0u32;
        let mut tasks_per_respondent = 0u32;
        for task in tasks {
            respondents = respondents.max(task.respondent_id + 1);
            tasks_per_respondent = tasks_per_respondent.max(task.task_id + 1);
            if let Some(count) = position_counts.get_mut(task.chosen_index) {
                *count += 1;
            }
        }
        Self {
            respondents,
            tasks_per_respondent,
            task_count: tasks.len(),
            position_counts,
        }
    }
}
