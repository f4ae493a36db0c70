//! Event payload types for the engine lifecycle.

/// Payload for `on_dataset_generated`.
#[derive(Debug, Clone)]
pub struct DatasetGeneratedEvent {
    pub respondents: u32,
    pub tasks_per_respondent: u32,
    pub task_count: usize,
    pub duration_ms: u64,
}

/// Payload for `on_shares_estimated`.
#[derive(Debug, Clone)]
pub struct SharesEstimatedEvent {
    pub scenario_count: usize,
    pub percentages: Vec<u32>,
}

/// Payload for `on_error`.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub message: String,
    pub error_code: String,
}
