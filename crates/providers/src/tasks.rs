//! Task-to-model configuration.
//!
//! Which model identifier and which capabilities each operation uses is a
//! table, so the client itself stays free of task-specific knowledge.

use shared::settings::ModelConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    Summarize,
    Translate,
    Chat,
    Continuation,
}

impl Task {
    pub fn all() -> &'static [Task] {
        &[
            Task::Summarize,
            Task::Translate,
            Task::Chat,
            Task::Continuation,
        ]
    }
}

/// Resolved dispatch configuration for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskProfile {
    pub model: String,
    /// Ask the backend to consult external sources before answering.
    pub google_search: bool,
}

/// Continuation lookups need the search-capable model; everything else
/// runs on the fast one.
pub fn profile(task: Task, models: &ModelConfig) -> TaskProfile {
    match task {
        Task::Summarize | Task::Translate | Task::Chat => TaskProfile {
            model: models.flash_model.clone(),
            google_search: false,
        },
        Task::Continuation => TaskProfile {
            model: models.pro_model.clone(),
            google_search: true,
        },
    }
}
