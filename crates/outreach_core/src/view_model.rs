use crate::RunPhase;

/// How a status message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelViewModel {
    pub query: String,
    pub max_pages: String,
    pub phase: RunPhase,
    pub message: Option<String>,
    pub severity: Severity,
    pub actions_completed: u32,
    pub start_enabled: bool,
    pub cancel_enabled: bool,
    pub busy: bool,
    /// Shown only after a completed run that sent at least one request.
    pub completion_banner: Option<String>,
    pub dirty: bool,
}
