use crate::view_model::{PanelViewModel, Severity};
use crate::ValidationError;

pub const VALIDATION_MESSAGE: &str =
    "Please enter a valid search query and number of pages (greater than 0).";
pub const START_FAILED_MESSAGE: &str = "Failed to start automation.";
pub const CANCELLED_MESSAGE: &str = "Automation cancelled.";
pub const CANCEL_FAILED_MESSAGE: &str = "Failed to cancel automation.";

/// The request currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingRequest {
    Start,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    #[default]
    Idle,
    Running(PendingRequest),
    Cancelled,
    Completed,
    Errored,
}

impl RunPhase {
    pub fn is_busy(self) -> bool {
        matches!(self, RunPhase::Running(_))
    }

    pub fn label(self) -> &'static str {
        match self {
            RunPhase::Idle => "Idle",
            RunPhase::Running(PendingRequest::Start) => "Running",
            RunPhase::Running(PendingRequest::Cancel) => "Cancelling",
            RunPhase::Cancelled => "Cancelled",
            RunPhase::Completed => "Completed",
            RunPhase::Errored => "Error",
        }
    }
}

/// Form inputs exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub query: String,
    pub max_pages: String,
}

/// A form that passed validation and may be sent to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedForm {
    pub query: String,
    pub max_pages: u32,
}

impl FormState {
    pub fn validate(&self) -> Result<ValidatedForm, ValidationError> {
        let query = self.query.trim();
        if query.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        let max_pages = self
            .max_pages
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|pages| *pages >= 1)
            .ok_or(ValidationError::InvalidPageCount)?;
        Ok(ValidatedForm {
            query: query.to_string(),
            max_pages,
        })
    }
}

/// Persistable copy of the form, used to prefill the next session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSnapshot {
    pub query: String,
    pub max_pages: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunStatus {
    pub phase: RunPhase,
    pub message: String,
    pub severity: Severity,
    pub actions_completed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelState {
    form: FormState,
    status: RunStatus,
    dirty: bool,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn status(&self) -> &RunStatus {
        &self.status
    }

    pub fn phase(&self) -> RunPhase {
        self.status.phase
    }

    pub fn start_enabled(&self) -> bool {
        !self.status.phase.is_busy()
    }

    /// Cancel only makes sense once a run has been attempted and has not
    /// already been cancelled.
    pub fn cancel_enabled(&self) -> bool {
        matches!(
            self.status.phase,
            RunPhase::Completed | RunPhase::Errored
        )
    }

    pub fn form_snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            query: self.form.query.clone(),
            max_pages: self.form.max_pages.clone(),
        }
    }

    pub fn view(&self) -> PanelViewModel {
        let completion_banner = (self.status.phase == RunPhase::Completed
            && self.status.actions_completed > 0)
            .then(|| {
                format!(
                    "{} connection requests sent successfully!",
                    self.status.actions_completed
                )
            });

        PanelViewModel {
            query: self.form.query.clone(),
            max_pages: self.form.max_pages.clone(),
            phase: self.status.phase,
            message: (!self.status.message.is_empty()).then(|| self.status.message.clone()),
            severity: self.status.severity,
            actions_completed: self.status.actions_completed,
            start_enabled: self.start_enabled(),
            cancel_enabled: self.cancel_enabled(),
            busy: self.status.phase.is_busy(),
            completion_banner,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.form.query != query {
            self.form.query = query;
            self.dirty = true;
        }
    }

    pub(crate) fn set_max_pages(&mut self, max_pages: String) {
        if self.form.max_pages != max_pages {
            self.form.max_pages = max_pages;
            self.dirty = true;
        }
    }

    pub(crate) fn restore_form(&mut self, snapshot: FormSnapshot) {
        self.set_query(snapshot.query);
        self.set_max_pages(snapshot.max_pages);
    }

    pub(crate) fn reset_status(&mut self) {
        self.status = RunStatus::default();
        self.dirty = true;
    }

    pub(crate) fn begin(&mut self, request: PendingRequest, message: String) {
        self.status.phase = RunPhase::Running(request);
        self.status.message = message;
        self.status.severity = Severity::Info;
        self.dirty = true;
    }

    pub(crate) fn complete(&mut self, message: String, actions_completed: u32) {
        self.status.phase = RunPhase::Completed;
        self.status.message = message;
        self.status.severity = Severity::Success;
        self.status.actions_completed = actions_completed;
        self.dirty = true;
    }

    pub(crate) fn mark_cancelled(&mut self, actions_completed: Option<u32>) {
        self.status.phase = RunPhase::Cancelled;
        self.status.message = CANCELLED_MESSAGE.to_string();
        self.status.severity = Severity::Warning;
        if let Some(count) = actions_completed {
            self.status.actions_completed = count;
        }
        self.dirty = true;
    }

    pub(crate) fn fail(&mut self, message: &str) {
        self.status.phase = RunPhase::Errored;
        self.status.message = message.to_string();
        self.status.severity = Severity::Error;
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(query: &str, max_pages: &str) -> FormState {
        FormState {
            query: query.to_string(),
            max_pages: max_pages.to_string(),
        }
    }

    #[test]
    fn validate_trims_query_and_parses_pages() {
        let valid = form("  HR recruiters ", " 3 ").validate().unwrap();
        assert_eq!(valid.query, "HR recruiters");
        assert_eq!(valid.max_pages, 3);
    }

    #[test]
    fn validate_rejects_bad_page_counts() {
        for pages in ["", "0", "-2", "2.5", "abc", "99999999999"] {
            assert_eq!(
                form("q", pages).validate(),
                Err(ValidationError::InvalidPageCount),
                "pages={pages:?}"
            );
        }
    }

    #[test]
    fn validate_checks_query_first() {
        assert_eq!(
            form("   ", "0").validate(),
            Err(ValidationError::EmptyQuery)
        );
    }
}
