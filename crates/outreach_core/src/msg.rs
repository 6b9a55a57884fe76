use crate::{FailureKind, FormSnapshot};

/// Reply to a start request, as decoded by the engine.
///
/// `message` stays optional here: deciding that a reply without a status
/// message is a failure belongs to the state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StartAck {
    pub message: Option<String>,
    pub actions_completed: Option<u32>,
}

/// Reply to a cancel request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CancelAck {
    pub actions_completed: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search query field.
    QueryChanged(String),
    /// User edited the page count field (raw text, parsed on submit).
    MaxPagesChanged(String),
    /// User pressed Start.
    StartClicked,
    /// User pressed Cancel.
    CancelClicked,
    /// The automation service answered (or failed to answer) a start request.
    StartFinished(Result<StartAck, FailureKind>),
    /// The automation service answered (or failed to answer) a cancel request.
    CancelFinished(Result<CancelAck, FailureKind>),
    /// Prefill the form from a previous session.
    RestoreForm(FormSnapshot),
    /// UI/render tick to coalesce rendering.
    Tick,
}
