//! Outreach core: pure control-panel state machine and view-model helpers.
mod effect;
mod error;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use error::{FailureKind, ValidationError};
pub use msg::{CancelAck, Msg, StartAck};
pub use state::{
    FormSnapshot, FormState, PanelState, PendingRequest, RunPhase, RunStatus, ValidatedForm,
    CANCEL_FAILED_MESSAGE, CANCELLED_MESSAGE, START_FAILED_MESSAGE, VALIDATION_MESSAGE,
};
pub use update::update;
pub use view_model::{PanelViewModel, Severity};
