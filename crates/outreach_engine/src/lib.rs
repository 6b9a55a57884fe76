//! Outreach engine: automation service client and effect execution.
mod client;
mod engine;
mod persist;
mod types;

pub use client::{AutomationClient, ReqwestAutomationClient, ServiceSettings, DEFAULT_SERVICE_URL};
pub use engine::EngineHandle;
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use types::{CancelReply, EngineError, EngineEvent, ServiceError, StartReply, StartRequest};
