use std::path::PathBuf;
use std::time::Duration;

use engine_logging::{engine_info, engine_warn};
use outreach_core::{CancelAck, Effect, FailureKind, Msg, StartAck};
use outreach_engine::{EngineError, EngineEvent, EngineHandle, ServiceError, ServiceSettings};

use super::persistence;

/// Executes core effects against the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    state_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(settings: ServiceSettings, state_dir: PathBuf) -> Result<Self, EngineError> {
        Ok(Self::with_engine(EngineHandle::new(settings)?, state_dir))
    }

    pub fn with_engine(engine: EngineHandle, state_dir: PathBuf) -> Self {
        Self { engine, state_dir }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendStart { query, max_pages } => {
                    engine_info!(
                        "SendStart query_len={} max_pages={}",
                        query.len(),
                        max_pages
                    );
                    self.engine.start(query, max_pages);
                }
                Effect::SendCancel => {
                    engine_info!("SendCancel");
                    self.engine.cancel();
                }
                Effect::PersistForm(snapshot) => {
                    persistence::save_form(&self.state_dir, &snapshot);
                }
            }
        }
    }

    /// Drains every engine event that is ready without blocking.
    pub fn poll(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(map_event)
            .collect()
    }

    pub fn wait(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::StartFinished(result) => Msg::StartFinished(
            result
                .map(|reply| StartAck {
                    message: reply.message,
                    actions_completed: reply.connections_sent,
                })
                .map_err(|err| map_failure(&err)),
        ),
        EngineEvent::CancelFinished(result) => Msg::CancelFinished(
            result
                .map(|reply| CancelAck {
                    actions_completed: reply.connections_sent,
                })
                .map_err(|err| map_failure(&err)),
        ),
    }
}

fn map_failure(err: &ServiceError) -> FailureKind {
    engine_warn!("Automation service call failed: {}", err);
    match err {
        ServiceError::Timeout => FailureKind::Timeout,
        ServiceError::HttpStatus(code) => FailureKind::HttpStatus(*code),
        ServiceError::ResponseShape(_) => FailureKind::ResponseShape,
        ServiceError::InvalidUrl(_) | ServiceError::Request(_) | ServiceError::Network(_) => {
            FailureKind::Network
        }
    }
}
