use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::engine_info;

use crate::client::{AutomationClient, ReqwestAutomationClient, ServiceSettings};
use crate::{EngineError, EngineEvent, StartRequest};

enum EngineCommand {
    Start(StartRequest),
    Cancel,
}

/// Runs service calls on a background runtime and reports completions.
///
/// Requests are never aborted: a cancel is sent as its own call while any
/// earlier start keeps running to completion.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ServiceSettings) -> Result<Self, EngineError> {
        engine_info!("Automation service at {}", settings.base_url);
        let client = ReqwestAutomationClient::new(settings)?;
        Self::with_client(Arc::new(client))
    }

    pub fn with_client(client: Arc<dyn AutomationClient>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("outreach-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let client = client.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(client.as_ref(), command, event_tx).await;
                    });
                }
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn start(&self, query: impl Into<String>, max_pages: u32) {
        let _ = self.cmd_tx.send(EngineCommand::Start(StartRequest {
            query: query.into(),
            max_pages,
        }));
    }

    pub fn cancel(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    client: &dyn AutomationClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Start(request) => EngineEvent::StartFinished(client.start(&request).await),
        EngineCommand::Cancel => EngineEvent::CancelFinished(client.cancel().await),
    };
    let _ = event_tx.send(event);
}
