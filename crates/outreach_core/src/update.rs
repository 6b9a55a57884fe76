use engine_logging::{engine_info, engine_warn};

use crate::{
    CancelAck, Effect, Msg, PanelState, PendingRequest, RunPhase, StartAck, CANCEL_FAILED_MESSAGE,
    START_FAILED_MESSAGE, VALIDATION_MESSAGE,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PanelState, msg: Msg) -> (PanelState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(text) => {
            state.set_query(text);
            Vec::new()
        }
        Msg::MaxPagesChanged(text) => {
            state.set_max_pages(text);
            Vec::new()
        }
        Msg::RestoreForm(snapshot) => {
            if !state.phase().is_busy() {
                state.restore_form(snapshot);
            }
            Vec::new()
        }
        Msg::StartClicked => {
            if !state.start_enabled() {
                return (state, Vec::new());
            }
            state.reset_status();
            match state.form().validate() {
                Ok(form) => {
                    engine_info!(
                        "Start requested query_len={} max_pages={}",
                        form.query.len(),
                        form.max_pages
                    );
                    state.begin(
                        PendingRequest::Start,
                        format!(
                            "Starting automation for '{}' ({} pages)...",
                            form.query, form.max_pages
                        ),
                    );
                    vec![
                        Effect::PersistForm(state.form_snapshot()),
                        Effect::SendStart {
                            query: form.query,
                            max_pages: form.max_pages,
                        },
                    ]
                }
                Err(err) => {
                    engine_info!("Start rejected: {}", err);
                    state.fail(VALIDATION_MESSAGE);
                    Vec::new()
                }
            }
        }
        Msg::CancelClicked => {
            if state.cancel_enabled() {
                state.begin(
                    PendingRequest::Cancel,
                    "Cancelling automation...".to_string(),
                );
                vec![Effect::SendCancel]
            } else {
                Vec::new()
            }
        }
        Msg::StartFinished(result) => {
            if state.phase() != RunPhase::Running(PendingRequest::Start) {
                engine_warn!("Ignoring start reply while {:?}", state.phase());
                return (state, Vec::new());
            }
            apply_start_reply(&mut state, result);
            Vec::new()
        }
        Msg::CancelFinished(result) => {
            if state.phase() != RunPhase::Running(PendingRequest::Cancel) {
                engine_warn!("Ignoring cancel reply while {:?}", state.phase());
                return (state, Vec::new());
            }
            apply_cancel_reply(&mut state, result);
            Vec::new()
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}

fn apply_start_reply(state: &mut PanelState, result: Result<StartAck, crate::FailureKind>) {
    match result {
        Ok(StartAck {
            message: Some(message),
            actions_completed,
        }) if !message.trim().is_empty() => {
            let count = actions_completed.unwrap_or(0);
            engine_info!("Start completed actions_completed={}", count);
            state.complete(message, count);
        }
        Ok(_) => {
            engine_warn!("Start reply carried no status message");
            state.fail(START_FAILED_MESSAGE);
        }
        Err(kind) => {
            engine_warn!("Start failed: {}", kind);
            state.fail(START_FAILED_MESSAGE);
        }
    }
}

fn apply_cancel_reply(state: &mut PanelState, result: Result<CancelAck, crate::FailureKind>) {
    match result {
        Ok(ack) => {
            engine_info!("Cancel acknowledged actions_completed={:?}", ack.actions_completed);
            state.mark_cancelled(ack.actions_completed);
        }
        Err(kind) => {
            engine_warn!("Cancel failed: {}", kind);
            state.fail(CANCEL_FAILED_MESSAGE);
        }
    }
}
