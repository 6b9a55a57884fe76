use std::sync::Once;

use outreach_core::{
    update, Effect, FormSnapshot, Msg, PanelState, PendingRequest, RunPhase, Severity, StartAck,
    START_FAILED_MESSAGE, VALIDATION_MESSAGE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn fill_form(state: PanelState, query: &str, max_pages: &str) -> PanelState {
    let (state, _) = update(state, Msg::QueryChanged(query.to_string()));
    let (state, _) = update(state, Msg::MaxPagesChanged(max_pages.to_string()));
    state
}

fn submit(query: &str, max_pages: &str) -> (PanelState, Vec<Effect>) {
    let state = fill_form(PanelState::new(), query, max_pages);
    update(state, Msg::StartClicked)
}

#[test]
fn empty_query_shows_validation_message_without_request() {
    init_logging();
    for query in ["", "   \t "] {
        let (state, effects) = submit(query, "3");
        let view = state.view();

        assert!(effects.is_empty());
        assert_eq!(view.phase, RunPhase::Errored);
        assert_eq!(view.message.as_deref(), Some(VALIDATION_MESSAGE));
        assert_eq!(view.severity, Severity::Error);
        assert!(view.start_enabled);
    }
}

#[test]
fn non_positive_page_count_never_sends() {
    init_logging();
    for pages in ["0", "-1", "", "two"] {
        let (state, effects) = submit("HR recruiters", pages);

        assert!(effects.is_empty(), "pages={pages:?}");
        assert_eq!(state.phase(), RunPhase::Errored);
        assert_eq!(state.status().message, VALIDATION_MESSAGE);
    }
}

#[test]
fn valid_start_emits_trimmed_request_and_persists_form() {
    init_logging();
    let (state, effects) = submit("  HR recruiters  ", "2");

    assert_eq!(
        effects,
        vec![
            Effect::PersistForm(FormSnapshot {
                query: "  HR recruiters  ".to_string(),
                max_pages: "2".to_string(),
            }),
            Effect::SendStart {
                query: "HR recruiters".to_string(),
                max_pages: 2,
            },
        ]
    );
    assert_eq!(state.phase(), RunPhase::Running(PendingRequest::Start));
}

#[test]
fn start_is_blocked_while_in_flight() {
    init_logging();
    let (state, _) = submit("HR recruiters", "2");
    let view = state.view();
    assert!(view.busy);
    assert!(!view.start_enabled);
    assert!(!view.cancel_enabled);

    let (state, effects) = update(state, Msg::StartClicked);
    assert!(effects.is_empty());
    assert_eq!(state.phase(), RunPhase::Running(PendingRequest::Start));

    let (state, effects) = update(state, Msg::CancelClicked);
    assert!(effects.is_empty());
    assert_eq!(state.phase(), RunPhase::Running(PendingRequest::Start));
}

#[test]
fn successful_start_reports_message_and_count() {
    init_logging();
    let (state, _) = submit("HR recruiters", "2");
    let (state, effects) = update(
        state,
        Msg::StartFinished(Ok(StartAck {
            message: Some("OK".to_string()),
            actions_completed: Some(5),
        })),
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.phase, RunPhase::Completed);
    assert_eq!(view.severity, Severity::Success);
    assert_eq!(view.message.as_deref(), Some("OK"));
    assert_eq!(view.actions_completed, 5);
    assert_eq!(
        view.completion_banner.as_deref(),
        Some("5 connection requests sent successfully!")
    );
    assert!(view.start_enabled);
    assert!(!view.busy);
}

#[test]
fn completed_run_without_count_has_no_banner() {
    init_logging();
    let (state, _) = submit("HR recruiters", "1");
    let (state, _) = update(
        state,
        Msg::StartFinished(Ok(StartAck {
            message: Some("Automation started".to_string()),
            actions_completed: None,
        })),
    );
    let view = state.view();

    assert_eq!(view.phase, RunPhase::Completed);
    assert_eq!(view.actions_completed, 0);
    assert_eq!(view.completion_banner, None);
}

#[test]
fn start_reply_without_message_is_a_failure() {
    init_logging();
    for message in [None, Some(String::new()), Some("  ".to_string())] {
        let (state, _) = submit("HR recruiters", "2");
        let (state, _) = update(
            state,
            Msg::StartFinished(Ok(StartAck {
                message,
                actions_completed: Some(4),
            })),
        );

        assert_eq!(state.phase(), RunPhase::Errored);
        assert_eq!(state.status().message, START_FAILED_MESSAGE);
        assert_eq!(state.status().actions_completed, 0);
    }
}

#[test]
fn new_submission_resets_previous_outcome() {
    init_logging();
    let (state, _) = submit("HR recruiters", "2");
    let (state, _) = update(
        state,
        Msg::StartFinished(Ok(StartAck {
            message: Some("OK".to_string()),
            actions_completed: Some(5),
        })),
    );
    let (state, effects) = update(state, Msg::StartClicked);
    let view = state.view();

    assert_eq!(effects.len(), 2);
    assert_eq!(view.actions_completed, 0);
    assert_eq!(view.completion_banner, None);
    assert_eq!(view.phase, RunPhase::Running(PendingRequest::Start));
}

#[test]
fn restore_prefills_form_but_not_while_busy() {
    init_logging();
    let snapshot = FormSnapshot {
        query: "engineering managers".to_string(),
        max_pages: "4".to_string(),
    };

    let (mut restored, _) = update(PanelState::new(), Msg::RestoreForm(snapshot.clone()));
    assert!(restored.consume_dirty());
    assert_eq!(restored.form_snapshot(), snapshot);
    assert_eq!(restored.phase(), RunPhase::Idle);

    let (busy, _) = submit("HR recruiters", "2");
    let (busy, _) = update(busy, Msg::RestoreForm(snapshot));
    assert_eq!(busy.form().query, "HR recruiters");
}

#[test]
fn editing_marks_view_dirty_once() {
    init_logging();
    let (mut state, _) = update(PanelState::new(), Msg::QueryChanged("a".to_string()));
    assert!(state.view().dirty);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());

    let (mut state, _) = update(state, Msg::QueryChanged("a".to_string()));
    assert!(!state.consume_dirty());
}
