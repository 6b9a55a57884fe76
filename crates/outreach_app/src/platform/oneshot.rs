use std::process::ExitCode;
use std::time::Duration;

use engine_logging::engine_error;
use outreach_core::{Msg, PanelViewModel, RunPhase};

use super::app::PanelSession;
use super::effects::EffectRunner;

/// Extra wait on top of the HTTP timeout so a timed-out request still
/// arrives as a reply rather than as silence.
const REPLY_GRACE: Duration = Duration::from_secs(5);

/// Runs one start request through the panel state machine and prints the outcome.
pub(crate) fn run_start(
    runner: &EffectRunner,
    query: String,
    max_pages: String,
    request_timeout: Duration,
) -> anyhow::Result<ExitCode> {
    let mut session = PanelSession::new(runner);
    session.dispatch(Msg::QueryChanged(query));
    session.dispatch(Msg::MaxPagesChanged(max_pages));
    session.dispatch(Msg::StartClicked);

    if session.view().busy {
        println!("{}", format_outcome(&session.view()));
        let deadline = request_timeout.saturating_add(REPLY_GRACE);
        match runner.wait(deadline) {
            Some(msg) => {
                session.dispatch(msg);
            }
            None => {
                engine_error!("No reply within {:?}", deadline);
                anyhow::bail!("no reply from the automation service within {deadline:?}");
            }
        }
    }

    let view = session.view();
    println!("{}", format_outcome(&view));
    Ok(if view.phase == RunPhase::Errored {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn format_outcome(view: &PanelViewModel) -> String {
    let mut text = format!(
        "[{}] {}",
        view.phase.label(),
        view.message.as_deref().unwrap_or("")
    );
    if let Some(banner) = &view.completion_banner {
        text.push('\n');
        text.push_str(banner);
    }
    text
}
