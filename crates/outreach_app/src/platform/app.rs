use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use chrono::Local;
use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use outreach_core::{update, Msg, PanelState, PanelViewModel};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::effects::EffectRunner;
use super::persistence;
use super::ui::input::{map_key, Focus, KeyAction};
use super::ui::render::{render, Screen};

/// Input poll interval; also paces the busy spinner.
const TICK: Duration = Duration::from_millis(75);

/// Owns the panel state and routes effects to the runner.
pub(crate) struct PanelSession<'a> {
    state: PanelState,
    runner: &'a EffectRunner,
}

impl<'a> PanelSession<'a> {
    pub(crate) fn new(runner: &'a EffectRunner) -> Self {
        Self {
            state: PanelState::new(),
            runner,
        }
    }

    pub(crate) fn runner(&self) -> &'a EffectRunner {
        self.runner
    }

    /// Applies `msg` and returns whether the view changed.
    pub(crate) fn dispatch(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);
        was_dirty
    }

    pub(crate) fn view(&self) -> PanelViewModel {
        self.state.view()
    }
}

/// Raw mode plus alternate screen; both are undone on drop, including
/// on early returns and panics.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> anyhow::Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen).context("enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}

pub(crate) fn run(runner: &EffectRunner, service_url: &str, state_dir: &Path) -> anyhow::Result<()> {
    let mut session = PanelSession::new(runner);
    if let Some(snapshot) = persistence::load_form(state_dir) {
        session.dispatch(Msg::RestoreForm(snapshot));
    }

    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    event_loop(&mut terminal, &mut session, service_url)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut PanelSession<'_>,
    service_url: &str,
) -> anyhow::Result<()> {
    let mut focus = Focus::default();
    let mut spinner_frame = 0usize;
    let mut last_reply_at: Option<String> = None;
    let mut needs_redraw = true;

    loop {
        for msg in session.runner().poll() {
            last_reply_at = Some(Local::now().format("%H:%M:%S").to_string());
            needs_redraw |= session.dispatch(msg);
        }

        let view = session.view();
        if view.busy {
            spinner_frame = spinner_frame.wrapping_add(1);
            needs_redraw = true;
        }

        if needs_redraw {
            let screen = Screen {
                view: &view,
                focus,
                spinner_frame,
                service_url,
                last_reply_at: last_reply_at.as_deref(),
            };
            terminal
                .draw(|frame| render(frame, &screen))
                .context("draw frame")?;
            needs_redraw = false;
        }

        if !event::poll(TICK).context("poll event")? {
            continue;
        }

        match event::read().context("read event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match map_key(key, focus, &view) {
                    KeyAction::Quit => return Ok(()),
                    KeyAction::SwitchFocus => {
                        focus = focus.next();
                        needs_redraw = true;
                    }
                    KeyAction::Dispatch(msg) => {
                        needs_redraw |= session.dispatch(msg);
                    }
                    KeyAction::Ignore => {}
                }
            }
            Event::Resize(_, _) => needs_redraw = true,
            _ => {}
        }
    }
}
