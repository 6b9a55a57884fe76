use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use outreach_core::{Msg, PanelViewModel};

/// Which form field receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Query,
    MaxPages,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Query => Focus::MaxPages,
            Focus::MaxPages => Focus::Query,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(Msg),
    SwitchFocus,
    Quit,
    Ignore,
}

pub fn map_key(key: KeyEvent, focus: Focus, view: &PanelViewModel) -> KeyAction {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => KeyAction::Quit,
        (KeyCode::Char('x'), KeyModifiers::CONTROL) => KeyAction::Dispatch(Msg::CancelClicked),
        (KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down, _) => {
            KeyAction::SwitchFocus
        }
        (KeyCode::Enter, _) => KeyAction::Dispatch(Msg::StartClicked),
        (KeyCode::Backspace, _) => edit(focus, view, |text| {
            text.pop();
        }),
        (KeyCode::Char(c), modifiers)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            edit(focus, view, |text| text.push(c))
        }
        _ => KeyAction::Ignore,
    }
}

fn edit(focus: Focus, view: &PanelViewModel, apply: impl FnOnce(&mut String)) -> KeyAction {
    match focus {
        Focus::Query => {
            let mut text = view.query.clone();
            apply(&mut text);
            KeyAction::Dispatch(Msg::QueryChanged(text))
        }
        Focus::MaxPages => {
            let mut text = view.max_pages.clone();
            apply(&mut text);
            KeyAction::Dispatch(Msg::MaxPagesChanged(text))
        }
    }
}
