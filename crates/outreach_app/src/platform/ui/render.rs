use outreach_core::{PanelViewModel, Severity};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::input::Focus;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const ABOUT: &str = "Sends connection requests through the automation service. \
Search by keywords and choose how many result pages to process.";

/// Everything the panel needs for one frame.
pub struct Screen<'a> {
    pub view: &'a PanelViewModel,
    pub focus: Focus,
    pub spinner_frame: usize,
    pub service_url: &'a str,
    pub last_reply_at: Option<&'a str>,
}

pub fn render(frame: &mut Frame, screen: &Screen) {
    let view = screen.view;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new(Line::from(Span::styled(
        "Outreach Automation Panel",
        Style::default()
            .fg(Color::Rgb(0, 119, 181))
            .add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, rows[0]);

    frame.render_widget(
        Paragraph::new(ABOUT)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true }),
        rows[1],
    );

    render_input(
        frame,
        rows[2],
        "Search Query",
        &view.query,
        "e.g. HR recruiters",
        screen.focus == Focus::Query,
    );
    render_input(
        frame,
        rows[3],
        "Number of Pages",
        &view.max_pages,
        "1 or more",
        screen.focus == Focus::MaxPages,
    );

    render_buttons(frame, rows[4], screen);
    render_status(frame, rows[5], view);

    if let Some(banner) = &view.completion_banner {
        frame.render_widget(
            Paragraph::new(banner.as_str())
                .style(Style::default().fg(Color::Green))
                .block(Block::default().borders(Borders::ALL)),
            rows[6],
        );
    }

    let footer = format!(
        "Tab: field | Enter: start | Ctrl+X: cancel | Esc: quit | {} | last reply: {}",
        screen.service_url,
        screen.last_reply_at.unwrap_or("-")
    );
    frame.render_widget(
        Paragraph::new(footer).style(Style::default().fg(Color::DarkGray)),
        rows[8],
    );
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let content = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value)
    };
    frame.render_widget(
        Paragraph::new(Line::from(content)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(label),
        ),
        area,
    );

    if focused {
        let width = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
        let max_x = area.x + area.width.saturating_sub(2);
        let x = (area.x + 1).saturating_add(width).min(max_x);
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn render_buttons(frame: &mut Frame, area: Rect, screen: &Screen) {
    let view = screen.view;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let start_label = if view.busy {
        format!("{} Working...", SPINNER[screen.spinner_frame % SPINNER.len()])
    } else {
        "Start Automation [Enter]".to_string()
    };
    frame.render_widget(
        button(&start_label, Color::Blue, view.start_enabled),
        columns[0],
    );
    frame.render_widget(
        button("Cancel Automation [Ctrl+X]", Color::Red, view.cancel_enabled),
        columns[1],
    );
}

fn button(label: &str, color: Color, enabled: bool) -> Paragraph<'_> {
    let style = if enabled {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Paragraph::new(Line::from(label).centered())
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style))
}

fn render_status(frame: &mut Frame, area: Rect, view: &PanelViewModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} | sent: {}", view.phase.label(), view.actions_completed));
    let paragraph = match &view.message {
        Some(message) => Paragraph::new(message.as_str()).style(severity_style(view.severity)),
        None => Paragraph::new("Ready").style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(paragraph.block(block).wrap(Wrap { trim: true }), area);
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Info => Style::default().fg(Color::Cyan),
        Severity::Success => Style::default().fg(Color::Green),
        Severity::Warning => Style::default().fg(Color::Yellow),
        Severity::Error => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    }
}

#[cfg(test)]
mod tests {
    use outreach_core::{PendingRequest, RunPhase, VALIDATION_MESSAGE};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    fn draw(view: &PanelViewModel, focus: Focus) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 28)).unwrap();
        let screen = Screen {
            view,
            focus,
            spinner_frame: 0,
            service_url: "http://127.0.0.1:5000",
            last_reply_at: Some("12:34:56"),
        };
        terminal.draw(|frame| render(frame, &screen)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn idle_panel_shows_form_and_ready_status() {
        let view = PanelViewModel {
            start_enabled: true,
            ..PanelViewModel::default()
        };
        let text = draw(&view, Focus::Query);

        assert!(text.contains("Search Query"));
        assert!(text.contains("Number of Pages"));
        assert!(text.contains("e.g. HR recruiters"));
        assert!(text.contains("Start Automation [Enter]"));
        assert!(text.contains("Ready"));
        assert!(text.contains("last reply: 12:34:56"));
    }

    #[test]
    fn validation_error_is_displayed() {
        let view = PanelViewModel {
            query: String::new(),
            max_pages: "0".to_string(),
            phase: RunPhase::Errored,
            message: Some(VALIDATION_MESSAGE.to_string()),
            severity: Severity::Error,
            start_enabled: true,
            cancel_enabled: true,
            ..PanelViewModel::default()
        };
        let text = draw(&view, Focus::MaxPages);

        assert!(text.contains("Please enter a valid search query"));
        assert!(text.contains("Error | sent: 0"));
    }

    #[test]
    fn busy_panel_shows_spinner_label() {
        let view = PanelViewModel {
            query: "HR recruiters".to_string(),
            max_pages: "3".to_string(),
            phase: RunPhase::Running(PendingRequest::Start),
            message: Some("Starting automation for 'HR recruiters' (3 pages)...".to_string()),
            busy: true,
            ..PanelViewModel::default()
        };
        let text = draw(&view, Focus::Query);

        assert!(text.contains("Working..."));
        assert!(!text.contains("Start Automation [Enter]"));
        assert!(text.contains("Running | sent: 0"));
    }

    #[test]
    fn completed_panel_shows_banner() {
        let view = PanelViewModel {
            phase: RunPhase::Completed,
            message: Some("OK".to_string()),
            severity: Severity::Success,
            actions_completed: 5,
            start_enabled: true,
            cancel_enabled: true,
            completion_banner: Some("5 connection requests sent successfully!".to_string()),
            ..PanelViewModel::default()
        };
        let text = draw(&view, Focus::Query);

        assert!(text.contains("5 connection requests sent successfully!"));
        assert!(text.contains("Completed | sent: 5"));
    }
}
