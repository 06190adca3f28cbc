use engine::TransactionKind;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{app::AppState, ui::theme::Theme};

/// The always visible "In" / "Out" buttons.
pub fn render_buttons(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    for (kind, key, rect) in [
        (TransactionKind::In, "F1", cols[0]),
        (TransactionKind::Out, "F2", cols[1]),
    ] {
        frame.render_widget(button(kind, key, theme), rect);
    }
}

fn button(kind: TransactionKind, key: &str, theme: &Theme) -> Paragraph<'static> {
    let color = theme.kind(kind);
    let label = Line::from(vec![
        Span::styled(
            kind.label(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {key}"), Style::default().fg(theme.dim)),
    ]);
    Paragraph::new(label).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    )
}

const IDLE_HINTS: &[(&str, &str)] = &[
    ("i", "cash in"),
    ("o", "cash out"),
    ("↑↓", "scroll"),
    ("q", "quit"),
];

const DRAFT_HINTS: &[(&str, &str)] = &[
    ("Tab", "next field"),
    ("Enter", "save"),
    ("Esc", "close"),
    ("F1/F2", "close"),
];

pub fn render_hints(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let hints = if state.session.flow().is_drafting() {
        DRAFT_HINTS
    } else {
        IDLE_HINTS
    };

    let mut parts = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        }
        parts.push(Span::styled(*key, Style::default().fg(theme.accent)));
        parts.push(Span::raw(format!(" {action}")));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
