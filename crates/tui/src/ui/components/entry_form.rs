use engine::{DraftField, DraftState, TransactionKind};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::{centered_rect, theme::Theme};

const FORM_WIDTH: u16 = 48;
const FORM_HEIGHT: u16 = 10;

/// "New Entry" modal drawn over the history.
pub fn render(frame: &mut Frame<'_>, area: Rect, draft: &DraftState, theme: &Theme) {
    let Some(kind) = draft.target_kind else {
        return;
    };
    let rect = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);

    let lines = vec![
        Line::default(),
        field_line("Amount", &draft.amount, draft.focus == Some(DraftField::Amount), theme),
        Line::default(),
        field_line("Note", &draft.note, draft.focus == Some(DraftField::Note), theme),
        Line::default(),
        submit_line(kind, draft.is_submit_disabled, theme),
        Line::from(Span::styled(
            "Esc closes without saving",
            Style::default().fg(theme.dim),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.kind(kind)))
        .title(" New Entry ");

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        rect,
    );
}

fn field_line(label: &'static str, value: &str, focused: bool, theme: &Theme) -> Line<'static> {
    let value_style = if focused {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(theme.text)
    };
    let cursor = if focused { "▏" } else { " " };

    Line::from(vec![
        Span::styled(format!("{label:>6}: "), Style::default().fg(theme.text_muted)),
        Span::styled(format!("{value:<24}"), value_style),
        Span::styled(cursor, Style::default().fg(theme.accent)),
    ])
}

/// Submit button named after the entry kind; dimmed while the draft cannot
/// be saved.
fn submit_line(kind: TransactionKind, disabled: bool, theme: &Theme) -> Line<'static> {
    let style = if disabled {
        Style::default()
            .fg(theme.dim)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
            .fg(theme.kind(kind))
            .add_modifier(Modifier::BOLD)
    };
    let mut spans = vec![Span::styled(format!("[ {} ]", kind.label()), style)];
    if disabled {
        spans.push(Span::styled(
            "  amount > 0 and a note required",
            Style::default().fg(theme.dim),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use engine::{Intent, Session};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn draw(draft: &DraftState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), draft, &Theme::default()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn closed_draft_draws_nothing() {
        let screen = draw(&Session::new().current_draft_state());
        assert!(!screen.contains("New Entry"));
    }

    #[test]
    fn open_draft_shows_fields_and_disabled_hint() {
        let mut session = Session::new();
        session.handle(Intent::RequestNewEntry(TransactionKind::Out));
        let screen = draw(&session.current_draft_state());

        assert!(screen.contains("New Entry"));
        assert!(screen.contains("Amount"));
        assert!(screen.contains("[ Out ]"));
        assert!(screen.contains("required"));
    }

    #[test]
    fn valid_draft_hides_hint() {
        let mut session = Session::new();
        session.handle(Intent::RequestNewEntry(TransactionKind::In));
        session.handle(Intent::UpdateField(DraftField::Amount, "10".into()));
        session.handle(Intent::UpdateField(DraftField::Note, "gift".into()));
        let screen = draw(&session.current_draft_state());

        assert!(screen.contains("[ In ]"));
        assert!(!screen.contains("required"));
    }
}
