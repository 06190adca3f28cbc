use engine::{Transaction, TransactionKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::{
    app::AppState,
    ui::{format::Formatter, theme::Theme},
};

pub const EMPTY_MESSAGE: &str = "No Entry Found!";

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(" Entries ");
    let entries = state.session.current_entries();

    if entries.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            EMPTY_MESSAGE,
            Style::default().fg(theme.text_muted),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(["Time", "Note", "Out", "In"])
        .style(Style::default().fg(theme.text_muted));
    let rows = entries
        .iter()
        .map(|tx| entry_row(tx, &state.format, theme))
        .collect::<Vec<_>>();

    let table = Table::new(
        rows,
        [
            Constraint::Length(24),
            Constraint::Min(10),
            Constraint::Length(16),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("» ");

    let selected = state.history.selected.min(entries.len() - 1);
    let mut table_state = TableState::default().with_selected(Some(selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

/// One history row: the amount sits in the column of its kind, the other
/// column shows `-`.
fn entry_row(tx: &Transaction, format: &Formatter, theme: &Theme) -> Row<'static> {
    let amount = format.money(tx.amount());
    let column = |kind: TransactionKind| {
        if tx.kind() == kind {
            Cell::from(amount.clone()).style(Style::default().fg(theme.kind(kind)))
        } else {
            Cell::from("-").style(Style::default().fg(theme.dim))
        }
    };

    Row::new(vec![
        Cell::from(format.timestamp(tx.recorded_at())).style(Style::default().fg(theme.text_muted)),
        Cell::from(tx.note().to_string()),
        column(TransactionKind::Out),
        column(TransactionKind::In),
    ])
}
