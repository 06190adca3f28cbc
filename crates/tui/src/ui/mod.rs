pub mod components;
pub mod format;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use engine::TransactionKind;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::AppState;
use theme::Theme;

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();

    // Header, history, footer buttons, key hints
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, layout[0], state, &theme);
    screens::history::render(frame, layout[1], state, &theme);
    components::footer::render_buttons(frame, layout[2], &theme);
    components::footer::render_hints(frame, layout[3], state, &theme);

    let draft = state.session.current_draft_state();
    if draft.is_open {
        components::entry_form::render(frame, area, &draft, &theme);
    }
    components::toast::render(frame, area, state.toast.as_ref(), &theme);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let ledger = state.session.ledger();
    let balance = components::money::styled_amount_bold(
        state.session.current_balance(),
        &state.format,
        theme,
    );

    let lines = vec![
        Line::from(balance),
        Line::from(Span::styled(
            "Todays Balance",
            Style::default().fg(theme.text_muted),
        )),
        Line::from(vec![
            Span::styled("In ", Style::default().fg(theme.text_muted)),
            components::money::styled_total(
                ledger.total_in(),
                TransactionKind::In,
                &state.format,
                theme,
            ),
            Span::styled("   Out ", Style::default().fg(theme.text_muted)),
            components::money::styled_total(
                ledger.total_out(),
                TransactionKind::Out,
                &state.format,
                theme,
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(" My Cashbook ");
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}

/// Rectangle of the given size centered in `area`, clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
