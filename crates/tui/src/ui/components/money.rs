use engine::{Money, TransactionKind};
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::{format::Formatter, theme::Theme};

fn sign_color(amount: Money, theme: &Theme) -> ratatui::style::Color {
    if amount.is_positive() {
        theme.positive
    } else if amount.is_negative() {
        theme.negative
    } else {
        theme.text
    }
}

/// Bold amount coloured by sign, used for the balance.
#[must_use]
pub fn styled_amount_bold(amount: Money, format: &Formatter, theme: &Theme) -> Span<'static> {
    Span::styled(
        format.money(amount),
        Style::default()
            .fg(sign_color(amount, theme))
            .add_modifier(Modifier::BOLD),
    )
}

/// Unsigned amount in the colour of its column ("In" green, "Out" red).
#[must_use]
pub fn styled_total(
    amount: Money,
    kind: TransactionKind,
    format: &Formatter,
    theme: &Theme,
) -> Span<'static> {
    Span::styled(format.money(amount.abs()), Style::default().fg(theme.kind(kind)))
}
