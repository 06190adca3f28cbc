use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub text_muted: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub positive: Color,
    pub negative: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::Rgb(220, 220, 220),
            text_muted: Color::Rgb(160, 160, 160),
            dim: Color::Rgb(100, 100, 100),
            accent: Color::Rgb(80, 160, 160),
            border: Color::Rgb(70, 76, 82),
            positive: Color::Rgb(60, 179, 113),
            negative: Color::Rgb(220, 80, 80),
            error: Color::Rgb(200, 80, 80),
        }
    }
}

impl Theme {
    /// Colour of the "In" (green) and "Out" (red) buttons and columns.
    pub fn kind(&self, kind: engine::TransactionKind) -> Color {
        match kind {
            engine::TransactionKind::In => self.positive,
            engine::TransactionKind::Out => self.negative,
        }
    }
}
