use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::ui::theme::Theme;

/// Failure screen shared by every fetching view; the owning view handles
/// the `r` retry key itself.
pub struct FailureNotice {
    theme: Theme,
    message: Option<String>,
}

impl FailureNotice {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Widget for FailureNotice {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let detail = self
            .message
            .unwrap_or_else(|| "We are having some trouble completing your request.".to_string());

        let lines = vec![
            Line::styled(
                "Oops! Something Went Wrong",
                Style::default()
                    .fg(theme.text())
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(detail, Style::default().fg(theme.muted())),
            Line::raw(""),
            Line::styled("press r to retry", Style::default().fg(theme.primary())),
        ];

        let top_pad = area.height.saturating_sub(lines.len() as u16) / 2;
        let centered = Rect {
            x: area.x,
            y: area.y + top_pad,
            width: area.width,
            height: area.height.saturating_sub(top_pad),
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(centered, buf);
    }
}
