use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::Theme;

pub struct Header<'a> {
    theme: Theme,
    route_title: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(theme: Theme, route_title: &'a str) -> Self {
        Self { theme, route_title }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        let brand = Line::from(vec![
            Span::styled(
                "▶ tuitube",
                Style::default()
                    .fg(theme.danger())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", self.route_title), Style::default().fg(theme.muted())),
        ]);
        Paragraph::new(brand).render(inner, buf);

        let mode_icon = if theme.is_dark() { "☾" } else { "☀" };
        let hints = Line::from(Span::styled(
            format!("{mode_icon}  t theme · Q logout · q quit"),
            Style::default().fg(theme.muted()),
        ));
        Paragraph::new(hints)
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}
