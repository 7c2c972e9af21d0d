use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::ui::{
    context::AppContext,
    state::{AppState, Route},
    traits::{Action, View},
};

pub struct NotFound;

#[async_trait]
impl View for NotFound {
    fn route(&self) -> Route {
        Route::NotFound
    }

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let theme = state.theme;
        let lines = vec![
            Line::styled(
                "Page Not Found",
                Style::default()
                    .fg(theme.text())
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                "We are sorry, the page you requested could not be found.",
                Style::default().fg(theme.muted()),
            ),
        ];

        let top_pad = area.height.saturating_sub(lines.len() as u16) / 2;
        let centered = Rect {
            x: area.x,
            y: area.y + top_pad,
            width: area.width,
            height: area.height.saturating_sub(top_pad),
        };
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
    }

    async fn handle_input(
        &mut self,
        _key: KeyEvent,
        _state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        None
    }
}
