use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::ui::{
    context::AppContext,
    state::{AppState, Route},
    traits::{Action, View},
    util::truncate_to_width,
};

/// Renders the shared saved list; nothing to fetch, so no request status.
#[derive(Default)]
pub struct SavedVideos {
    list_state: ListState,
}

#[async_trait]
impl View for SavedVideos {
    fn route(&self) -> Route {
        Route::SavedVideos
    }

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let theme = state.theme;
        let saved = state.saved.videos();

        if saved.is_empty() {
            let notice = Paragraph::new(vec![
                Line::styled(
                    "No saved videos found",
                    Style::default()
                        .fg(theme.text())
                        .add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    "You can save your videos while watching them",
                    Style::default().fg(theme.muted()),
                ),
            ]);
            f.render_widget(notice, area);
            return;
        }

        let title_width = (area.width as usize).saturating_sub(40).max(20);
        let items: Vec<ListItem> = saved
            .iter()
            .map(|video| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        truncate_to_width(&video.title, title_width),
                        Style::default().fg(theme.text()),
                    ),
                    Span::styled(
                        format!(
                            "  ·  {} · {} views · {}",
                            video.channel.name, video.view_count, video.published_at
                        ),
                        Style::default().fg(theme.muted()),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(theme.primary())
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        if self.list_state.selected().map_or(true, |i| i >= saved.len()) {
            self.list_state.select(Some(0));
        }
        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        let len = state.saved.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if len > 0 {
                    let i = self.list_state.selected().unwrap_or(0);
                    if i + 1 < len {
                        self.list_state.select(Some(i + 1));
                    }
                }
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if len > 0 {
                    let i = self.list_state.selected().unwrap_or(0);
                    if i > 0 {
                        self.list_state.select(Some(i - 1));
                    }
                }
                Some(Action::None)
            }
            KeyCode::Enter => self
                .list_state
                .selected()
                .and_then(|i| state.saved.videos().get(i))
                .map(|video| Action::Navigate(Route::VideoDetail(video.id.clone()))),
            _ => None,
        }
    }
}
