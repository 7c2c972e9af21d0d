use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, ListState},
};
use tokio::task::JoinHandle;

use crate::{
    event::events::Event,
    http::models::VideoSummary,
    ui::{
        components::{failure::FailureNotice, spinner::Spinner},
        context::AppContext,
        state::{ApiStatus, AppState, Route},
        traits::{Action, View},
        util::summary_line,
    },
};

pub struct Trending {
    videos: Vec<VideoSummary>,
    status: ApiStatus,
    list_state: ListState,
    fetch_handle: Option<JoinHandle<()>>,
}

impl Default for Trending {
    fn default() -> Self {
        Self {
            videos: vec![],
            status: ApiStatus::Initial,
            list_state: ListState::default(),
            fetch_handle: None,
        }
    }
}

impl Drop for Trending {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
    }
}

impl Trending {
    fn begin_fetch(&mut self, ctx: &AppContext) {
        self.status = ApiStatus::InProgress;

        let api = ctx.api.clone();
        let tx = ctx.event_tx.clone();

        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
        self.fetch_handle = Some(tokio::spawn(async move {
            match api.fetch_trending_videos().await {
                Ok(videos) => {
                    let _ = tx.send(Event::TrendingVideosFetched(videos));
                }
                Err(e) => {
                    let _ = tx.send(Event::FetchError(e.to_string()));
                }
            }
        }));
    }
}

#[async_trait]
impl View for Trending {
    fn route(&self) -> Route {
        Route::Trending
    }

    async fn on_mount(&mut self, ctx: &AppContext) {
        self.begin_fetch(ctx);
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        match event {
            Event::TrendingVideosFetched(videos) => {
                if self.status == ApiStatus::InProgress {
                    self.videos = videos.clone();
                    self.status = ApiStatus::Success;
                    self.list_state
                        .select((!self.videos.is_empty()).then_some(0));
                }
            }
            Event::FetchError(_) => {
                if self.status == ApiStatus::InProgress {
                    self.status = ApiStatus::Failure;
                }
            }
            _ => {}
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let theme = state.theme;

        match self.status {
            ApiStatus::Initial | ApiStatus::InProgress => {
                let spinner = Spinner::default()
                    .with_style(Style::default().fg(theme.primary()))
                    .with_label("Loading trending videos...");
                f.render_widget(spinner, area);
            }
            ApiStatus::Failure => f.render_widget(FailureNotice::new(theme), area),
            ApiStatus::Success => {
                let title_width = (area.width as usize).saturating_sub(40).max(20);
                let items: Vec<ListItem> = self
                    .videos
                    .iter()
                    .map(|video| ListItem::new(summary_line(video, theme, title_width)))
                    .collect();

                let list = List::new(items)
                    .highlight_style(
                        Style::default()
                            .fg(theme.primary())
                            .add_modifier(Modifier::BOLD),
                    )
                    .highlight_symbol("> ");
                f.render_stateful_widget(list, area, &mut self.list_state);
            }
        }
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Char('r') if self.status == ApiStatus::Failure => {
                self.begin_fetch(ctx);
                Some(Action::None)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.videos.is_empty() {
                    let i = self.list_state.selected().unwrap_or(0);
                    if i + 1 < self.videos.len() {
                        self.list_state.select(Some(i + 1));
                    }
                }
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if !self.videos.is_empty() {
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
                .and_then(|i| self.videos.get(i))
                .map(|video| Action::Navigate(Route::VideoDetail(video.id.clone()))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::views::test_support::offline_ctx;

    #[tokio::test]
    async fn only_trending_events_settle_this_view() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _rx) = offline_ctx(dir.path());

        let mut trending = Trending::default();
        trending.on_mount(&ctx).await;
        assert_eq!(trending.status, ApiStatus::InProgress);

        trending
            .on_event(&Event::HomeVideosFetched(vec![]), &ctx)
            .await;
        assert_eq!(trending.status, ApiStatus::InProgress);

        trending
            .on_event(&Event::TrendingVideosFetched(vec![]), &ctx)
            .await;
        assert_eq!(trending.status, ApiStatus::Success);
    }
}
